//! Atelier configuration system
//!
//! This crate provides centralized configuration management for the site
//! runtime, loading settings from `atelier.toml` as an alternative to
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the site runtime
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtelierConfig {
    /// Contact form settings
    pub contact: ContactConfig,
    /// Motion and scroll settings
    pub motion: MotionConfig,
}

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Origin of the API server handling contact submissions
    pub api_base: String,
}

/// Motion and scroll configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Force reduced motion regardless of the host preference
    pub reduced_motion: bool,
    /// Scroll offset past which the back-to-top control shows
    pub scroll_to_top_threshold: f64,
    /// Delay between sibling reveals triggered together, in milliseconds
    pub reveal_stagger_ms: f32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:4000".to_string(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            scroll_to_top_threshold: 300.0,
            reveal_stagger_ms: 100.0,
        }
    }
}

impl AtelierConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the atelier.toml configuration file
    ///
    /// # Returns
    /// * `Ok(AtelierConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (atelier.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("atelier.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(base) = std::env::var("ATELIER_API_BASE") {
            self.contact.api_base = base;
        }
        if let Ok(val) = std::env::var("ATELIER_REDUCED_MOTION") {
            self.motion.reduced_motion = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("ATELIER_SCROLL_THRESHOLD") {
            if let Ok(threshold) = val.parse::<f64>() {
                self.motion.scroll_to_top_threshold = threshold;
            }
        }
        if let Ok(val) = std::env::var("ATELIER_REVEAL_STAGGER_MS") {
            if let Ok(stagger) = val.parse::<f32>() {
                self.motion.reveal_stagger_ms = stagger;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from atelier.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AtelierConfig::default();
        assert_eq!(config.contact.api_base, "http://localhost:4000");
        assert!(!config.motion.reduced_motion);
        assert_eq!(config.motion.scroll_to_top_threshold, 300.0);
    }

    #[test]
    fn test_toml_serialization() {
        let config = AtelierConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AtelierConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.motion.reveal_stagger_ms, 100.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AtelierConfig = toml::from_str(
            r#"
            [contact]
            api_base = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.contact.api_base, "https://api.example.com");
        assert_eq!(parsed.motion.scroll_to_top_threshold, 300.0);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if atelier.toml doesn't exist
        let config = AtelierConfig::load_or_default();
        assert_eq!(config.motion.reveal_stagger_ms, 100.0);
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variable
        unsafe {
            std::env::set_var("ATELIER_API_BASE", "http://localhost:9999");
            std::env::set_var("ATELIER_REDUCED_MOTION", "true");
        }

        let mut config = AtelierConfig::default();
        config.merge_with_env();

        assert_eq!(config.contact.api_base, "http://localhost:9999");
        assert!(config.motion.reduced_motion);

        // Clean up
        unsafe {
            std::env::remove_var("ATELIER_API_BASE");
            std::env::remove_var("ATELIER_REDUCED_MOTION");
        }
    }
}
