//! Content model for the site's pages.

use serde::{Deserialize, Serialize};

/// Words-per-minute assumed when estimating reading time.
const READING_WPM: usize = 200;

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    (words.div_ceil(READING_WPM)).max(1) as u32
}

/// A service offering listed on the services page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Bullet points shown on the detail page.
    pub highlights: Vec<String>,
}

/// A portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub summary: String,
}

/// A client testimonial shown on the home page carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
}

/// A blog post. Reading time is derived from the body, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: String,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub author: Author,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn read_time_minutes(&self) -> u32 {
        reading_time_minutes(&self.body)
    }
}
