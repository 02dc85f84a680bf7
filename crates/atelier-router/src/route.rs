//! The site's route table.

use serde::{Deserialize, Serialize};

/// One of the three service detail pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceArea {
    WebDevelopment,
    DataEntry,
    CreativeWriting,
}

impl ServiceArea {
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceArea::WebDevelopment => "web-development",
            ServiceArea::DataEntry => "data-entry",
            ServiceArea::CreativeWriting => "creative-writing",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "web-development" => Some(ServiceArea::WebDevelopment),
            "data-entry" => Some(ServiceArea::DataEntry),
            "creative-writing" => Some(ServiceArea::CreativeWriting),
            _ => None,
        }
    }
}

/// A resolved page route. Unknown paths fall through to [`Route::NotFound`]
/// rather than erroring, matching how the site renders a 404 page in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Services,
    ServiceDetail(ServiceArea),
    Portfolio,
    Blog,
    BlogPost { slug: String },
    Careers,
    Contact,
    NotFound { path: String },
}

impl Route {
    /// Resolve a path to a route. Trailing slashes are ignored; matching is
    /// exact otherwise.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["services"] => Route::Services,
            ["services", slug] => match ServiceArea::from_slug(slug) {
                Some(area) => Route::ServiceDetail(area),
                None => Route::NotFound {
                    path: path.to_string(),
                },
            },
            ["portfolio"] => Route::Portfolio,
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost {
                slug: (*slug).to_string(),
            },
            ["careers"] => Route::Careers,
            ["contact"] => Route::Contact,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail(area) => format!("/services/{}", area.slug()),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost { slug } => format!("/blog/{slug}"),
            Route::Careers => "/careers".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Element id of this route's page root, the target of entrance and
    /// exit animations.
    pub fn page_element(&self) -> String {
        format!("page:{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes_round_trip() {
        for path in [
            "/", "/about", "/services", "/portfolio", "/blog", "/careers", "/contact",
        ] {
            let route = Route::parse(path);
            assert!(!matches!(route, Route::NotFound { .. }), "{path}");
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn test_service_detail_routes() {
        assert_eq!(
            Route::parse("/services/web-development"),
            Route::ServiceDetail(ServiceArea::WebDevelopment)
        );
        assert_eq!(
            Route::parse("/services/data-entry"),
            Route::ServiceDetail(ServiceArea::DataEntry)
        );
        assert_eq!(
            Route::parse("/services/creative-writing"),
            Route::ServiceDetail(ServiceArea::CreativeWriting)
        );
        assert!(matches!(
            Route::parse("/services/plumbing"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn test_blog_slug_is_dynamic() {
        let route = Route::parse("/blog/how-we-ship");
        assert_eq!(
            route,
            Route::BlogPost {
                slug: "how-we-ship".to_string()
            }
        );
        assert_eq!(route.path(), "/blog/how-we-ship");
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/blog/post-1/"), Route::parse("/blog/post-1"));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::parse("/definitely/not/here");
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(route.path(), "/definitely/not/here");
    }

    #[test]
    fn test_page_element_ids_are_distinct() {
        assert_ne!(
            Route::parse("/about").page_element(),
            Route::parse("/contact").page_element()
        );
        assert_eq!(Route::Home.page_element(), "page:/");
    }
}
