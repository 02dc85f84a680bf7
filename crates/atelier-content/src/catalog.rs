//! The built-in content catalog.
//!
//! The site ships its content compiled in rather than fetched: three
//! service lines, a portfolio grid, home-page testimonials, and the blog.
//! Lookup is by slug; unknown slugs return `None` so routes can fall back
//! to a not-found page.

use crate::model::{Author, BlogPost, Project, Service, Testimonial};

/// All site content, assembled once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    posts: Vec<BlogPost>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            services: sample_services(),
            projects: sample_projects(),
            testimonials: sample_testimonials(),
            posts: sample_posts(),
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn projects_in_category(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Posts in publication order, newest first.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn posts_tagged(&self, tag: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .collect()
    }
}

fn sample_services() -> Vec<Service> {
    vec![
        Service {
            slug: "web-development".to_string(),
            title: "Web Development".to_string(),
            summary: "Fast, accessible sites built on modern tooling.".to_string(),
            highlights: vec![
                "Responsive layouts".to_string(),
                "Performance budgets".to_string(),
                "CMS integration".to_string(),
            ],
        },
        Service {
            slug: "data-entry".to_string(),
            title: "Data Entry".to_string(),
            summary: "Accurate, audited data processing at volume.".to_string(),
            highlights: vec![
                "Double-keyed verification".to_string(),
                "Format migration".to_string(),
                "Turnaround guarantees".to_string(),
            ],
        },
        Service {
            slug: "creative-writing".to_string(),
            title: "Creative Writing".to_string(),
            summary: "Copy and long-form content with a consistent voice.".to_string(),
            highlights: vec![
                "Brand voice development".to_string(),
                "Editorial calendars".to_string(),
                "SEO-aware drafting".to_string(),
            ],
        },
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            slug: "harbor-rebrand".to_string(),
            title: "Harbor Logistics Rebrand".to_string(),
            category: "Web".to_string(),
            summary: "Full site rebuild with a 40% faster first paint.".to_string(),
        },
        Project {
            slug: "ledger-migration".to_string(),
            title: "Ledger Archive Migration".to_string(),
            category: "Data".to_string(),
            summary: "Twelve years of paper records digitized and indexed.".to_string(),
        },
        Project {
            slug: "meridian-launch".to_string(),
            title: "Meridian Product Launch".to_string(),
            category: "Writing".to_string(),
            summary: "Launch copy, landing pages, and a six-week content push.".to_string(),
        },
        Project {
            slug: "atlas-storefront".to_string(),
            title: "Atlas Storefront".to_string(),
            category: "Web".to_string(),
            summary: "Headless commerce build with custom checkout flows.".to_string(),
        },
    ]
}

fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Dana Reyes".to_string(),
            role: "COO, Harbor Logistics".to_string(),
            quote: "They delivered ahead of schedule and the site has been flawless since."
                .to_string(),
        },
        Testimonial {
            author: "Sam Whitfield".to_string(),
            role: "Founder, Meridian".to_string(),
            quote: "The launch copy carried our voice better than we could ourselves.".to_string(),
        },
        Testimonial {
            author: "Priya Nair".to_string(),
            role: "Archivist, City Ledger Office".to_string(),
            quote: "Twelve years of records, zero discrepancies on audit.".to_string(),
        },
    ]
}

fn sample_posts() -> Vec<BlogPost> {
    let maya = Author {
        name: "Maya Okafor".to_string(),
        role: "Lead Writer".to_string(),
    };
    let theo = Author {
        name: "Theo Lindqvist".to_string(),
        role: "Engineering Lead".to_string(),
    };

    vec![
        BlogPost {
            id: 3,
            slug: "shipping-without-a-redesign".to_string(),
            title: "Shipping Without a Redesign".to_string(),
            excerpt: "Incremental performance work beats the big rewrite.".to_string(),
            body: "Every few years a team decides the only way forward is a rewrite. \
                   Our experience says otherwise: measure first, fix the slowest page, \
                   and keep shipping while you do it. This post walks through the \
                   budget-driven process we used on three client sites last year and \
                   the numbers that came out of it."
                .to_string(),
            category: "Engineering".to_string(),
            date: "2026-06-02".to_string(),
            author: theo.clone(),
            tags: vec!["performance".to_string(), "process".to_string()],
        },
        BlogPost {
            id: 2,
            slug: "voice-before-volume".to_string(),
            title: "Voice Before Volume".to_string(),
            excerpt: "Why we write a voice guide before the first article.".to_string(),
            body: "Content calendars fail when every piece sounds like a different \
                   company wrote it. Before we draft anything we spend a week on a \
                   voice guide: vocabulary, cadence, the jokes you will and will not \
                   make. It feels slow. It is the fastest thing we do."
                .to_string(),
            category: "Writing".to_string(),
            date: "2026-03-18".to_string(),
            author: maya.clone(),
            tags: vec!["writing".to_string(), "process".to_string()],
        },
        BlogPost {
            id: 1,
            slug: "the-quiet-work-of-data-entry".to_string(),
            title: "The Quiet Work of Data Entry".to_string(),
            excerpt: "Accuracy is a process property, not a personal virtue.".to_string(),
            body: "Nobody brags about data entry, which is exactly why it goes wrong. \
                   Double keying, checksum columns, and sampled audits turn a tedious \
                   job into a reliable one. Here is the checklist we run on every \
                   migration engagement."
                .to_string(),
            category: "Operations".to_string(),
            date: "2026-01-09".to_string(),
            author: maya,
            tags: vec!["data".to_string()],
        },
    ]
}
