//! Site content: services, portfolio, testimonials, and the blog.

pub mod catalog;
pub mod model;

pub use catalog::Catalog;
pub use model::{Author, BlogPost, Project, Service, Testimonial, reading_time_minutes};
