//! Content module - page records, built-in content and post body rendering

mod data;
pub mod loader;
mod markdown;
mod model;

pub use data::builtin;
pub use markdown::{Heading, MarkdownRenderer, RenderedMarkdown};
pub use model::{
    AboutContent, Author, Category, CategoryListing, Comment, ContactInfo, CoreValue,
    FeaturedPost, HomeContent, Post, PostSummary, RelatedPost, Reply, SiteContent, TeamMember,
    TimelineEntry,
};
