//! Content records rendered by the page templates

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Post author shown in the "About the Author" card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
}

/// A link to another post, shown under "Related Posts"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPost {
    pub title: String,
    pub slug: String,
}

/// A reply to a comment.
///
/// Replies carry no replies of their own, so comment threads are exactly
/// one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub date: String,
}

/// A top-level comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A full blog post with its body, author and discussion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// URL-friendly name, the post is written to `/blog/<slug>/`
    pub slug: String,

    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    pub image: String,

    pub author: Author,

    /// Display date, e.g. "May 15, 2024"
    pub date: String,

    /// Display reading time, e.g. "8 min read". Computed from the body when absent.
    #[serde(default)]
    pub reading_time: Option<String>,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Markdown body
    pub body: String,

    /// Short table of contents labels keyed by heading id. Headings without
    /// an entry use their own text.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub toc_labels: IndexMap<String, String>,

    #[serde(default)]
    pub related: Vec<RelatedPost>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}

/// The hero post on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub date: String,
    pub category: String,
}

/// A card in the home page "Recent Posts" grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub image: String,
    pub category: String,
}

impl PostSummary {
    /// Lowercased title with every space replaced by a dash
    pub fn slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }
}

/// A post category with its icon glyph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub event: String,
}

/// One of the mission cards on the about page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub featured: FeaturedPost,
    pub recent: Vec<PostSummary>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub hero_image: String,
    pub intro: String,
    pub mission: String,
    pub values: Vec<CoreValue>,
    pub timeline: Vec<TimelineEntry>,
    pub team: Vec<TeamMember>,
}

/// Everything the site renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub posts: Vec<Post>,
    pub contact: ContactInfo,
}

/// A post card on a category page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub title: String,
    pub href: String,
    pub image: String,
}

impl SiteContent {
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.home.categories.iter().find(|c| c.slug() == slug)
    }

    /// Every post record filed under `category`, featured post first, then
    /// full posts, then recent post cards.
    pub fn posts_in_category(&self, category: &Category) -> Vec<CategoryListing> {
        let mut listings = Vec::new();

        let featured = &self.home.featured;
        if category.matches(&featured.category) {
            listings.push(CategoryListing {
                title: featured.title.clone(),
                href: format!("/blog/{}", featured.slug),
                image: featured.image.clone(),
            });
        }

        for post in self.posts.iter().filter(|p| category.matches(&p.category)) {
            listings.push(CategoryListing {
                title: post.title.clone(),
                href: format!("/blog/{}", post.slug),
                image: post.image.clone(),
            });
        }

        for summary in self
            .home
            .recent
            .iter()
            .filter(|s| category.matches(&s.category))
        {
            listings.push(CategoryListing {
                title: summary.title.clone(),
                href: format!("/blog/{}", summary.slug()),
                image: summary.image.clone(),
            });
        }

        listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_slug_replaces_every_space() {
        let summary = PostSummary {
            title: "Understanding the JAMstack Architecture".to_string(),
            image: String::new(),
            category: "Web Development".to_string(),
        };
        assert_eq!(summary.slug(), "understanding-the-jamstack-architecture");
    }

    #[test]
    fn test_summary_slug_keeps_punctuation() {
        let summary = PostSummary {
            title: "Introduction to Web Accessibility (A11y)".to_string(),
            image: String::new(),
            category: "Accessibility".to_string(),
        };
        assert_eq!(summary.slug(), "introduction-to-web-accessibility-(a11y)");
    }

    #[test]
    fn test_category_matches_ignores_case() {
        let category = Category {
            name: "Technology".to_string(),
            icon: "💻".to_string(),
        };
        assert!(category.matches("technology"));
        assert!(category.matches(" TECHNOLOGY "));
        assert!(!category.matches("Design"));
        assert_eq!(category.slug(), "technology");
    }

    #[test]
    fn test_comment_count_includes_replies() {
        let content = crate::content::builtin();
        let post = &content.posts[0];
        assert_eq!(post.comment_count(), 3);
    }

    #[test]
    fn test_posts_in_category() {
        let content = crate::content::builtin();
        let technology = content.category("technology").unwrap();
        let listings = content.posts_in_category(technology);
        assert_eq!(listings[0].href, "/blog/featured-post");
        assert!(listings
            .iter()
            .any(|l| l.title == "The Future of Artificial Intelligence in Web Development"));

        let career = content.category("career").unwrap();
        assert!(content.posts_in_category(career).is_empty());
    }
}
