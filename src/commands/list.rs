//! List site content

use anyhow::Result;

use crate::content::{loader::ContentLoader, SiteContent};
use crate::generator;
use crate::TechBlog;

/// List site content by type
pub fn run(site: &TechBlog, content_type: &str) -> Result<()> {
    let content = ContentLoader::new(site).load()?;
    for line in listing(&content, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed for `content_type`, header first
pub fn listing(content: &SiteContent, content_type: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            lines.push(format!("Posts ({}):", content.posts.len()));
            for post in &content.posts {
                lines.push(format!(
                    "  {} - {} [{}] ({} comments)",
                    post.date,
                    post.title,
                    post.slug,
                    post.comment_count()
                ));
            }
        }
        "page" | "pages" => {
            let pages = [
                ("Home", "/"),
                ("About Us", "/about-us/"),
                ("Contact Us", "/contact-us/"),
                ("Categories", "/categories/"),
            ];
            lines.push(format!("Pages ({}):", pages.len()));
            for (title, path) in pages {
                lines.push(format!("  {} [{}]", title, path));
            }
        }
        "route" | "routes" => {
            let pages = generator::pages(content);
            lines.push(format!("Routes ({}):", pages.len()));
            for page in pages {
                lines.push(format!("  {}", page.path()));
            }
        }
        "category" | "categories" => {
            let categories = &content.home.categories;
            lines.push(format!("Categories ({}):", categories.len()));
            for category in categories {
                lines.push(format!(
                    "  {} {} ({})",
                    category.icon,
                    category.name,
                    content.posts_in_category(category).len()
                ));
            }
        }
        "team" => {
            let team = &content.about.team;
            lines.push(format!("Team ({}):", team.len()));
            for member in team {
                lines.push(format!("  {} - {}", member.name, member.role));
            }
        }
        "timeline" => {
            let timeline = &content.about.timeline;
            lines.push(format!("Timeline ({}):", timeline.len()));
            for entry in timeline {
                lines.push(format!("  {} {}", entry.year, entry.event));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, route, category, team, timeline",
                content_type
            );
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    #[test]
    fn test_list_posts() {
        let lines = listing(&builtin(), "post").unwrap();
        assert_eq!(lines[0], "Posts (1):");
        assert_eq!(
            lines[1],
            "  May 15, 2024 - The Future of Artificial Intelligence in Web Development [future-of-ai-in-web-development] (3 comments)"
        );
    }

    #[test]
    fn test_list_routes() {
        let lines = listing(&builtin(), "route").unwrap();
        assert!(lines.contains(&"  /about-us/".to_string()));
        assert!(lines.contains(&"  /category/technology/".to_string()));
        assert!(lines.contains(&"  /blog/future-of-ai-in-web-development/".to_string()));
    }

    #[test]
    fn test_list_team_and_timeline() {
        let team = listing(&builtin(), "team").unwrap();
        assert_eq!(team[0], "Team (4):");
        assert!(team.contains(&"  Jane Doe - Founder & Editor-in-Chief".to_string()));

        let timeline = listing(&builtin(), "timeline").unwrap();
        assert_eq!(timeline.last().unwrap(), "  2024 Celebrating 4 years of tech insights");
    }

    #[test]
    fn test_unknown_type() {
        assert!(listing(&builtin(), "tags").is_err());
    }
}
