//! Generator module - renders every TechBlog route into the public directory

mod links;

pub use links::{check_links, BrokenLink};

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::content::{Category, MarkdownRenderer, Post, SiteContent};
use crate::helpers;
use crate::templates::{
    CategoryView, ConfigData, MenuItem, PostView, RecentView, RelatedView, ShareLink,
    TemplateRenderer, ASSETS,
};
use crate::TechBlog;

/// Networks offered by the post page share card, in display order
const SHARE_NETWORKS: &[(&str, &str)] = &[
    ("twitter", "Twitter"),
    ("facebook", "Facebook"),
    ("linkedin", "LinkedIn"),
];

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Categories,
    Contact,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Categories,
        Section::Contact,
    ];

    fn menu_item(self) -> MenuItem {
        let (name, path) = match self {
            Section::Home => ("Home", "/"),
            Section::About => ("About", "/about-us/"),
            Section::Categories => ("Categories", "/categories/"),
            Section::Contact => ("Contact", "/contact-us/"),
        };
        MenuItem {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// A route the generator writes
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Home,
    About,
    Contact,
    Categories,
    Category(&'a Category),
    Post(&'a Post),
}

impl Page<'_> {
    /// Route path, always with a trailing slash
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::About => "/about-us/".to_string(),
            Page::Contact => "/contact-us/".to_string(),
            Page::Categories => "/categories/".to_string(),
            Page::Category(category) => format!("/category/{}/", category.slug()),
            Page::Post(post) => format!("/blog/{}/", post.slug),
        }
    }

    /// Output file relative to the public dir
    pub fn output_path(&self) -> String {
        format!("{}index.html", self.path().trim_start_matches('/'))
    }

    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::About => "about.html",
            Page::Contact => "contact.html",
            Page::Categories => "categories.html",
            Page::Category(_) => "category.html",
            Page::Post(_) => "post.html",
        }
    }

    /// Body class suffix
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Categories | Page::Category(_) => "category",
            Page::Post(_) => "post",
        }
    }

    /// Navigation section the page belongs to, if any
    pub fn section(&self) -> Option<Section> {
        match self {
            Page::Home => Some(Section::Home),
            Page::About => Some(Section::About),
            Page::Contact => Some(Section::Contact),
            Page::Categories | Page::Category(_) => Some(Section::Categories),
            Page::Post(_) => None,
        }
    }
}

/// Header links for `page`: every section except the current one, keeping
/// at most three by dropping Categories first
pub fn nav_links(page: &Page) -> Vec<MenuItem> {
    let current = page.section();
    let mut sections: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|s| Some(*s) != current)
        .collect();
    if sections.len() > 3 {
        sections.retain(|s| *s != Section::Categories);
    }
    sections.into_iter().map(Section::menu_item).collect()
}

/// Every route for `content`, in write order
pub fn pages(content: &SiteContent) -> Vec<Page<'_>> {
    let mut pages = vec![Page::Home, Page::About, Page::Contact, Page::Categories];
    pages.extend(content.home.categories.iter().map(Page::Category));
    pages.extend(content.posts.iter().map(Page::Post));
    pages
}

/// Result of a full generation
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Written pages relative to the public dir
    pub pages: Vec<String>,
    pub broken_links: Vec<BrokenLink>,
}

/// Static site generator using the embedded Tera templates
pub struct Generator {
    site: TechBlog,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &TechBlog) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;
        let markdown = MarkdownRenderer::with_options(
            &site.config.highlight.theme,
            site.config.highlight.line_number,
        );

        Ok(Self {
            site: site.clone(),
            renderer,
            markdown,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, content: &SiteContent) -> Result<GenerateReport> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("Failed to create {:?}", public_dir))?;

        // Built-in stylesheet, script and placeholder image
        for (path, data) in ASSETS {
            write_file(&public_dir.join(path), data)?;
        }

        // Copy source assets (images, etc.)
        self.copy_source_assets()?;

        let mut report = GenerateReport::default();
        for page in pages(content) {
            let html = self.render(&page, content)?;
            let output = page.output_path();
            write_file(&public_dir.join(&output), &html)?;
            tracing::debug!("Generated: {}", output);
            report.pages.push(output);
        }

        report.broken_links = check_links(public_dir, &self.site.config.root)?;
        for link in &report.broken_links {
            tracing::warn!("Broken link in {}: {}", link.page, link.href);
        }

        tracing::info!("Generated {} pages", report.pages.len());
        Ok(report)
    }

    /// Render a single page to HTML
    pub fn render(&self, page: &Page, content: &SiteContent) -> Result<String> {
        let mut context = self.create_base_context(page);

        match page {
            Page::Home => {
                let home = &content.home;
                context.insert("home", home);
                context.insert("featured_href", &format!("/blog/{}", home.featured.slug));
                let recent: Vec<RecentView> = home
                    .recent
                    .iter()
                    .map(|p| RecentView {
                        title: p.title.clone(),
                        image: p.image.clone(),
                        category: p.category.clone(),
                        href: format!("/blog/{}", p.slug()),
                    })
                    .collect();
                context.insert("recent", &recent);
                context.insert("categories", &category_views(content));
            }
            Page::About => context.insert("about", &content.about),
            Page::Contact => context.insert("contact", &content.contact),
            Page::Categories => context.insert("categories", &category_views(content)),
            Page::Category(category) => {
                context.insert("category", category);
                context.insert("listings", &content.posts_in_category(category));
            }
            Page::Post(post) => context.insert("post", &self.render_post(post)?),
        }

        self.renderer
            .render(page.template(), &context)
            .with_context(|| format!("Failed to render {}", page.path()))
    }

    /// Resolve everything the post template shows for `post`
    pub fn render_post(&self, post: &Post) -> Result<PostView> {
        let config = &self.site.config;
        let rendered = self
            .markdown
            .render(&post.body)
            .with_context(|| format!("Failed to render body of {}", post.slug))?;

        let reading_time = post.reading_time.clone().unwrap_or_else(|| {
            helpers::reading_time(rendered.word_count, config.reading_speed_wpm)
        });

        let permalink = helpers::full_url_for(config, &Page::Post(post).path());
        let share = SHARE_NETWORKS
            .iter()
            .filter_map(|(network, label)| {
                helpers::share_url(network, &permalink, &post.title).map(|href| ShareLink {
                    label: label.to_string(),
                    href,
                })
            })
            .collect();

        let related = post
            .related
            .iter()
            .map(|r| RelatedView {
                title: r.title.clone(),
                href: format!("/blog/{}", r.slug),
            })
            .collect();

        // Posts without an excerpt describe themselves with their opening text
        let excerpt = if post.excerpt.trim().is_empty() {
            helpers::strip_html(&rendered.html)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            post.excerpt.clone()
        };

        Ok(PostView {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt,
            image: post.image.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            iso_date: helpers::date_xml(&post.date).unwrap_or_default(),
            reading_time,
            tags: post.tags.clone(),
            html: rendered.html,
            toc: helpers::toc_entries(&rendered.headings, 2, &post.toc_labels),
            related,
            comments: post.comments.clone(),
            share,
        })
    }

    /// Create base context shared by every page
    fn create_base_context(&self, page: &Page) -> Context {
        let config = &self.site.config;
        let path = page.path();

        let mut context = Context::new();
        context.insert("config", &ConfigData::from(config));
        context.insert("nav_links", &nav_links(page));
        context.insert("current_path", &path);
        context.insert("permalink", &helpers::full_url_for(config, &path));
        context.insert("generator_tag", &helpers::meta_generator());
        context.insert("page_kind", page.kind());
        context
    }

    /// Copy static files from the source dir, skipping `_` and `.` entries
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || {
                    let name = e.file_name().to_string_lossy();
                    !name.starts_with('_') && !name.starts_with('.')
                }
            })
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
        }

        Ok(())
    }
}

fn category_views(content: &SiteContent) -> Vec<CategoryView> {
    content
        .home
        .categories
        .iter()
        .map(|c| CategoryView {
            name: c.name.clone(),
            icon: c.icon.clone(),
            href: format!("/category/{}", c.slug()),
            count: content.posts_in_category(c).len(),
        })
        .collect()
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    fn generator(dir: &Path) -> Generator {
        Generator::new(&TechBlog::new(dir).unwrap()).unwrap()
    }

    fn names(links: &[MenuItem]) -> Vec<&str> {
        links.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_page_paths() {
        let content = builtin();
        let post = &content.posts[0];
        let category = &content.home.categories[0];
        assert_eq!(Page::Home.output_path(), "index.html");
        assert_eq!(Page::About.output_path(), "about-us/index.html");
        assert_eq!(Page::Contact.output_path(), "contact-us/index.html");
        assert_eq!(
            Page::Post(post).output_path(),
            "blog/future-of-ai-in-web-development/index.html"
        );
        assert_eq!(Page::Category(category).path(), "/category/technology/");
    }

    #[test]
    fn test_nav_excludes_current_page() {
        let content = builtin();
        assert_eq!(
            names(&nav_links(&Page::Home)),
            vec!["About", "Categories", "Contact"]
        );
        assert_eq!(
            names(&nav_links(&Page::About)),
            vec!["Home", "Categories", "Contact"]
        );
        assert_eq!(
            names(&nav_links(&Page::Contact)),
            vec!["Home", "About", "Categories"]
        );
        assert_eq!(
            names(&nav_links(&Page::Post(&content.posts[0]))),
            vec!["Home", "About", "Contact"]
        );
    }

    #[test]
    fn test_home_renders_literal_content() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let html = generator(dir.path()).render(&Page::Home, &content).unwrap();

        assert!(html.contains(&content.home.featured.title));
        assert!(html.contains(&content.home.featured.excerpt));
        for post in &content.home.recent {
            assert!(html.contains(&post.title), "missing {}", post.title);
            assert!(html.contains(&format!("/blog/{}", post.slug())));
        }
        for category in &content.home.categories {
            assert!(html.contains(&category.name));
            assert!(html.contains(&category.icon));
        }
        assert!(html.contains("Stay Updated"));
        assert!(html.contains(r#"<meta name="author" content="TechBlog Team">"#));
        assert!(html.contains(
            r#"title="Bringing you the latest in technology, web development, and design.""#
        ));
    }

    #[test]
    fn test_about_renders_team_and_timeline() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let html = generator(dir.path()).render(&Page::About, &content).unwrap();

        for member in &content.about.team {
            assert!(html.contains(&member.name));
            assert!(html.contains(&member.role));
        }
        for entry in &content.about.timeline {
            assert!(html.contains(&entry.year.to_string()));
            assert!(html.contains(&entry.event));
        }
        for value in &content.about.values {
            assert!(html.contains(&value.title));
        }
        assert!(html.contains("data-parallax"));
    }

    #[test]
    fn test_post_replies_nest_one_level() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let post = &content.posts[0];
        let html = generator(dir.path())
            .render(&Page::Post(post), &content)
            .unwrap();

        let with_replies = post.comments.iter().filter(|c| !c.replies.is_empty()).count();
        let reply_count: usize = post.comments.iter().map(|c| c.replies.len()).sum();
        assert_eq!(html.matches(r#"class="replies""#).count(), with_replies);
        assert_eq!(html.matches(r#"class="card reply""#).count(), reply_count);
        assert_eq!(html.matches(r#"class="card comment""#).count(), post.comments.len());

        for comment in &post.comments {
            assert!(html.contains(&comment.author));
            assert!(html.contains(&comment.content));
        }
        for related in &post.related {
            assert!(html.contains(&related.title));
            assert!(html.contains(&format!("/blog/{}", related.slug)));
        }
    }

    #[test]
    fn test_post_view_resolves_toc_and_share() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let view = generator(dir.path()).render_post(&content.posts[0]).unwrap();

        assert_eq!(view.reading_time, "8 min read");
        assert_eq!(view.iso_date, "2024-05-15");
        assert_eq!(view.toc.first().map(|t| t.href.as_str()), Some("#introduction"));
        let labels: Vec<&str> = view.toc.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Introduction",
                "AI and Personalization",
                "AI-Powered Chatbots",
                "AI in Web Design",
                "Code Example",
                "Conclusion",
            ]
        );
        assert!(view.html.contains(r#"id="conclusion""#));
        assert_eq!(view.share.len(), 3);
    }

    #[test]
    fn test_reading_time_computed_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut post = builtin().posts.remove(0);
        post.reading_time = None;
        post.body = "word ".repeat(450);
        post.excerpt = String::new();
        let view = generator(dir.path()).render_post(&post).unwrap();
        assert_eq!(view.reading_time, "3 min read");
        assert!(view.excerpt.starts_with("word word"));
    }

    #[test]
    fn test_contact_form_fields_required() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let html = generator(dir.path()).render(&Page::Contact, &content).unwrap();

        let form = html
            .split(r#"data-form="contact""#)
            .nth(1)
            .and_then(|rest| rest.split("</form>").next())
            .unwrap();
        for field in ["name", "email", "subject", "message"] {
            assert!(form.contains(&format!(r#"name="{}""#, field)));
        }
        assert_eq!(form.matches(" required>").count(), 4);
        assert!(html.contains(&content.contact.address));
        assert!(html.contains(&content.contact.email));
        assert!(html.contains(r#"data-busy-label="Sending...""#));
    }

    #[test]
    fn test_category_page_lists_matching_posts() {
        let dir = tempfile::tempdir().unwrap();
        let content = builtin();
        let technology = content.category("technology").unwrap();
        let html = generator(dir.path())
            .render(&Page::Category(technology), &content)
            .unwrap();

        assert!(html.contains(&content.home.featured.title));
        assert!(html.contains(&content.posts[0].title));
    }

    #[test]
    fn test_generate_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();
        fs::create_dir_all(site.source_dir.join("images")).unwrap();
        fs::write(site.source_dir.join("images/logo.png"), b"png").unwrap();
        fs::create_dir_all(site.source_dir.join("_data")).unwrap();
        fs::write(site.source_dir.join("_data/content.yml"), "{}\n").unwrap();

        let content = builtin();
        let report = Generator::new(&site).unwrap().generate(&content).unwrap();

        assert_eq!(report.pages.len(), 4 + content.home.categories.len() + content.posts.len());
        for page in &report.pages {
            assert!(site.public_dir.join(page).is_file(), "missing {}", page);
        }
        assert!(site.public_dir.join("css/techblog.css").is_file());
        assert!(site.public_dir.join("placeholder.svg").is_file());
        assert!(site.public_dir.join("images/logo.png").is_file());
        assert!(!site.public_dir.join("_data").exists());

        // Freshly generated pages already carry their content
        let about = fs::read_to_string(site.public_dir.join("about-us/index.html")).unwrap();
        assert!(about.contains("Meet Our Team"));

        // The featured hero points at a post that is never generated
        assert!(report
            .broken_links
            .iter()
            .any(|l| l.href == "/blog/featured-post"));
        assert!(!report.broken_links.iter().any(|l| l.href.starts_with("/about-us")));
    }
}
