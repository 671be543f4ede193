//! Built-in TechBlog templates using the Tera template engine
//!
//! Page templates, partials and static assets are embedded directly in the
//! binary, so a site needs no theme directory.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{SiteConfig, SocialConfig};
use crate::content::{Author, Comment};
use crate::helpers::{self, ImageOptions, TocEntry};

/// Static files written next to the generated pages
pub const ASSETS: &[(&str, &str)] = &[
    ("css/techblog.css", include_str!("techblog/assets/techblog.css")),
    ("js/techblog.js", include_str!("techblog/assets/techblog.js")),
    ("placeholder.svg", include_str!("techblog/assets/placeholder.svg")),
];

/// Template renderer with the embedded TechBlog pages
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded and helpers bound to
    /// `config`
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Content is trusted literal text and includes pre-rendered HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("techblog/layout.html")),
            ("home.html", include_str!("techblog/home.html")),
            ("about.html", include_str!("techblog/about.html")),
            ("post.html", include_str!("techblog/post.html")),
            ("contact.html", include_str!("techblog/contact.html")),
            ("categories.html", include_str!("techblog/categories.html")),
            ("category.html", include_str!("techblog/category.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("techblog/partials/header.html"),
            ),
            (
                "partials/footer_simple.html",
                include_str!("techblog/partials/footer_simple.html"),
            ),
            (
                "partials/footer_full.html",
                include_str!("techblog/partials/footer_full.html"),
            ),
            (
                "partials/social.html",
                include_str!("techblog/partials/social.html"),
            ),
            ("partials/ui.html", include_str!("techblog/partials/ui.html")),
        ])?;

        let url_config = config.clone();
        tera.register_filter(
            "url",
            move |value: &tera::Value,
                  _args: &HashMap<String, tera::Value>|
                  -> tera::Result<tera::Value> {
                let path = tera::try_get_value!("url", "value", String, value);
                Ok(tera::Value::String(helpers::url_for(&url_config, &path)))
            },
        );
        tera.register_filter("initials", initials_filter);
        tera.register_filter("iso_date", iso_date_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        let image_config = config.clone();
        tera.register_function(
            "image",
            move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                image_function(&image_config, args)
            },
        );

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: avatar fallback initials
fn initials_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("initials", "value", String, value);
    Ok(tera::Value::String(helpers::initials(&name)))
}

/// Tera filter: "May 15, 2024" -> "2024-05-15", empty when unparseable
fn iso_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let date = tera::try_get_value!("iso_date", "value", String, value);
    Ok(tera::Value::String(
        helpers::date_xml(&date).unwrap_or_default(),
    ))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Tera function: `image(src, alt, class?, width?, height?, priority?)`
fn image_function(
    config: &SiteConfig,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let src = match args.get("src").and_then(|v| v.as_str()) {
        Some(src) => src,
        None => return Err(tera::Error::msg("image() requires a `src` string")),
    };
    let alt = args.get("alt").and_then(|v| v.as_str()).unwrap_or("");
    let options = ImageOptions {
        width: args
            .get("width")
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok()),
        height: args
            .get("height")
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok()),
        class: args.get("class").and_then(|v| v.as_str()),
        priority: args
            .get("priority")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    };
    Ok(tera::Value::String(helpers::image_tag(
        config, src, alt, &options,
    )))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
    pub copyright_year: i32,
    pub social: SocialConfig,
}

impl From<&SiteConfig> for ConfigData {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            copyright_year: config.copyright_year,
            social: config.social.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

/// A recent post card on the home page
#[derive(Debug, Clone, Serialize)]
pub struct RecentView {
    pub title: String,
    pub image: String,
    pub category: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub icon: String,
    pub href: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedView {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLink {
    pub label: String,
    pub href: String,
}

/// A post with its body rendered and display fields resolved
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: Author,
    pub date: String,
    pub iso_date: String,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub related: Vec<RelatedView>,
    pub comments: Vec<Comment>,
    pub share: Vec<ShareLink>,
}
