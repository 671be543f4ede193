//! Content loader - built-in records, optionally replaced section by section
//! from `<source_dir>/_data/content.yml`

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::{AboutContent, ContactInfo, HomeContent, Post, SiteContent};
use crate::TechBlog;

/// Relative location of the content override inside the source directory
pub const CONTENT_FILE: &str = "_data/content.yml";

/// Sections present in the override file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentOverride {
    home: Option<HomeContent>,
    about: Option<AboutContent>,
    posts: Option<Vec<Post>>,
    contact: Option<ContactInfo>,
}

/// Loads site content for a TechBlog instance
pub struct ContentLoader<'a> {
    site: &'a TechBlog,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a TechBlog) -> Self {
        Self { site }
    }

    pub fn content_path(&self) -> PathBuf {
        self.site.source_dir.join(CONTENT_FILE)
    }

    /// Load content, falling back to the built-in records for any section
    /// the override file leaves out
    pub fn load(&self) -> Result<SiteContent> {
        let path = self.content_path();
        if !path.exists() {
            tracing::debug!("No content override at {:?}, using built-in content", path);
            return Ok(super::builtin());
        }

        let content = load_override(&path, super::builtin())?;
        tracing::info!("Loaded content override from {:?}", path);
        Ok(content)
    }
}

fn load_override(path: &Path, base: SiteContent) -> Result<SiteContent> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let overrides: ContentOverride = if raw.trim().is_empty() {
        ContentOverride::default()
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {:?}", path))?
    };
    Ok(merge(base, overrides))
}

fn merge(base: SiteContent, overrides: ContentOverride) -> SiteContent {
    SiteContent {
        home: overrides.home.unwrap_or(base.home),
        about: overrides.about.unwrap_or(base.about),
        posts: overrides.posts.unwrap_or(base.posts),
        contact: overrides.contact.unwrap_or(base.contact),
    }
}
