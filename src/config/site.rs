//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub copyright_year: i32,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Writing
    pub reading_speed_wpm: usize,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Links
    #[serde(default)]
    pub social: SocialConfig,

    // Forms
    #[serde(default)]
    pub contact: ContactConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TechBlog".to_string(),
            tagline: "Bringing you the latest in technology, web development, and design."
                .to_string(),
            description: "Bringing you the latest in technology, web development, and design. \
                Our mission is to educate and inspire the next generation of tech innovators."
                .to_string(),
            author: "TechBlog Team".to_string(),
            language: "en".to_string(),
            copyright_year: 2024,

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            reading_speed_wpm: 200,
            highlight: HighlightConfig::default(),

            social: SocialConfig::default(),
            contact: ContactConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Social profile links shown in footers and on the contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook: "#".to_string(),
            twitter: "#".to_string(),
            instagram: "#".to_string(),
        }
    }
}

/// Which collaborator receives form submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Wait `delay_ms`, then report success without sending anything
    Simulated,
    /// Append each submission as a JSON line to `outbox_path`
    Outbox,
}

/// Form submission configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub transport: TransportKind,
    pub delay_ms: u64,
    pub outbox_path: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Simulated,
            delay_ms: 2000,
            outbox_path: ".techblog-outbox/submissions.jsonl".to_string(),
        }
    }
}
