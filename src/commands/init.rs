//! Initialize a new TechBlog site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{builtin, loader::CONTENT_FILE};
use crate::TechBlog;

const DEFAULT_CONFIG: &str = r#"# TechBlog Configuration

# Site
title: TechBlog
tagline: Bringing you the latest in technology, web development, and design.
description: >-
  Bringing you the latest in technology, web development, and design.
  Our mission is to educate and inspire the next generation of tech innovators.
author: TechBlog Team
language: en
copyright_year: 2024

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public

# Writing
reading_speed_wpm: 200
highlight:
  theme: base16-ocean.dark
  line_number: false

# Social links
social:
  facebook: '#'
  twitter: '#'
  instagram: '#'

# Forms
# transport: simulated waits delay_ms and always succeeds,
# outbox appends every submission to outbox_path as a JSON line
contact:
  transport: simulated
  delay_ms: 2000
  outbox_path: .techblog-outbox/submissions.jsonl
"#;

/// Initialize a new site in the given directory. Existing files are kept.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("source/_data"))?;
    fs::create_dir_all(target_dir.join("source/images"))?;

    write_if_missing(&target_dir.join("_config.yml"), DEFAULT_CONFIG)?;

    // Editable copy of the built-in content
    let content = serde_yaml::to_string(&builtin())?;
    write_if_missing(&target_dir.join("source").join(CONTENT_FILE), &content)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Skipping existing file: {:?}", path);
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    tracing::debug!("Created: {:?}", path);
    Ok(())
}

/// Run the init command with an existing TechBlog instance
pub fn run(site: &TechBlog) -> Result<()> {
    init_site(&site.base_dir)
}
