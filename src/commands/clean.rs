//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::TechBlog;

/// Clean the public directory and build cache
pub fn run(site: &TechBlog) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    super::generate::clear_cache(site)?;

    Ok(())
}
