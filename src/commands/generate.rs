//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::fs;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::cache::{self, BuildCache};
use crate::content::loader::ContentLoader;
use crate::generator::{GenerateReport, Generator};
use crate::server::is_relevant_change;
use crate::TechBlog;

/// Generate the static site, skipping work when nothing changed
pub fn run(site: &TechBlog) -> Result<()> {
    run_with_options(site, false)?;
    Ok(())
}

/// Generate with force option. Returns `None` when the cache was fresh.
pub fn run_with_options(site: &TechBlog, force: bool) -> Result<Option<GenerateReport>> {
    let start = std::time::Instant::now();

    let fingerprint = cache::fingerprint(site)?;
    let cache = BuildCache::load(&site.base_dir);
    if !force && cache.is_fresh(fingerprint, &site.public_dir) {
        tracing::info!("No changes detected, skipping generation");
        return Ok(None);
    }

    let content = ContentLoader::new(site).load()?;
    tracing::info!(
        "Loaded {} posts and {} categories",
        content.posts.len(),
        content.home.categories.len()
    );

    let report = Generator::new(site)?.generate(&content)?;
    if !report.broken_links.is_empty() {
        tracing::warn!("{} broken internal links", report.broken_links.len());
    }

    BuildCache::new(fingerprint, report.pages.clone()).save(&site.base_dir)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(Some(report))
}

/// Watch for file changes and regenerate
pub fn watch(site: &TechBlog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if site.source_dir.exists() {
        watcher.watch(&site.source_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => {
                let event: notify::Event = event;
                if !event.paths.iter().any(|p| is_relevant_change(p)) {
                    continue;
                }
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(site) {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Clear the build cache
pub fn clear_cache(site: &TechBlog) -> Result<()> {
    let cache_dir = site.base_dir.join(cache::CACHE_DIR);
    if cache_dir.exists() {
        fs::remove_dir_all(&cache_dir)?;
        tracing::info!("Cache cleared");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_run_uses_cache() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();

        let first = run_with_options(&site, false).unwrap();
        assert!(first.is_some());
        assert!(site.public_dir.join("index.html").is_file());

        assert!(run_with_options(&site, false).unwrap().is_none());
        assert!(run_with_options(&site, true).unwrap().is_some());
    }

    #[test]
    fn test_content_change_triggers_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();
        run(&site).unwrap();

        let data_dir = site.source_dir.join("_data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join("content.yml"),
            "contact:\n  address: 1 Rust Lane\n  phone: \"+1 555 0100\"\n  email: hi@example.com\n  map_image: /placeholder.svg\n",
        )
        .unwrap();

        assert!(run_with_options(&site, false).unwrap().is_some());
        let html = fs::read_to_string(site.public_dir.join("contact-us/index.html")).unwrap();
        assert!(html.contains("1 Rust Lane"));
    }

    #[test]
    fn test_removed_output_triggers_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();
        run(&site).unwrap();

        fs::remove_file(site.public_dir.join("about-us/index.html")).unwrap();
        assert!(run_with_options(&site, false).unwrap().is_some());
        assert!(site.public_dir.join("about-us/index.html").is_file());
    }

    #[test]
    fn test_clear_cache() {
        let dir = tempfile::tempdir().unwrap();
        let site = TechBlog::new(dir.path()).unwrap();
        run(&site).unwrap();
        assert!(dir.path().join(cache::CACHE_DIR).exists());

        clear_cache(&site).unwrap();
        assert!(!dir.path().join(cache::CACHE_DIR).exists());
    }
}
