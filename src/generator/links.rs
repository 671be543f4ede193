//! Internal link report for generated HTML

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::helpers::is_external;

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"(?:href|src)="([^"]*)""#).unwrap();
}

/// An internal link that resolves to no generated file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrokenLink {
    /// Page containing the link, relative to the public dir
    pub page: String,
    pub href: String,
}

/// Scan every HTML file under `public_dir` for internal links that do not
/// resolve. `root` is the site root prefix stripped before resolving.
pub fn check_links(public_dir: &Path, root: &str) -> Result<Vec<BrokenLink>> {
    let mut broken = BTreeSet::new();

    for entry in WalkDir::new(public_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
    {
        let html = fs::read_to_string(entry.path())?;
        let page = entry
            .path()
            .strip_prefix(public_dir)?
            .to_string_lossy()
            .replace('\\', "/");

        for cap in HREF_RE.captures_iter(&html) {
            let href = &cap[1];
            if let Some(target) = internal_target(href, root) {
                if !resolves(public_dir, &target) {
                    broken.insert(BrokenLink {
                        page: page.clone(),
                        href: href.to_string(),
                    });
                }
            }
        }
    }

    Ok(broken.into_iter().collect())
}

/// Path of an internal link relative to the public dir, or `None` for links
/// that are not checked
fn internal_target(href: &str, root: &str) -> Option<String> {
    if href.is_empty() || href.starts_with('#') || is_external(href) {
        return None;
    }

    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let root = root.trim_end_matches('/');
    let path = match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };
    Some(path.trim_start_matches('/').to_string())
}

fn resolves(public_dir: &Path, target: &str) -> bool {
    let candidate = public_dir.join(target);
    if target.is_empty() || candidate.is_dir() {
        return candidate.join("index.html").is_file();
    }
    candidate.is_file() || public_dir.join(format!("{}.html", target)).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, path: &str, content: &str) {
        let path = dir.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_internal_target() {
        assert_eq!(internal_target("/about-us/", "/"), Some("about-us/".to_string()));
        assert_eq!(
            internal_target("/placeholder.svg?height=50&width=50", "/"),
            Some("placeholder.svg".to_string())
        );
        assert_eq!(
            internal_target("/blog/about-us/", "/blog/"),
            Some("about-us/".to_string())
        );
        assert_eq!(internal_target("/blog", "/blog/"), Some(String::new()));
        assert_eq!(
            internal_target("/blogroll/", "/blog/"),
            Some("blogroll/".to_string())
        );
        assert_eq!(internal_target("#comments", "/"), None);
        assert_eq!(internal_target("mailto:info@techblog.com", "/"), None);
        assert_eq!(internal_target("https://example.com/", "/"), None);
    }

    #[test]
    fn test_reports_only_unresolved_links() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "placeholder.svg", "<svg/>");
        write(dir.path(), "about-us/index.html", "<p>About</p>");
        write(
            dir.path(),
            "index.html",
            r##"<a href="/">Home</a>
<a href="/about-us/">About</a>
<a href="/about-us">About</a>
<img src="/placeholder.svg?height=50&width=50">
<a href="#top">Top</a>
<a href="/blog/missing">Missing</a>
<a href="/blog/missing">Missing again</a>"##,
        );

        let broken = check_links(dir.path(), "/").unwrap();
        assert_eq!(
            broken,
            vec![BrokenLink {
                page: "index.html".to_string(),
                href: "/blog/missing".to_string(),
            }]
        );
    }
}
