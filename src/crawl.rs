use crate::{Corpus, Result};
use regex::Regex;
use std::{collections::HashSet, fs, path::Path, sync::LazyLock};
use tracing::debug;
use walkdir::WalkDir;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid link pattern")
});

/// Builds a corpus from the `.html` files directly inside `dir`.
///
/// Pages are keyed by file name. Only `href` targets naming another page of
/// the directory are kept as links.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links: HashSet<String> = LINK_PATTERN
            .captures_iter(&contents)
            .map(|c| c[1].to_string())
            .collect();
        debug!(page = %name, links = links.len(), "crawled page");
        pages.push((name, links));
    }
    Ok(Corpus::from_links(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn extracts_links_between_pages() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "1.html",
            r#"<html><body><a href="2.html">two</a> <a class="x" href="missing.html">?</a></body></html>"#,
        );
        write(
            &dir,
            "2.html",
            r#"<a href="1.html">one</a><a href="2.html">me</a><a href="3.html">three</a>"#,
        );
        write(&dir, "3.html", "<p>no links</p>");
        write(&dir, "notes.txt", r#"<a href="1.html">ignored</a>"#);

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.page_count(), 3);
        assert!(corpus.vertex("notes.txt").is_none());
        let name = |n: &str| corpus.vertex(n).unwrap();
        let links = |n: &str| {
            let mut xs: Vec<_> = corpus
                .links(&name(n))
                .map(|v| corpus.name(&v).unwrap().to_string())
                .collect();
            xs.sort();
            xs
        };
        assert_eq!(links("1.html"), vec!["2.html"]);
        assert_eq!(links("2.html"), vec!["1.html", "3.html"]);
        assert!(corpus.is_dangling(&name("3.html")));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_pages() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        write(&dir, "1.html", r#"<a href="2.html">2</a>"#);
        write(&elsewhere, "2.html", r#"<a href="1.html">1</a>"#);
        std::os::unix::fs::symlink(elsewhere.path().join("2.html"), dir.path().join("2.html"))
            .unwrap();

        let corpus = crawl(dir.path()).unwrap();
        assert_eq!(corpus.page_count(), 2);
        let two = corpus.vertex("2.html").unwrap();
        let one = corpus.vertex("1.html").unwrap();
        assert_eq!(corpus.links(&two).collect::<Vec<_>>(), vec![one]);
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = crawl(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, crate::Error::Walk(_)), "{err:?}");
    }

    #[test]
    fn empty_directory() {
        let dir = TempDir::new().unwrap();
        let corpus = crawl(dir.path()).unwrap();
        assert!(corpus.is_empty());
    }
}
