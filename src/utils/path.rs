use std::path::Path;

/// Get file extension as a string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_string())
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}

/// Check if a path has one of the given extensions
pub fn has_any_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    get_extension(path).map_or(false, |e| extensions.iter().any(|ext| *ext == e))
}

/// Whether a slug survives slugification unchanged, i.e. is safe as a URL segment
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty() && slug::slugify(slug) == slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_and_extension() {
        assert_eq!(get_stem("content/recipes/vlookup.mdx"), Some("vlookup".to_string()));
        assert_eq!(get_extension("content/recipes/vlookup.mdx"), Some("mdx".to_string()));
        assert_eq!(get_extension("README"), None);
    }

    #[test]
    fn test_has_any_extension() {
        let exts = vec!["mdx".to_string(), "md".to_string()];
        assert!(has_any_extension("a.md", &exts));
        assert!(has_any_extension("a.mdx", &exts));
        assert!(!has_any_extension("a.markdown", &exts));
        assert!(!has_any_extension("a", &exts));
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("xlookup-basics"));
        assert!(is_url_safe("sumifs-2024"));
        assert!(!is_url_safe("Sum Ifs"));
        assert!(!is_url_safe("index_match"));
        assert!(!is_url_safe(""));
    }
}
