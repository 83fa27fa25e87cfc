use std::fmt;

use log::info;

use crate::cli::commands::selected_collections;
use crate::collections::date::today;
use crate::collections::parse_entry;
use crate::config::Config;
use crate::utils::error::{BoxResult, RecipebookError};
use crate::utils::{fs, path};

/// One problem found in a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub collection: String,
    pub slug: String,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.collection, self.slug, self.message)
    }
}

/// Problems with one file's text
pub fn verify_source(slug: &str, raw: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if !path::is_url_safe(slug) {
        problems.push(format!("slug is not URL-safe (expected '{}')", slug::slugify(slug)));
    }

    let loaded = parse_entry(slug, raw, today());
    problems.extend(loaded.issues.iter().map(|issue| issue.to_string()));
    problems
}

/// Verify every file of a collection. `prepare` maps each file's text before
/// it is checked, so a pending repair can be verified without writing it.
pub fn verify_collection<F>(config: &Config, collection: &str, prepare: F) -> Vec<Finding>
where
    F: Fn(String) -> String,
{
    let dir = config.collection_dir(collection);
    let finding = |slug: &str, message: String| Finding {
        collection: collection.to_string(),
        slug: slug.to_string(),
        message,
    };

    let mut findings: Vec<Finding> = dir
        .duplicate_slugs()
        .iter()
        .map(|slug| finding(slug.as_str(), "more than one file derives this slug".to_string()))
        .collect();

    for slug in dir.list_slugs() {
        let file = match dir.resolve(&slug) {
            Some(file) => file,
            None => {
                findings.push(finding(slug.as_str(), "file cannot be looked up by this slug".to_string()));
                continue;
            }
        };

        match fs::read_file(&file) {
            Ok(raw) => {
                let text = prepare(raw);
                for problem in verify_source(&slug, &text) {
                    findings.push(finding(slug.as_str(), problem));
                }
            }
            Err(e) => findings.push(finding(slug.as_str(), format!("unreadable: {}", e))),
        }
    }

    findings
}

/// Print findings; an error when there are any
pub fn report_findings(findings: &[Finding]) -> BoxResult<()> {
    if findings.is_empty() {
        info!("No issues found");
        return Ok(());
    }

    for finding in findings {
        println!("{}", finding);
    }

    Err(RecipebookError::Content(format!("{} issue(s) found", findings.len())).into())
}

/// Handle the check command
pub fn handle_check_command(config: &Config, collection: Option<&str>) -> BoxResult<()> {
    let findings: Vec<Finding> = selected_collections(config, collection)?
        .into_iter()
        .flat_map(|name| verify_collection(config, name, |raw| raw))
        .collect();

    report_findings(&findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn site(files: &[(&str, &str)]) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let recipes = dir.path().join("content").join("recipes");
        stdfs::create_dir_all(&recipes).unwrap();
        for (name, text) in files {
            stdfs::write(recipes.join(name), text).unwrap();
        }

        let config = Config { source: dir.path().to_path_buf(), ..Config::default() };
        (dir, config)
    }

    #[test]
    fn test_clean_collection_passes() {
        let (_dir, config) = site(&[("sum.md", "---\ntitle: SUM\ndate: 2024-01-01\n---\nBody")]);

        assert!(verify_collection(&config, "recipes", |raw| raw).is_empty());
        assert!(handle_check_command(&config, Some("recipes")).is_ok());
    }

    #[test]
    fn test_reports_each_problem() {
        let (_dir, config) = site(&[
            ("no-title.md", "---\ndate: 2024-01-01\n---\nBody"),
            ("Bad Slug.md", "---\ntitle: Fine\n---\n"),
            ("broken.md", "---\ntitle: A: B\n---\n"),
            ("twice.md", "---\ntitle: One\n---\n"),
            ("twice.mdx", "---\ntitle: Two\n---\n"),
        ]);

        let findings = verify_collection(&config, "recipes", |raw| raw);
        let slugs: Vec<&str> = findings.iter().map(|f| f.slug.as_str()).collect();

        assert_eq!(findings.len(), 4);
        assert_eq!(slugs[0], "twice");
        assert!(slugs.contains(&"no-title"));
        assert!(slugs.contains(&"Bad Slug"));
        assert!(slugs.contains(&"broken"));
        assert!(handle_check_command(&config, None).is_err());
    }

    #[test]
    fn test_prepare_is_applied_before_checking() {
        let (_dir, config) = site(&[("a.md", "---\ndate: 2024-01-01\n---\n")]);

        let findings = verify_collection(&config, "recipes", |raw| raw.replace("date:", "title: A\ndate:"));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_verify_source() {
        assert!(verify_source("ok", "---\ntitle: Ok\n---\n").is_empty());
        assert_eq!(verify_source("ok", "---\ntitle: Ok\ndate: someday\n---\n").len(), 1);
    }
}
