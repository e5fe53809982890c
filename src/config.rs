//! Retrieval configuration and source-link templating.

/// Configuration shared across one retrieval run. Read-only once built, so it
/// can be shared freely across parallel per-module extraction tasks.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Root directory the provider resolves source paths against.
    pub source_root: Option<String>,
    /// URL template with `%{path}` and `%{line}` placeholders.
    /// `None` disables source links entirely.
    pub source_url_pattern: Option<String>,
}

impl Config {
    pub fn with_source_url(root: &str, pattern: &str) -> Self {
        Self {
            source_root: Some(root.to_string()),
            source_url_pattern: Some(pattern.to_string()),
        }
    }
}

/// A module's pre-resolved source path bound to the configured URL pattern.
/// Built once per module and reused for every record inside it.
#[derive(Debug, Clone)]
pub struct SourceLink {
    path: String,
    pattern: Option<String>,
}

impl SourceLink {
    pub fn new(config: &Config, path: String) -> Self {
        Self {
            path,
            pattern: config.source_url_pattern.clone(),
        }
    }

    /// Render the link for a declaration line. Two independent textual
    /// substitutions; no pattern or no line means no link.
    pub fn url(&self, line: Option<u32>) -> Option<String> {
        let pattern = self.pattern.as_deref()?;
        let line = line?;
        Some(
            pattern
                .replace("%{path}", &self.path)
                .replace("%{line}", &line.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_substitutes_path_and_line() {
        let config = Config::with_source_url("/src", "https://example.com/%{path}#L%{line}");
        let link = SourceLink::new(&config, "lib/foo.ex".to_string());
        assert_eq!(
            link.url(Some(42)),
            Some("https://example.com/lib/foo.ex#L42".to_string())
        );
    }

    #[test]
    fn test_no_pattern_disables_links() {
        let link = SourceLink::new(&Config::default(), "lib/foo.ex".to_string());
        assert_eq!(link.url(Some(42)), None);
    }

    #[test]
    fn test_no_line_means_no_link() {
        let config = Config::with_source_url("", "https://example.com/%{path}#L%{line}");
        let link = SourceLink::new(&config, "lib/foo.ex".to_string());
        assert_eq!(link.url(None), None);
    }
}
