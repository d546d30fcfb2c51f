//! File filtering with glob pattern support.
//!
//! Only `.java` files are ever counted. Include/exclude glob patterns
//! narrow that set further.

use std::path::Path;

use glob::Pattern;

use crate::error::JavalocError;
use crate::Result;

/// Extension of the source files this crate counts.
pub const SOURCE_EXTENSION: &str = "java";

/// Whether `path` carries the source extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all .java files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all .java files).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// Check if a file path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It's a .java file
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        if !is_source_file(path) {
            return false;
        }

        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| JavalocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_java_files() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("src/Main.java")));
        assert!(filter.matches(Path::new("Main.java")));
        assert!(!filter.matches(Path::new("README.md")));
        assert!(!filter.matches(Path::new("pom.xml")));
        assert!(!filter.matches(Path::new("Main.javax")));
        assert!(!filter.matches(Path::new("java")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("**/util/*.java").unwrap();

        assert!(filter.matches(Path::new("src/util/Strings.java")));
        assert!(!filter.matches(Path::new("src/Main.java")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/test/**").unwrap();

        assert!(filter.matches(Path::new("src/main/App.java")));
        assert!(!filter.matches(Path::new("src/test/AppTest.java")));
    }

    #[test]
    fn test_filter_with_multiple_patterns() {
        let filter = FilterConfig::new()
            .include_many(&["**/main/**", "**/test/**"])
            .unwrap()
            .exclude_many(&["**/generated/**"])
            .unwrap();

        assert!(filter.matches(Path::new("p/src/main/App.java")));
        assert!(filter.matches(Path::new("p/src/test/AppTest.java")));
        assert!(!filter.matches(Path::new("p/src/main/generated/Stub.java")));
        assert!(!filter.matches(Path::new("p/tools/Gen.java")));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        if let Err(JavalocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
