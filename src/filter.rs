//! Include/exclude filtering for paths
//!
//! A `FilterConfig` holds six compiled pattern lists (include/exclude for
//! directories, files, and extensions) plus the binary-inclusion flag. Two
//! configs exist per run: one deciding tree visibility, one deciding which
//! file bodies are printed. Pattern matching is an unanchored regex search,
//! not a glob and not a full match.

use std::path::Path;

use regex::Regex;

use crate::classify::is_binary_file;
use crate::error::{GroveError, Result};

/// Raw pattern lists as collected from the command line, before compilation.
///
/// For each include/exclude pair at most one side may be non-empty; this is
/// validated per scope before any traversal starts.
#[derive(Debug, Default, Clone)]
pub struct FilterPatterns {
    pub include_dirs: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub include_files: Vec<String>,
    pub exclude_files: Vec<String>,
    pub include_extensions: Vec<String>,
    pub exclude_extensions: Vec<String>,
}

impl FilterPatterns {
    /// Validate the include/exclude exclusivity invariant for this scope.
    /// `scope` is used in error messages, e.g. "tree" or "content".
    pub fn validate(&self, scope: &str) -> Result<()> {
        let pairs = [
            (&self.include_dirs, &self.exclude_dirs, "directories"),
            (&self.include_files, &self.exclude_files, "files"),
            (
                &self.include_extensions,
                &self.exclude_extensions,
                "extensions",
            ),
        ];
        for (include, exclude, name) in pairs {
            if !include.is_empty() && !exclude.is_empty() {
                return Err(GroveError::ConflictingFilters {
                    category: format!("{scope} {name}"),
                });
            }
        }
        Ok(())
    }

    /// Concatenate another pattern set onto this one, list by list.
    /// Used to derive the content patterns from the tree patterns plus the
    /// content-specific additions. No deduplication.
    pub fn merged_with(&self, extra: &FilterPatterns) -> FilterPatterns {
        fn concat(a: &[String], b: &[String]) -> Vec<String> {
            a.iter().chain(b.iter()).cloned().collect()
        }
        FilterPatterns {
            include_dirs: concat(&self.include_dirs, &extra.include_dirs),
            exclude_dirs: concat(&self.exclude_dirs, &extra.exclude_dirs),
            include_files: concat(&self.include_files, &extra.include_files),
            exclude_files: concat(&self.exclude_files, &extra.exclude_files),
            include_extensions: concat(&self.include_extensions, &extra.include_extensions),
            exclude_extensions: concat(&self.exclude_extensions, &extra.exclude_extensions),
        }
    }
}

/// Compiled filter configuration, immutable for the run.
#[derive(Debug)]
pub struct FilterConfig {
    include_dirs: Vec<Regex>,
    exclude_dirs: Vec<Regex>,
    include_files: Vec<Regex>,
    exclude_files: Vec<Regex>,
    include_extensions: Vec<String>,
    exclude_extensions: Vec<String>,
    include_binary: bool,
}

impl FilterConfig {
    /// Compile a pattern set. Extension lists stay as literal strings;
    /// everything else becomes a regex.
    pub fn compile(patterns: &FilterPatterns, include_binary: bool) -> Result<Self> {
        Ok(Self {
            include_dirs: compile_list(&patterns.include_dirs)?,
            exclude_dirs: compile_list(&patterns.exclude_dirs)?,
            include_files: compile_list(&patterns.include_files)?,
            exclude_files: compile_list(&patterns.exclude_files)?,
            include_extensions: patterns.include_extensions.clone(),
            exclude_extensions: patterns.exclude_extensions.clone(),
            include_binary,
        })
    }

    pub fn include_binary(&self) -> bool {
        self.include_binary
    }

    /// Decide whether a path passes this filter.
    ///
    /// `rel` is the path relative to the analysis root; it is the string the
    /// patterns are searched against. First applicable rule wins:
    ///
    /// - directories: include-dirs (any match passes), else exclude-dirs
    ///   (any match fails), else pass;
    /// - files: binary files fail outright unless binary inclusion is on,
    ///   then include-files / exclude-files (matched against the relative
    ///   path or the bare file name), then include-/exclude-extensions
    ///   (exact membership, no leading dot), else pass.
    pub fn passes(&self, path: &Path, rel: &Path, is_dir: bool) -> bool {
        let rel_str = rel.to_string_lossy();

        if is_dir {
            if !self.include_dirs.is_empty() {
                return self.include_dirs.iter().any(|re| re.is_match(&rel_str));
            }
            if !self.exclude_dirs.is_empty() {
                return !self.exclude_dirs.iter().any(|re| re.is_match(&rel_str));
            }
            return true;
        }

        if !self.include_binary && is_binary_file(path) {
            return false;
        }

        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        if !self.include_files.is_empty() {
            return self
                .include_files
                .iter()
                .any(|re| re.is_match(&rel_str) || re.is_match(&name));
        }
        if !self.exclude_files.is_empty() {
            return !self
                .exclude_files
                .iter()
                .any(|re| re.is_match(&rel_str) || re.is_match(&name));
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !self.include_extensions.is_empty() {
            return self.include_extensions.contains(&ext);
        }
        if !self.exclude_extensions.is_empty() {
            return !self.exclude_extensions.contains(&ext);
        }

        true
    }
}

fn compile_list(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|source| GroveError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}
