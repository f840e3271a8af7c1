//! Content emission
//!
//! `ContentEmitter` prints the bodies of files that pass the content filter.
//! It walks the directory flat and independently of the tree pass: a file
//! whose parent directory was pruned from the tree view still has its
//! content printed here, because directory patterns never apply to the
//! content pass.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::classify::is_file_empty;
use crate::error::Result;
use crate::filter::FilterConfig;
use crate::ignore_rules::IgnoreSpec;
use crate::tree::read_dir_sorted;

pub struct ContentEmitter<'a> {
    root: &'a Path,
    ignore: Option<&'a IgnoreSpec>,
    content_filter: &'a FilterConfig,
}

impl<'a> ContentEmitter<'a> {
    pub fn new(
        root: &'a Path,
        ignore: Option<&'a IgnoreSpec>,
        content_filter: &'a FilterConfig,
    ) -> Self {
        Self {
            root,
            ignore,
            content_filter,
        }
    }

    /// Print a delimited block for every emitted file, in sorted walk order.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        self.emit_dir(self.root, out)
    }

    fn emit_dir<W: Write>(&self, dir: &Path, out: &mut W) -> Result<()> {
        let entries = match read_dir_sorted(dir) {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping unreadable directory {}: {}", dir.display(), err);
                return Ok(());
            }
        };

        for path in entries {
            let Ok(rel) = path.strip_prefix(self.root) else {
                continue;
            };
            let is_dir = path.is_dir();

            if is_dir {
                if let Some(spec) = self.ignore {
                    if spec.is_ignored(rel, true) {
                        continue;
                    }
                }
                if path.is_symlink() {
                    continue;
                }
                self.emit_dir(&path, out)?;
                continue;
            }

            if let Some(spec) = self.ignore {
                if spec.is_ignored(rel, false) {
                    continue;
                }
            }
            if !self.content_filter.passes(&path, rel, false) {
                continue;
            }
            if is_file_empty(&path) {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(c) => c,
                Err(err) => {
                    log::warn!("skipping unreadable file {}: {}", path.display(), err);
                    continue;
                }
            };
            write!(
                out,
                "\n### {path}\n{content}\n### end of {path}\n",
                path = path.display(),
                content = content
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::FilterPatterns;
    use crate::test_utils::TestDir;

    use super::*;

    fn config(patterns: FilterPatterns) -> FilterConfig {
        FilterConfig::compile(&patterns, false).unwrap()
    }

    fn emit(dir: &TestDir, ignore: Option<&IgnoreSpec>, filter: &FilterConfig) -> String {
        let mut buf = Vec::new();
        ContentEmitter::new(dir.path(), ignore, filter)
            .emit(&mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn blocks_are_delimited_with_absolute_paths() {
        let dir = TestDir::new();
        let file = dir.add_file("a.py", "print('hello')\n");

        let output = emit(&dir, None, &config(FilterPatterns::default()));
        assert_eq!(
            output,
            format!(
                "\n### {p}\nprint('hello')\n\n### end of {p}\n",
                p = file.display()
            )
        );
    }

    #[test]
    fn empty_and_binary_files_are_skipped() {
        let dir = TestDir::new();
        dir.add_file("empty.txt", "");
        dir.add_file("blank.txt", "   \n\t\n");
        dir.add_binary("blob.bin", b"\x00\x01\x02");
        dir.add_file("real.txt", "data");

        let output = emit(&dir, None, &config(FilterPatterns::default()));
        assert!(!output.contains("empty.txt"));
        assert!(!output.contains("blank.txt"));
        assert!(!output.contains("blob.bin"));
        assert!(output.contains("real.txt"));
    }

    #[test]
    fn nonempty_binary_file_is_emitted_when_binary_is_included() {
        let dir = TestDir::new();
        // NUL bytes classify as binary but still decode as UTF-8.
        let blob = dir.add_binary("blob.bin", b"\x00\x01\x02\x03");
        dir.add_binary("zero.bin", b"");

        let filter = FilterConfig::compile(&FilterPatterns::default(), true).unwrap();
        let mut buf = Vec::new();
        ContentEmitter::new(dir.path(), None, &filter)
            .emit(&mut buf)
            .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains(&format!("### {}", blob.display())));
        assert!(!output.contains("zero.bin"), "empty files stay skipped");
    }

    #[test]
    fn directory_patterns_do_not_constrain_content() {
        let dir = TestDir::new();
        dir.add_file("src/lib.py", "code");
        dir.add_file("docs/guide.md", "prose");

        let mut p = FilterPatterns::default();
        p.include_dirs = vec!["src".to_string()];
        let output = emit(&dir, None, &config(p));

        // Both bodies print: dir rules only prune the tree view.
        assert!(output.contains("code"));
        assert!(output.contains("prose"));
    }

    #[test]
    fn file_and_extension_rules_do_constrain_content() {
        let dir = TestDir::new();
        dir.add_file("a.py", "python");
        dir.add_file("b.md", "markdown");

        let mut p = FilterPatterns::default();
        p.include_extensions = vec!["py".to_string()];
        let output = emit(&dir, None, &config(p));
        assert!(output.contains("python"));
        assert!(!output.contains("markdown"));
    }

    #[test]
    fn ignored_directories_are_never_descended() {
        let dir = TestDir::new();
        dir.add_file("node_modules/pkg/index.js", "module");
        dir.add_file("main.js", "entry");
        let ignore_file = dir.add_file(".gitignore", "node_modules/\n.gitignore\n");

        let spec = IgnoreSpec::load(dir.path(), &ignore_file).unwrap();
        let output = emit(&dir, Some(&spec), &config(FilterPatterns::default()));
        assert!(output.contains("entry"));
        assert!(!output.contains("module"));
    }

    #[test]
    fn walk_order_is_sorted() {
        let dir = TestDir::new();
        dir.add_file("z.txt", "last");
        dir.add_file("a.txt", "first");

        let output = emit(&dir, None, &config(FilterPatterns::default()));
        let first = output.find("a.txt").unwrap();
        let last = output.find("z.txt").unwrap();
        assert!(first < last);
    }
}
