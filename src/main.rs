//! CLI entry point for grove

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use grove::{
    ContentEmitter, FilterConfig, FilterPatterns, GroveError, IgnoreSpec, Result, TreeFormatter,
    TreeWalker, print_json, NO_VISIBLE_CONTENT,
};

/// When to colorize the tree output
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Decide from the environment and whether stdout is a terminal
    #[default]
    Auto,
    /// Force colors on
    Always,
    /// Force colors off
    Never,
}

/// Resolve a `ColorMode` to a concrete yes/no for this run.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // NO_COLOR (https://no-color.org/) wins over everything else
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // FORCE_COLOR overrides terminal detection
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // TERM=dumb means no escape sequences
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Otherwise color only when writing to a terminal
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grove")]
#[command(about = "Tree view plus file contents, filtered for LLM context")]
#[command(version)]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Gitignore file to apply (default: <path>/.gitignore if present)
    #[arg(short = 'g', long = "gitignore", value_name = "FILE")]
    gitignore: Option<PathBuf>,

    /// Only show directories matching this regex in the tree (repeatable)
    #[arg(long = "tree-include-dir", value_name = "REGEX")]
    tree_include_dir: Vec<String>,

    /// Hide directories matching this regex from the tree (repeatable)
    #[arg(long = "tree-exclude-dir", value_name = "REGEX")]
    tree_exclude_dir: Vec<String>,

    /// Only show files matching this regex in the tree (repeatable)
    #[arg(long = "tree-include-file", value_name = "REGEX")]
    tree_include_file: Vec<String>,

    /// Hide files matching this regex from the tree (repeatable)
    #[arg(long = "tree-exclude-file", value_name = "REGEX")]
    tree_exclude_file: Vec<String>,

    /// Only show files with this extension in the tree (repeatable, no dot)
    #[arg(long = "tree-include-ext", value_name = "EXT")]
    tree_include_ext: Vec<String>,

    /// Hide files with this extension from the tree (repeatable, no dot)
    #[arg(long = "tree-exclude-ext", value_name = "EXT")]
    tree_exclude_ext: Vec<String>,

    /// Additional directory regex for content selection (repeatable)
    #[arg(long = "content-include-dir", value_name = "REGEX")]
    content_include_dir: Vec<String>,

    /// Additional directory exclusion regex for content selection (repeatable)
    #[arg(long = "content-exclude-dir", value_name = "REGEX")]
    content_exclude_dir: Vec<String>,

    /// Only print bodies of files matching this regex (repeatable)
    #[arg(long = "content-include-file", value_name = "REGEX")]
    content_include_file: Vec<String>,

    /// Never print bodies of files matching this regex (repeatable)
    #[arg(long = "content-exclude-file", value_name = "REGEX")]
    content_exclude_file: Vec<String>,

    /// Only print bodies of files with this extension (repeatable, no dot)
    #[arg(long = "content-include-ext", value_name = "EXT")]
    content_include_ext: Vec<String>,

    /// Never print bodies of files with this extension (repeatable, no dot)
    #[arg(long = "content-exclude-ext", value_name = "EXT")]
    content_exclude_ext: Vec<String>,

    /// Keep binary files visible instead of dropping them
    #[arg(long = "include-binary")]
    include_binary: bool,

    /// Do not auto-exclude .git directories
    #[arg(long = "include-git")]
    include_git: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output the tree in JSON format (content blocks are omitted)
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    fn tree_patterns(&self) -> FilterPatterns {
        FilterPatterns {
            include_dirs: self.tree_include_dir.clone(),
            exclude_dirs: self.tree_exclude_dir.clone(),
            include_files: self.tree_include_file.clone(),
            exclude_files: self.tree_exclude_file.clone(),
            include_extensions: self.tree_include_ext.clone(),
            exclude_extensions: self.tree_exclude_ext.clone(),
        }
    }

    fn content_patterns(&self) -> FilterPatterns {
        FilterPatterns {
            include_dirs: self.content_include_dir.clone(),
            exclude_dirs: self.content_exclude_dir.clone(),
            include_files: self.content_include_file.clone(),
            exclude_files: self.content_exclude_file.clone(),
            include_extensions: self.content_include_ext.clone(),
            exclude_extensions: self.content_exclude_ext.clone(),
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // Drop `.` components so emitted file paths stay clean.
    let root: PathBuf = root.components().collect();
    if !root.exists() {
        return Err(GroveError::PathNotFound { path: args.path.clone() });
    }

    // Validation runs on the raw per-scope lists, before merging: a tree
    // include plus a content exclude in the same category is legal.
    let mut tree_patterns = args.tree_patterns();
    let content_patterns = args.content_patterns();
    tree_patterns.validate("tree")?;
    content_patterns.validate("content")?;

    let mut content_patterns = tree_patterns.merged_with(&content_patterns);
    if !args.include_git {
        tree_patterns.exclude_dirs.push(r"\.git".to_string());
        content_patterns.exclude_dirs.push(r"\.git".to_string());
    }

    let tree_filter = FilterConfig::compile(&tree_patterns, args.include_binary)?;
    let content_filter = FilterConfig::compile(&content_patterns, args.include_binary)?;

    let ignore = match &args.gitignore {
        Some(file) => {
            let spec = IgnoreSpec::load(&root, file);
            if spec.is_none() {
                log::warn!("gitignore file {} not found or unreadable", file.display());
            }
            spec
        }
        None => IgnoreSpec::load(&root, &root.join(".gitignore")),
    };

    let forest = TreeWalker::new(&root, ignore.as_ref(), &tree_filter, &content_filter).walk()?;

    let label = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    if args.json {
        return print_json(&label, &root, &forest);
    }

    if forest.is_empty() {
        println!("{}", NO_VISIBLE_CONTENT);
    } else {
        TreeFormatter::new(should_use_color(args.color)).print(&label, &forest)?;
    }

    // The content pass runs regardless of how the tree came out.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ContentEmitter::new(&root, ignore.as_ref(), &content_filter).emit(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("grove: {}", e);
        process::exit(1);
    }
}
