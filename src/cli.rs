//! Command-line interface for java2go.

use clap::{Args, Parser, Subcommand};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{self, TranslatorConfig};
use crate::engine::{reindent, Translator};
use crate::report;
use crate::runner::{OutputTarget, Runner};
use crate::templates;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Translate Java source into approximate Go source.
///
/// The output is a starting point for a migration, not a compiled
/// equivalent: review and adjust the generated code by hand.
#[derive(Parser)]
#[command(name = "java2go")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a Java file or directory to Go
    Translate(TranslateArgs),
    /// Re-indent a Go file from its brace structure
    Fmt(FmtArgs),
    /// Write one of the built-in Java samples
    Template(TemplateArgs),
}

/// Options that override the config file.
#[derive(Args, Default)]
pub struct ConfigOverrides {
    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep Java field names as-is instead of capitalizing them
    #[arg(long)]
    pub no_capitalize: bool,

    /// Use value receivers instead of pointer receivers
    #[arg(long)]
    pub value_receivers: bool,

    /// Drop Java comments and explanatory comments from the output
    #[arg(long)]
    pub strip_comments: bool,

    /// Rewrite common Java library calls (equals, length, parseInt, ...)
    #[arg(long)]
    pub library_calls: bool,
}

/// Arguments for the translate command.
#[derive(Parser)]
pub struct TranslateArgs {
    /// Java file or directory to translate
    pub path: PathBuf,

    /// Output .go file (single input) or directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print generated Go to stdout instead of writing files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Report format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Re-indent generated code from its brace structure
    #[arg(long)]
    pub reindent: bool,

    /// Glob patterns for paths to skip (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Arguments for the fmt command.
#[derive(Parser)]
pub struct FmtArgs {
    /// Go file to re-indent
    pub path: PathBuf,

    /// Rewrite the file in place instead of printing
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for the template command.
#[derive(Parser)]
pub struct TemplateArgs {
    /// Template to use
    #[arg(default_value = "hello-world")]
    pub name: String,

    /// Output file path (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,
}

/// Load the config file (explicit or discovered) and apply flag overrides.
pub fn resolve_config(overrides: &ConfigOverrides) -> anyhow::Result<TranslatorConfig> {
    let path = match &overrides.config {
        Some(p) => Some(p.clone()),
        None => config::discover(Path::new(".")),
    };

    let mut config = match path {
        Some(p) => {
            log::info!("using config {}", p.display());
            TranslatorConfig::parse_file(&p)?
        }
        None => TranslatorConfig::default(),
    };

    if overrides.no_capitalize {
        config.capitalize_exported_fields = false;
    }
    if overrides.value_receivers {
        config.use_pointer_receivers = false;
    }
    if overrides.strip_comments {
        config.keep_comments = false;
    }
    if overrides.library_calls {
        config.rewrite_library_calls = true;
    }

    Ok(config)
}

fn build_excludes(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclude pattern {:?}: {}", pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Collect `.java` files under `root`, skipping hidden and excluded paths.
pub fn collect_files(root: &Path, excludes: &GlobSet) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories
            if e.depth() > 0 && e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            let relative = e.path().strip_prefix(root).unwrap_or(e.path());
            !excludes.is_match(relative)
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("java") {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run the translate command.
pub fn run_translate(args: &TranslateArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match resolve_config(&args.overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = if metadata.is_dir() {
        let excludes = build_excludes(&args.exclude)?;
        collect_files(&args.path, &excludes)?
    } else {
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no Java files to translate");
        return Ok(EXIT_SUCCESS);
    }

    let target = if args.stdout {
        OutputTarget::Stdout
    } else {
        match &args.output {
            Some(out)
                if !metadata.is_dir() && out.extension().and_then(|e| e.to_str()) == Some("go") =>
            {
                OutputTarget::File(out.clone())
            }
            Some(out) => OutputTarget::Dir(out.clone()),
            None => OutputTarget::Beside,
        }
    };

    let translator = Translator::new(config).reindent(args.reindent);
    let outcomes = Runner::new(&translator, &args.path)
        .target(target)
        .run(&files);

    let path_str = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&path_str, &outcomes)?,
        _ => report::write_pretty(&path_str, &outcomes),
    }

    if report::Summary::from_outcomes(&outcomes).passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the fmt command.
pub fn run_fmt(args: &FmtArgs) -> anyhow::Result<i32> {
    let code = match std::fs::read_to_string(&args.path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: opening {}: {}", args.path.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    if code.trim().is_empty() {
        eprintln!("No Go code to format!");
        return Ok(EXIT_SUCCESS);
    }

    let formatted = reindent(code.trim());
    if args.write {
        if let Err(e) = std::fs::write(&args.path, &formatted) {
            eprintln!("Error: saving {}: {}", args.path.display(), e);
            return Ok(EXIT_ERROR);
        }
        eprintln!("Go code formatted: {}", args.path.display());
    } else {
        print!("{}", formatted);
    }

    Ok(EXIT_SUCCESS)
}

/// Run the template command.
pub fn run_template(args: &TemplateArgs) -> anyhow::Result<i32> {
    if args.list {
        return list_templates();
    }

    let template = match templates::find(&args.name) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown template {:?}", args.name);
            eprintln!("Run 'java2go template --list' to see available templates");
            return Ok(EXIT_ERROR);
        }
    };

    let Some(output) = &args.output else {
        print!("{}", template.content);
        return Ok(EXIT_SUCCESS);
    };

    // Check if output already exists
    if output.exists() {
        eprintln!("Error: file already exists: {}", output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(output, template.content) {
        eprintln!("Error: failed to write template: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Loaded {} template into {}", template.name, output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} as needed", output.display());
    println!("  2. Run: java2go translate {}", output.display());

    Ok(EXIT_SUCCESS)
}

/// List available templates.
fn list_templates() -> anyhow::Result<i32> {
    println!("Available templates:");
    println!();

    for template in templates::all() {
        let name = if template.name == "hello-world" {
            format!("{} (default)", template.name)
        } else {
            template.name.to_string()
        };
        println!("  {:<24} {}", name, template.description);
    }

    println!();
    println!("Usage:");
    println!("  java2go template <name> [--output <file>]");

    Ok(EXIT_SUCCESS)
}
