//! java2go - best-effort Java to Go source translation.
//!
//! java2go turns Java source text into approximate Go source text as a
//! starting point for migration projects. It does not parse a Java grammar
//! and the output is not guaranteed to compile: unrecognized constructs
//! pass through untouched for a human to finish.
//!
//! # Architecture
//!
//! - `engine`: the translation pipeline (scope tracking, extraction, type
//!   mapping, declaration emission, body rewriting, assembly, re-indenting)
//! - `config`: translator options, loadable from YAML
//! - `runner`: parallel translation of files on disk
//! - `report`: output formatting (pretty, JSON)
//! - `templates`: built-in Java samples
//! - `cli`: command-line interface
//!
//! # Example
//!
//! ```
//! use java2go::{translate, TranslatorConfig};
//!
//! let source = r#"public class Hello {
//!     public static void main(String[] args) {
//!         System.out.println("hi");
//!     }
//! }"#;
//! let go = translate(source, &TranslatorConfig::default()).unwrap();
//! assert!(go.contains("fmt.Println(\"hi\")"));
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod report;
pub mod runner;
pub mod templates;

pub use config::{ConfigError, TranslatorConfig};
pub use engine::{
    extract, map_type, reindent, translate, ClassInfo, Extraction, TranslateError, Translator,
};
pub use runner::{FileOutcome, FileStatus, OutputTarget, Runner};
