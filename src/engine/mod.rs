//! Translation engine: Java source text in, Go source text out.
//!
//! Data flows one way:
//!
//! ```text
//! source -> scope (shared) -> extract -> { emit, rewrite } -> assemble -> [reindent]
//! ```
//!
//! Each call is a pure function of the source text and the configuration.
//! Nothing is cached between calls.

pub mod assemble;
pub mod emit;
pub mod extract;
pub mod model;
pub mod reindent;
pub mod rewrite;
pub mod scope;
pub mod types;

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use thiserror::Error;

use crate::config::TranslatorConfig;

pub use assemble::{assemble, detect_imports};
pub use extract::{extract, PatternExtractor, StructureExtractor};
pub use model::{ClassInfo, Extraction, FieldDecl, MethodDecl, Modifier, Param};
pub use reindent::reindent;
pub use rewrite::BodyRewriter;
pub use types::{map_type, sample_value};

/// Indentation unit for statements inside generated functions.
pub const INDENT: &str = "    ";

/// Errors surfaced at the engine boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The source was empty or whitespace only.
    #[error("nothing to translate")]
    NothingToTranslate,
    /// An unexpected internal fault while translating.
    #[error("translation failed: {0}")]
    Failed(String),
}

/// Configured translation entry point.
pub struct Translator {
    config: TranslatorConfig,
    extractor: Box<dyn StructureExtractor>,
    reindent: bool,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            extractor: Box::new(PatternExtractor),
            reindent: false,
        }
    }

    /// Run the brace-driven formatter over the assembled output.
    pub fn reindent(mut self, enabled: bool) -> Self {
        self.reindent = enabled;
        self
    }

    /// Replace the structural extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn StructureExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate one Java source unit.
    ///
    /// Empty input yields [`TranslateError::NothingToTranslate`]. A panic
    /// inside the engine is caught here and reported as
    /// [`TranslateError::Failed`].
    pub fn translate(&self, source: &str) -> Result<String, TranslateError> {
        if source.trim().is_empty() {
            return Err(TranslateError::NothingToTranslate);
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let extraction = self.extractor.extract(source);
            let out = assemble(source, &extraction, &self.config);
            if self.reindent {
                reindent(&out)
            } else {
                out
            }
        }));

        match result {
            Ok(out) => {
                debug!("translated {} bytes into {} bytes", source.len(), out.len());
                Ok(out)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("translation failed: {}", message);
                Err(TranslateError::Failed(message))
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(TranslatorConfig::default())
    }
}

/// Translate `source` with `config` without re-indentation.
pub fn translate(source: &str, config: &TranslatorConfig) -> Result<String, TranslateError> {
    Translator::new(config.clone()).translate(source)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown internal error".to_string()
    }
}
