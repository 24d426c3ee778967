//! Batch translation of Java files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::{TranslateError, Translator};

/// Where generated Go text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `<stem>.go` next to each input.
    Beside,
    /// Under a directory, mirroring paths relative to the base directory.
    Dir(PathBuf),
    /// A single named file (single input only).
    File(PathBuf),
    /// Kept in memory for the caller to print.
    Stdout,
}

/// Outcome of translating a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Translated,
    Skipped,
    Failed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Translated => write!(f, "translated"),
            FileStatus::Skipped => write!(f, "skipped"),
            FileStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub status: FileStatus,
    pub message: Option<String>,
    /// Generated text when writing to stdout.
    pub generated: Option<String>,
}

impl FileOutcome {
    fn failed(input: &Path, message: String) -> Self {
        Self {
            input: input.to_path_buf(),
            output: None,
            status: FileStatus::Failed,
            message: Some(message),
            generated: None,
        }
    }
}

/// Translates files independently and in parallel.
pub struct Runner<'a> {
    translator: &'a Translator,
    base_dir: PathBuf,
    target: OutputTarget,
}

impl<'a> Runner<'a> {
    pub fn new<P: AsRef<Path>>(translator: &'a Translator, base_dir: P) -> Self {
        Self {
            translator,
            base_dir: base_dir.as_ref().to_path_buf(),
            target: OutputTarget::Beside,
        }
    }

    pub fn target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }

    /// Translate every file. Results are sorted by input path.
    pub fn run(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        let mut outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|file| self.translate_file(file))
            .collect();
        outcomes.sort_by(|a, b| a.input.cmp(&b.input));

        let translated = outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Translated)
            .count();
        info!("translated {} of {} files", translated, outcomes.len());
        outcomes
    }

    /// Destination for `input` under the current target.
    pub fn output_path(&self, input: &Path) -> Option<PathBuf> {
        let go_name = input.with_extension("go");
        match &self.target {
            OutputTarget::Beside => Some(go_name),
            OutputTarget::File(path) => Some(path.clone()),
            OutputTarget::Stdout => None,
            OutputTarget::Dir(dir) => {
                let relative = go_name
                    .strip_prefix(&self.base_dir)
                    .ok()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .or_else(|| go_name.file_name().map(PathBuf::from))?;
                Some(dir.join(relative))
            }
        }
    }

    /// Read, translate, and write a single file.
    pub fn translate_file(&self, input: &Path) -> FileOutcome {
        let source = match fs::read_to_string(input) {
            Ok(s) => s,
            Err(e) => return FileOutcome::failed(input, format!("reading file: {}", e)),
        };

        let generated = match self.translator.translate(&source) {
            Ok(text) => text,
            Err(TranslateError::NothingToTranslate) => {
                debug!("{}: nothing to translate", input.display());
                return FileOutcome {
                    input: input.to_path_buf(),
                    output: None,
                    status: FileStatus::Skipped,
                    message: Some(TranslateError::NothingToTranslate.to_string()),
                    generated: None,
                };
            }
            Err(e) => return FileOutcome::failed(input, e.to_string()),
        };

        let Some(output) = self.output_path(input) else {
            return FileOutcome {
                input: input.to_path_buf(),
                output: None,
                status: FileStatus::Translated,
                message: None,
                generated: Some(generated),
            };
        };

        if let Err(e) = write_output(&output, &generated) {
            return FileOutcome::failed(input, format!("writing {}: {}", output.display(), e));
        }
        debug!("{} -> {}", input.display(), output.display());

        FileOutcome {
            input: input.to_path_buf(),
            output: Some(output),
            status: FileStatus::Translated,
            message: None,
            generated: None,
        }
    }
}

fn write_output(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}
