//! Structural extraction of a class, its fields, and its methods.
//!
//! Recognition is pattern based, not a Java grammar. The scope tracker
//! keeps field matches to class level and separates method headers from
//! the braces of nested control structures.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::model::{ClassInfo, Extraction, FieldDecl, MethodDecl, Modifier, Param};
use super::scope::{self, ScopeTracker};

/// How far before a field match to look for a `static` qualifier.
pub const STATIC_LOOKBACK: usize = 10;

lazy_static! {
    static ref CLASS_PATTERN: Regex = Regex::new(r"public\s+class\s+(\w+)").unwrap();

    static ref FIELD_PATTERN: Regex = Regex::new(
        r#"\b(?:(private|public|protected)\s+)?(?:final\s+)?(\w+)\s+(\w+)(?:\s*=\s*((?:"(?:[^"\\]|\\.)*"|[^;"])*?))?;"#
    ).unwrap();

    static ref METHOD_HEADER: Regex = Regex::new(
        r"\b(?:(public|private|protected)\s+)?(?:static\s+)?(?:final\s+)?(\w+)\s+(\w+)\s*\(([^)]*)\)\s*(?:throws\s+[\w.]+(?:\s*,\s*[\w.]+)*\s*)?\{"
    ).unwrap();

    static ref MAIN_HEADER: Regex = Regex::new(
        r"public\s+static\s+void\s+main\s*\(\s*String\s*(?:\[\]\s*\w+|\.\.\.\s*\w+|\w+\s*\[\])\s*\)\s*(?:throws\s+[\w.]+(?:\s*,\s*[\w.]+)*\s*)?\{"
    ).unwrap();
}

/// Recovers class structure from Java source.
///
/// The default implementation is [`PatternExtractor`]; a real parser can be
/// plugged in without touching emission or rewriting.
pub trait StructureExtractor: Send + Sync {
    fn extract(&self, source: &str) -> Extraction;
}

/// Regex and scope-tracker based extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternExtractor;

impl StructureExtractor for PatternExtractor {
    fn extract(&self, source: &str) -> Extraction {
        extract(source)
    }
}

/// Extract at most one class (and the `main` body) from `source`.
pub fn extract(source: &str) -> Extraction {
    let main_body = find_main_body(source);

    let Some(name) = find_class_name(source) else {
        debug!("no class declaration found, main present: {}", main_body.is_some());
        return Extraction {
            class: None,
            orphan_main: main_body,
        };
    };

    let fields = find_fields(source);
    let methods = find_methods(source, &name);
    debug!(
        "extracted class {}: {} fields, {} methods, main present: {}",
        name,
        fields.len(),
        methods.len(),
        main_body.is_some()
    );

    Extraction {
        class: Some(ClassInfo {
            name,
            fields,
            methods,
            main_body,
        }),
        orphan_main: None,
    }
}

/// Name of the first `public class` outside comments and strings.
pub fn find_class_name(source: &str) -> Option<String> {
    CLASS_PATTERN
        .captures_iter(source)
        .find(|caps| caps.get(0).map_or(false, |m| scope::is_code_at(source, m.start())))
        .map(|caps| caps[1].to_string())
}

/// Field declarations at class level, in source order.
pub fn find_fields(source: &str) -> Vec<FieldDecl> {
    let mut fields = Vec::new();

    for caps in FIELD_PATTERN.captures_iter(source) {
        let Some(whole) = caps.get(0) else { continue };
        let start = whole.start();

        if preceded_by_static(source, start) {
            trace!("skipping static field at offset {}", start);
            continue;
        }
        if !scope::is_class_level_code(source, start) {
            continue;
        }

        fields.push(FieldDecl {
            modifier: Modifier::parse(caps.get(1).map(|m| m.as_str())),
            declared_type: caps[2].to_string(),
            name: caps[3].to_string(),
            default_value: caps.get(4).map(|m| m.as_str().trim().to_string()),
        });
    }

    fields
}

/// Methods declared at class level, excluding `main` and constructors.
pub fn find_methods(source: &str, class_name: &str) -> Vec<MethodDecl> {
    let mut methods = Vec::new();
    let mut pos = 0;

    while let Some(caps) = METHOD_HEADER.captures_at(source, pos) {
        let Some(header) = caps.get(0) else { break };
        // The header ends with the opening brace.
        let open = header.end() - 1;

        if !scope::is_class_level_code(source, header.start()) {
            pos = header.end();
            continue;
        }

        let Some(close) = block_end(source, open, true) else {
            pos = header.end();
            continue;
        };
        pos = close + 1;

        let return_type = &caps[2];
        let name = &caps[3];

        if name == "main" {
            continue;
        }
        if Modifier::is_keyword(return_type) || name == class_name {
            trace!("skipping constructor {}", name);
            continue;
        }

        methods.push(MethodDecl {
            modifier: Modifier::parse(caps.get(1).map(|m| m.as_str())),
            return_type: return_type.to_string(),
            name: name.to_string(),
            params: parse_params(&caps[4]),
            body: source[open + 1..close].trim().to_string(),
        });
    }

    methods
}

/// Body of `public static void main(String[] args)`, trimmed.
pub fn find_main_body(source: &str) -> Option<String> {
    let header = MAIN_HEADER.find(source)?;
    let open = header.end() - 1;
    let close = block_end(source, open, false)?;
    Some(source[open + 1..close].trim().to_string())
}

/// Split a raw parameter list into `(type, name)` pairs.
///
/// Entries with fewer than two words are dropped; `final` is ignored.
pub fn parse_params(raw: &str) -> Vec<Param> {
    raw.split(',')
        .filter_map(|param| {
            let words: Vec<&str> = param
                .split_whitespace()
                .filter(|w| *w != "final")
                .collect();
            if words.len() >= 2 {
                Some(Param {
                    ty: words[0].to_string(),
                    name: words[1].to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Offset of the `}` closing the block opened at `open`.
///
/// Uses the brace that returns to the opening depth. On unbalanced input
/// falls back to the first code `}` followed by another `}`, end of input,
/// or (when `allow_word` is set) the start of a word.
fn block_end(source: &str, open: usize, allow_word: bool) -> Option<usize> {
    if let Some(close) = scope::matching_brace(source, open) {
        return Some(close);
    }

    ScopeTracker::starting_at(source, open + 1)
        .filter(|s| s.byte == b'}' && s.state.is_code())
        .find(|s| closes_at_boundary(source, s.offset + 1, allow_word))
        .map(|s| s.offset)
}

fn closes_at_boundary(source: &str, from: usize, allow_word: bool) -> bool {
    match source[from..].trim_start().chars().next() {
        None | Some('}') => true,
        Some(c) => allow_word && (c.is_alphanumeric() || c == '_'),
    }
}

fn preceded_by_static(source: &str, start: usize) -> bool {
    let mut from = start.saturating_sub(STATIC_LOOKBACK);
    while !source.is_char_boundary(from) {
        from -= 1;
    }
    source[from..start].contains("static")
}
