//! Final composition of the Go program text.

use log::debug;

use super::emit::{class_ref, emit_declarations};
use super::model::{ClassInfo, Extraction, MethodDecl};
use super::rewrite::{BodyRewriter, RECEIVER};
use super::scope::strip_comments;
use super::types::{map_type, sample_value};
use super::INDENT;
use crate::config::TranslatorConfig;

/// A Go import added when the Java source mentions certain APIs.
struct ImportTrigger {
    package: &'static str,
    /// Every one of these must appear.
    requires: &'static [&'static str],
    /// At least one of these must appear (ignored when empty).
    any_of: &'static [&'static str],
}

impl ImportTrigger {
    fn fires(&self, source: &str) -> bool {
        self.requires.iter().all(|s| source.contains(s))
            && (self.any_of.is_empty() || self.any_of.iter().any(|s| source.contains(s)))
    }
}

static IMPORT_TRIGGERS: &[ImportTrigger] = &[
    ImportTrigger {
        package: "fmt",
        requires: &["System.out"],
        any_of: &[],
    },
    ImportTrigger {
        package: "strings",
        requires: &["String"],
        any_of: &["toLowerCase", "toUpperCase", "substring"],
    },
    ImportTrigger {
        package: "strconv",
        requires: &[],
        any_of: &["Integer.parseInt", "Double.parseDouble"],
    },
];

/// Packages to import for `source`, in fixed order.
pub fn detect_imports(source: &str) -> Vec<&'static str> {
    IMPORT_TRIGGERS
        .iter()
        .filter(|t| t.fires(source))
        .map(|t| t.package)
        .collect()
}

/// Build the complete Go program.
pub fn assemble(source: &str, extraction: &Extraction, config: &TranslatorConfig) -> String {
    let mut blocks: Vec<String> = vec!["package main".to_string()];

    let imports = detect_imports(source);
    debug!("imports: {:?}", imports);
    if !imports.is_empty() {
        blocks.push(import_block(&imports));
    }

    let class = extraction.class.as_ref();
    if let Some(class) = class {
        if let Some(declarations) = emit_declarations(class, config) {
            blocks.extend(declarations);
            for method in &class.methods {
                blocks.push(emit_method(class, method, config));
            }
        }
    }

    if let Some(body) = extraction.main_body() {
        debug!("emitting translated main");
        blocks.push(emit_main(body, config));
    } else if let Some(class) = class.filter(|c| c.has_fields() && c.has_methods()) {
        debug!("emitting usage stub for {}", class.name);
        blocks.push(emit_usage_stub(class));
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn import_block(packages: &[&str]) -> String {
    let mut out = String::from("import (\n");
    for package in packages {
        out.push_str(&format!("{}\"{}\"\n", INDENT, package));
    }
    out.push(')');
    out
}

/// Append each non-empty line of `body`, trimmed, at one indentation level.
fn push_body(out: &mut String, body: &str) {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
}

fn prepare_body(body: &str, config: &TranslatorConfig) -> String {
    if config.keep_comments {
        body.to_string()
    } else {
        strip_comments(body)
    }
}

/// A method translated to a function with a receiver.
pub fn emit_method(class: &ClassInfo, method: &MethodDecl, config: &TranslatorConfig) -> String {
    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.name, map_type(&p.ty)))
        .collect();
    let return_type = map_type(&method.return_type);

    let rewriter = BodyRewriter::new()
        .library_calls(config.rewrite_library_calls)
        .with_receiver(RECEIVER, &class.fields, config.capitalize_exported_fields);
    let body = rewriter.rewrite(&prepare_body(&method.body, config));

    let mut out = String::new();
    if config.keep_comments {
        out.push_str(&format!(
            "// {} is the Go equivalent of the Java method\n",
            method.name
        ));
    }
    let signature = format!(
        "func ({} {}) {}({})",
        RECEIVER,
        class_ref(class, config),
        method.name,
        params.join(", ")
    );
    if return_type.is_empty() {
        out.push_str(&format!("{} {{\n", signature));
    } else {
        out.push_str(&format!("{} {} {{\n", signature, return_type));
    }
    push_body(&mut out, &body);
    out.push('}');
    out
}

/// `func main()` wrapping the translated body of the Java `main`.
pub fn emit_main(body: &str, config: &TranslatorConfig) -> String {
    let rewriter = BodyRewriter::new().library_calls(config.rewrite_library_calls);
    let body = rewriter.rewrite(&prepare_body(body, config));

    let mut out = String::from("func main() {\n");
    push_body(&mut out, &body);
    out.push('}');
    out
}

/// Commented-out example of constructing the class and calling its first method.
pub fn emit_usage_stub(class: &ClassInfo) -> String {
    let samples: Vec<&str> = class
        .fields
        .iter()
        .map(|f| sample_value(&f.declared_type))
        .collect();

    let mut out = String::from("func main() {\n");
    out.push_str(&format!(
        "{}// Example of creating and using a {} instance\n",
        INDENT, class.name
    ));
    out.push_str(&format!("{}// Uncomment and modify as needed\n", INDENT));
    out.push_str(&format!(
        "{}// instance := New{}({})\n",
        INDENT,
        class.name,
        samples.join(", ")
    ));
    if let Some(method) = class.methods.first() {
        out.push_str(&format!("{}// instance.{}()\n", INDENT, method.name));
    }
    out.push('}');
    out
}
