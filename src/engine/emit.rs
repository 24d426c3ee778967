//! Go struct and constructor emission for an extracted class.

use std::fmt::Write;

use super::model::ClassInfo;
use super::types::map_type;
use super::INDENT;
use crate::config::TranslatorConfig;

/// Go name for a Java field, capitalized when exporting is enabled.
pub fn field_name(name: &str, capitalize: bool) -> String {
    if !capitalize {
        return name.to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Receiver or return type for the class, honoring the pointer option.
pub fn class_ref(class: &ClassInfo, config: &TranslatorConfig) -> String {
    if config.use_pointer_receivers {
        format!("*{}", class.name)
    } else {
        class.name.clone()
    }
}

/// `type Name struct { ... }` with one line per field.
pub fn emit_struct(class: &ClassInfo, config: &TranslatorConfig) -> String {
    let mut out = String::new();
    if config.keep_comments {
        let _ = writeln!(
            out,
            "// {} represents the equivalent of Java class {}",
            class.name, class.name
        );
    }
    let _ = writeln!(out, "type {} struct {{", class.name);
    for field in &class.fields {
        let _ = writeln!(
            out,
            "{}{} {} // was {}",
            INDENT,
            field_name(&field.name, config.capitalize_exported_fields),
            map_type(&field.declared_type),
            field.declared_type
        );
    }
    out.push('}');
    out
}

/// `func NewName(...)` taking every field in declaration order.
pub fn emit_constructor(class: &ClassInfo, config: &TranslatorConfig) -> String {
    let params: Vec<String> = class
        .fields
        .iter()
        .map(|f| format!("{} {}", f.name, map_type(&f.declared_type)))
        .collect();
    let literal_prefix = if config.use_pointer_receivers { "&" } else { "" };

    let mut out = String::new();
    if config.keep_comments {
        let _ = writeln!(
            out,
            "// New{} creates a new {} instance",
            class.name, class.name
        );
    }
    let _ = writeln!(
        out,
        "func New{}({}) {} {{",
        class.name,
        params.join(", "),
        class_ref(class, config)
    );
    let _ = writeln!(out, "{}return {}{}{{", INDENT, literal_prefix, class.name);
    for field in &class.fields {
        let _ = writeln!(
            out,
            "{}{}{}: {},",
            INDENT,
            INDENT,
            field_name(&field.name, config.capitalize_exported_fields),
            field.name
        );
    }
    let _ = writeln!(out, "{}}}", INDENT);
    out.push('}');
    out
}

/// Struct and constructor blocks, or `None` when the class has no fields.
pub fn emit_declarations(class: &ClassInfo, config: &TranslatorConfig) -> Option<Vec<String>> {
    if !class.has_fields() {
        return None;
    }
    Some(vec![
        emit_struct(class, config),
        emit_constructor(class, config),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::{FieldDecl, Modifier};

    fn person() -> ClassInfo {
        let field = |ty: &str, name: &str| FieldDecl {
            modifier: Modifier::Private,
            declared_type: ty.to_string(),
            name: name.to_string(),
            default_value: None,
        };
        ClassInfo {
            name: "Person".to_string(),
            fields: vec![field("String", "name"), field("int", "age")],
            ..Default::default()
        }
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("name", true), "Name");
        assert_eq!(field_name("name", false), "name");
        assert_eq!(field_name("", true), "");
        assert_eq!(field_name("émile", true), "Émile");
    }

    #[test]
    fn test_struct_capitalized() {
        let out = emit_struct(&person(), &TranslatorConfig::default());
        assert_eq!(
            out,
            "// Person represents the equivalent of Java class Person\n\
             type Person struct {\n    \
             Name string // was String\n    \
             Age int // was int\n\
             }"
        );
    }

    #[test]
    fn test_struct_without_capitalization_or_comments() {
        let config = TranslatorConfig {
            capitalize_exported_fields: false,
            keep_comments: false,
            ..Default::default()
        };
        let out = emit_struct(&person(), &config);
        assert!(out.starts_with("type Person struct {"));
        assert!(out.contains("    name string // was String"));
        assert!(out.contains("    age int // was int"));
    }

    #[test]
    fn test_constructor_pointer() {
        let out = emit_constructor(&person(), &TranslatorConfig::default());
        assert!(out.contains("func NewPerson(name string, age int) *Person {"));
        assert!(out.contains("    return &Person{"));
        assert!(out.contains("        Name: name,"));
        assert!(out.contains("        Age: age,"));
        assert!(out.ends_with("    }\n}"));
    }

    #[test]
    fn test_constructor_value() {
        let config = TranslatorConfig {
            use_pointer_receivers: false,
            ..Default::default()
        };
        let out = emit_constructor(&person(), &config);
        assert!(out.contains("func NewPerson(name string, age int) Person {"));
        assert!(out.contains("    return Person{"));
    }

    #[test]
    fn test_no_fields_no_declarations() {
        let class = ClassInfo {
            name: "Empty".to_string(),
            ..Default::default()
        };
        assert!(emit_declarations(&class, &TranslatorConfig::default()).is_none());
        assert_eq!(
            emit_declarations(&person(), &TranslatorConfig::default())
                .map(|blocks| blocks.len()),
            Some(2)
        );
    }
}
