//! Fixed Java to Go type tables.

use phf::phf_map;

/// Java type name → Go type name. Names outside the table map to themselves.
static GO_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "int" => "int",
    "long" => "int64",
    "float" => "float32",
    "double" => "float64",
    "boolean" => "bool",
    "String" => "string",
    "char" => "rune",
    "byte" => "byte",
    "short" => "int16",
    "void" => "",
    "Object" => "interface{}",
    "Integer" => "int",
    "Long" => "int64",
    "Float" => "float32",
    "Double" => "float64",
    "Boolean" => "bool",
    "Character" => "rune",
    "Byte" => "byte",
    "Short" => "int16",
};

/// Sample literal per Java type, used in the generated usage stub.
static SAMPLE_VALUES: phf::Map<&'static str, &'static str> = phf_map! {
    "int" => "0",
    "long" => "0",
    "float" => "0.0",
    "double" => "0.0",
    "boolean" => "false",
    "String" => "\"\"",
    "char" => "'a'",
    "byte" => "0",
    "short" => "0",
    "Integer" => "0",
    "Long" => "0",
    "Float" => "0.0",
    "Double" => "0.0",
    "Boolean" => "false",
    "Character" => "'a'",
    "Byte" => "0",
    "Short" => "0",
};

/// Placeholder for types without a sample value.
pub const NULL_SAMPLE: &str = "nil";

/// Map a Java type name to its Go equivalent.
///
/// Unknown names (usually other class names) pass through unchanged.
/// `void` maps to the empty string.
pub fn map_type(java_type: &str) -> &str {
    GO_TYPES.get(java_type).copied().unwrap_or(java_type)
}

/// Sample Go literal for a Java type, `nil` for unknown types.
pub fn sample_value(java_type: &str) -> &'static str {
    SAMPLE_VALUES.get(java_type).copied().unwrap_or(NULL_SAMPLE)
}
