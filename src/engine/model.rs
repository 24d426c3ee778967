//! Structures recovered from Java source by the extractor.
//!
//! These live for a single translation run and are discarded once the Go
//! text has been assembled.

/// Java access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    #[default]
    None,
}

impl Modifier {
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("public") => Modifier::Public,
            Some("private") => Modifier::Private,
            Some("protected") => Modifier::Protected,
            _ => Modifier::None,
        }
    }

    /// Whether `word` is one of the access modifier keywords.
    pub fn is_keyword(word: &str) -> bool {
        matches!(word, "public" | "private" | "protected")
    }
}

/// A field declared at class level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub modifier: Modifier,
    pub declared_type: String,
    pub name: String,
    pub default_value: Option<String>,
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

/// A method other than `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub modifier: Modifier,
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
    /// Raw, unparsed statement text between the braces.
    pub body: String,
}

/// The single class recognized in a source unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassInfo {
    pub name: String,
    /// Declaration order preserved.
    pub fields: Vec<FieldDecl>,
    /// Declaration order preserved; never contains `main`.
    pub methods: Vec<MethodDecl>,
    pub main_body: Option<String>,
}

impl ClassInfo {
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}

/// Everything the extractor recovered from one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub class: Option<ClassInfo>,
    /// Body of a `main` method found without a recognizable class declaration.
    pub orphan_main: Option<String>,
}

impl Extraction {
    /// Body of `main`, wherever it was found.
    pub fn main_body(&self) -> Option<&str> {
        self.class
            .as_ref()
            .and_then(|c| c.main_body.as_deref())
            .or(self.orphan_main.as_deref())
    }
}
