//! Built-in Java sample programs.

/// A named Java sample.
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

/// All available templates.
static TEMPLATES: &[Template] = &[
    Template {
        name: "empty",
        description: "Empty source file",
        content: "",
    },
    Template {
        name: "hello-world",
        description: "Class with a main method printing a greeting",
        content: include_str!("templates/hello-world.java"),
    },
    Template {
        name: "simple-class",
        description: "Class with fields, a constructor, getters, and a method",
        content: include_str!("templates/simple-class.java"),
    },
    Template {
        name: "for-loop",
        description: "Main method with for and while loops",
        content: include_str!("templates/for-loop.java"),
    },
    Template {
        name: "method-example",
        description: "Calculator class with methods called from main",
        content: include_str!("templates/method-example.java"),
    },
];

pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Look up a template by name.
pub fn find(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert!(find("hello-world").unwrap().content.contains("public static void main"));
        assert!(find("empty").unwrap().content.is_empty());
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = all().iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }
}
