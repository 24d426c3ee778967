//! Brace-driven re-indentation of generated Go text.

/// Indentation unit used by the formatter.
pub const REINDENT_UNIT: &str = "\t";

/// Recompute indentation from brace nesting alone.
///
/// Existing indentation is discarded. A line ending in `{` opens a level
/// after it is written; a line starting with `}` closes a level before it
/// is written (never below zero). `} else {` does both. Empty lines stay
/// empty. Applying this twice gives the same result as applying it once.
pub fn reindent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut level: usize = 0;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            out.push('\n');
            continue;
        }

        if line.starts_with('}') {
            level = level.saturating_sub(1);
        }
        for _ in 0..level {
            out.push_str(REINDENT_UNIT);
        }
        out.push_str(line);
        out.push('\n');
        if line.ends_with('{') {
            level += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = "package main\n\nfunc main() {\n    for i := 0; i < 3; i++ {\n    if i > 1 {\n    fmt.Println(i)\n    } else {\n    fmt.Println(0)\n    }\n    }\n}\n";

    #[test]
    fn test_nesting() {
        let out = reindent(GENERATED);
        assert_eq!(
            out,
            "package main\n\nfunc main() {\n\tfor i := 0; i < 3; i++ {\n\t\tif i > 1 {\n\t\t\tfmt.Println(i)\n\t\t} else {\n\t\t\tfmt.Println(0)\n\t\t}\n\t}\n}\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = reindent(GENERATED);
        assert_eq!(reindent(&once), once);
    }

    #[test]
    fn test_unbalanced_close_clamps() {
        assert_eq!(reindent("}\n}\nx\n"), "}\n}\nx\n");
    }

    #[test]
    fn test_empty_lines_preserved() {
        assert_eq!(reindent("a {\n\n   b\n}"), "a {\n\n\tb\n}\n");
        assert_eq!(reindent(""), "");
    }
}
