//! Ordered text rewrites that turn Java statements into Go statements.
//!
//! Statements are first put on lines of their own. Rules then run in a
//! fixed order and later rules see the output of earlier ones:
//!
//! 1. print calls
//! 2. string concatenation to `fmt.Sprintf`
//! 3. typed local declarations to `:=`
//! 4. `this.field` to receiver field access
//! 5. control structures (`if`, `while`, `for`, `do`/`while`)
//! 6. qualified method calls
//! 7. `return` statements
//! 8. object construction to composite literals
//! 9. statement terminators
//!
//! Unrecognized text passes through untouched. Nothing here can fail.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::emit::field_name;
use super::model::FieldDecl;
use super::scope::ScopeTracker;

/// Default receiver name for translated methods.
pub const RECEIVER: &str = "s";

/// A string literal with escapes.
const STRING_LITERAL: &str = r#""(?:[^"\\]|\\.)*""#;

/// An operand joined to a literal: a dotted name with an optional call.
const OPERAND: &str = r"[\w.]+(?:\([^()]*\))?";

/// Words that never start a typed declaration.
const NON_TYPE_WORDS: &[&str] = &[
    "return", "new", "throw", "else", "case", "package", "import", "goto",
];

/// Keywords that continue a statement after a block's closing `}`.
const BLOCK_CONTINUATIONS: &[&str] = &["else", "while", "catch", "finally"];

/// A single pattern substitution.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

fn apply_all(rules: &[Rule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

lazy_static! {
    /// Java standard library idioms (opt-in).
    static ref LIBRARY_RULES: Vec<Rule> = vec![
        Rule::new(r"([\w.]+)\.equals\((.*?)\)", "${1} == ${2}"),
        Rule::new(r"([\w.]+)\.length\(\)", "len(${1})"),
        Rule::new(r"([\w.]+)\.charAt\((\w+)\)", "${1}[${2}]"),
        Rule::new(r"([\w.]+)\.toLowerCase\(\)", "strings.ToLower(${1})"),
        Rule::new(r"([\w.]+)\.toUpperCase\(\)", "strings.ToUpper(${1})"),
        Rule::new(r"([\w.]+)\.substring\((\w+),\s*(\w+)\)", "${1}[${2}:${3}]"),
        Rule::new(r"([\w.]+)\.substring\((\w+)\)", "${1}[${2}:]"),
        Rule::new(r"Integer\.parseInt\((.*?)\)", "strconv.Atoi(${1})"),
        Rule::new(r"Double\.parseDouble\((.*?)\)", "strconv.ParseFloat(${1}, 64)"),
        Rule::new(r"Boolean\.parseBoolean\((.*?)\)", "strconv.ParseBool(${1})"),
        Rule::new(r"\bthrow\s+new\s+(\w+)\((.*?)\);", "panic(${2}) // ${1}"),
    ];

    static ref PRINT_RULES: Vec<Rule> = vec![
        Rule::new(r"System\.out\.println\((.*?)\);", "fmt.Println(${1})"),
        Rule::new(r"System\.out\.print\((.*?)\);", "fmt.Print(${1})"),
        Rule::new(r"System\.out\.printf\((.*?)\);", "fmt.Printf(${1})"),
    ];

    static ref CONCAT_RULES: Vec<Rule> = vec![
        Rule::new(
            &format!(r"({})\s*\+\s*({})", STRING_LITERAL, OPERAND),
            r#"fmt.Sprintf("%s%v", ${1}, ${2})"#,
        ),
        Rule::new(
            &format!(r"({})\s*\+\s*({})", OPERAND, STRING_LITERAL),
            r#"fmt.Sprintf("%v%s", ${1}, ${2})"#,
        ),
    ];

    /// `Type name = expr` at the start of a statement, up to its `;`. The
    /// right-hand side may contain string literals with semicolons. The
    /// terminator is left in place so a following statement keeps its
    /// leading delimiter.
    static ref TYPED_DECLARATION: Regex = Regex::new(&format!(
        r"(?m)(^|[;{{}}])([ \t]*)(\w+)[ \t]+(\w+)[ \t]*=[ \t]*((?:{lit}|[^;=\n\x22])(?:{lit}|[^;\n\x22])*)",
        lit = STRING_LITERAL
    ))
    .unwrap();

    static ref CONTROL_RULES: Vec<Rule> = vec![
        Rule::new(r"\bif\s*\((.*?)\)\s*\{", "if ${1} {"),
        Rule::new(r"\bwhile\s*\((.*?)\)\s*\{", "for ${1} {"),
        Rule::new(
            r"\bfor\s*\(\s*(\w+)\s+(\w+)\s*=\s*(\w+)\s*;\s*(\w+)\s*([<>=!]+)\s*(\w+(?:\.\w+)*)\s*;\s*(\w+)(\+\+|--|\+=1|-=1)\s*\)\s*\{",
            "for ${2} := ${3}; ${4} ${5} ${6}; ${7}${8} {",
        ),
        Rule::new(r"\bdo\s*\{", "for {"),
        Rule::new(r"\}\s*while\s*\((.*?)\)\s*;", "if !(${1}) {\nbreak\n}\n}"),
    ];

    static ref QUALIFIED_CALL: Rule = Rule::new(r"(\w+)\.(\w+)\((.*?)\);", "${1}.${2}(${3})");

    static ref RETURN_STATEMENT: Rule = Rule::new(r"\breturn\s+(.*?);", "return ${1}");

    static ref CONSTRUCTION_RULES: Vec<Rule> = vec![
        Rule::new(
            r"(\w+)[ \t]+(\w+)\s*=\s*new\s+(\w+)\((.*?)\);",
            "${2} := &${3}{${4}}",
        ),
        Rule::new(r"\bnew\s+(\w+)\((.*?)\)", "${1}{${2}}"),
    ];
}

/// Rewrites Java statement text into Go statement text.
#[derive(Debug, Clone, Default)]
pub struct BodyRewriter {
    /// `this.field` patterns and their receiver replacements.
    field_access: Vec<(Regex, String)>,
    library_calls: bool,
}

impl BodyRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the standard library idiom rewrites.
    pub fn library_calls(mut self, enabled: bool) -> Self {
        self.library_calls = enabled;
        self
    }

    /// Rewrite `this.<field>` to `<receiver>.<GoField>` for each field.
    pub fn with_receiver(mut self, receiver: &str, fields: &[FieldDecl], capitalize: bool) -> Self {
        self.field_access = fields
            .iter()
            .filter_map(|f| {
                let pattern = Regex::new(&format!(r"\bthis\.{}\b", regex::escape(&f.name))).ok()?;
                let target = format!("{}.{}", receiver, field_name(&f.name, capitalize));
                Some((pattern, target))
            })
            .collect();
        self
    }

    /// Apply every rule in order.
    pub fn rewrite(&self, body: &str) -> String {
        let mut text = split_statements(body);

        if self.library_calls {
            text = apply_all(&LIBRARY_RULES, &text);
        }
        text = apply_all(&PRINT_RULES, &text);
        text = apply_all(&CONCAT_RULES, &text);
        text = rewrite_declarations(&text);
        text = self.rewrite_field_access(&text);
        text = apply_all(&CONTROL_RULES, &text);
        text = QUALIFIED_CALL.apply(&text);
        text = RETURN_STATEMENT.apply(&text);
        text = apply_all(&CONSTRUCTION_RULES, &text);
        strip_terminators(&text)
    }

    fn rewrite_field_access(&self, text: &str) -> String {
        self.field_access
            .iter()
            .fold(text.to_string(), |acc, (pattern, target)| {
                pattern.replace_all(&acc, target.as_str()).into_owned()
            })
    }
}

/// `Type name = expr;` → `name := expr`.
///
/// Declarations initialized with `new` are left for the construction rule,
/// which turns them into pointer composite literals.
fn rewrite_declarations(text: &str) -> String {
    TYPED_DECLARATION
        .replace_all(text, |caps: &Captures| {
            let ty = &caps[3];
            let value = &caps[5];
            if NON_TYPE_WORDS.contains(&ty) || value.starts_with("new ") {
                return caps[0].to_string();
            }
            format!("{}{}{} := {}", &caps[1], &caps[2], &caps[4], value.trim_end())
        })
        .into_owned()
}

/// Put every statement of `body` on a line of its own.
///
/// Lines break after a statement `;`, after a block `{`, and around a block
/// `}` unless the block continues (`} else {`, `} while (c);`). A `;` inside
/// parentheses, such as a `for` clause, does not end a statement, and array
/// initializer braces stay inline. Strings and comments are copied as-is.
pub fn split_statements(body: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(body.len() + 16);
    // Open braces: whether each is a block, and the paren depth outside it.
    let mut braces: Vec<(bool, usize)> = Vec::new();
    let mut parens: usize = 0;
    let mut pending_break = false;

    for s in ScopeTracker::new(body) {
        if pending_break {
            match s.byte {
                b' ' | b'\t' => continue,
                b'\n' | b'\r' => pending_break = false,
                _ => {
                    pending_break = false;
                    out.push(b'\n');
                }
            }
        }
        if !s.state.is_code() {
            out.push(s.byte);
            continue;
        }

        match s.byte {
            b'(' => parens += 1,
            b')' => parens = parens.saturating_sub(1),
            b';' if parens == 0 => pending_break = breaks_after(&body[s.offset + 1..]),
            b'{' => {
                let enclosing_block = braces.last().map_or(true, |&(block, _)| block);
                let block = enclosing_block && opens_block(&out);
                braces.push((block, parens));
                if block {
                    parens = 0;
                    pending_break = breaks_after(&body[s.offset + 1..]);
                }
            }
            b'}' => {
                let (block, outer) = braces.pop().unwrap_or((true, 0));
                if block {
                    parens = outer;
                    if !line_is_blank(&out) {
                        while matches!(out.last(), Some(b' ' | b'\t')) {
                            out.pop();
                        }
                        out.push(b'\n');
                    }
                    let rest = &body[s.offset + 1..];
                    pending_break = breaks_after(rest) && !continues_block(rest);
                }
            }
            _ => {}
        }
        out.push(s.byte);
    }

    match String::from_utf8(out) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// A `{` opens a block unless it starts an initializer (`= {`, `[] {`, `({`).
fn opens_block(before: &[u8]) -> bool {
    !matches!(
        before.iter().rev().find(|b| !b.is_ascii_whitespace()),
        Some(b'=' | b']' | b',' | b'(')
    )
}

fn line_is_blank(out: &[u8]) -> bool {
    out.iter()
        .rev()
        .take_while(|&&b| b != b'\n')
        .all(|b| b.is_ascii_whitespace())
}

/// Whether more code follows on the same line.
fn breaks_after(rest: &str) -> bool {
    let rest = rest.trim_start_matches(|c: char| c == ' ' || c == '\t');
    !(rest.is_empty()
        || rest.starts_with(|c: char| c == '\n' || c == '\r')
        || rest.starts_with("//")
        || rest.starts_with("/*"))
}

fn continues_block(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.starts_with(|c: char| matches!(c, ';' | ')' | ','))
        || BLOCK_CONTINUATIONS
            .iter()
            .any(|word| starts_keyword(rest, 0, word))
}

/// Whether `word` appears as a whole word at byte `at` of `text`.
fn starts_keyword(text: &str, at: usize, word: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    text[at..].starts_with(word)
        && !text[..at].chars().next_back().map_or(false, is_word)
        && !text[at + word.len()..].chars().next().map_or(false, is_word)
}

/// Drop `;` statement terminators outside string literals.
///
/// Statements still sharing a line are split onto separate lines. Clause
/// separators in a `for` header are kept up to its `{`.
pub fn strip_terminators(text: &str) -> String {
    text.split('\n')
        .map(drop_terminators)
        .collect::<Vec<_>>()
        .join("\n")
}

fn drop_terminators(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut for_header = false;
    let mut chars = line.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if let Some(q) = quote {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => {
                quote = Some(ch);
                out.push(ch);
            }
            '/' if line[i..].starts_with("//") => {
                out.push_str(&line[i..]);
                break;
            }
            'f' if starts_keyword(line, i, "for") => {
                for_header = true;
                out.push(ch);
            }
            '{' => {
                for_header = false;
                out.push(ch);
            }
            ';' if for_header => out.push(ch),
            ';' => {
                let rest = line[i + 1..].trim_start();
                if rest.is_empty() {
                    break;
                }
                if rest.starts_with("//") || rest.starts_with(';') {
                    continue;
                }
                // Another statement follows on the same line.
                let trimmed_len = out.trim_end().len();
                out.truncate(trimmed_len);
                out.push('\n');
                while let Some((_, c)) = chars.peek() {
                    if c.is_whitespace() {
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
