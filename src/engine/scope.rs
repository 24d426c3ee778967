//! Comment- and string-aware brace depth tracking.
//!
//! The tracker walks raw Java text left to right and classifies every byte
//! as code, string content, or comment. Braces only count toward the depth
//! when they appear in code. Depth 1 means "inside the class body, outside
//! any method".
//!
//! The tracker is advisory: unbalanced input never fails, the depth simply
//! clamps at zero and unterminated comments run to the end of input.

/// Lexical state of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    /// Inside a quoted literal. `delimiter` is `"` or `'`.
    InString { delimiter: u8 },
    InLineComment,
    InBlockComment,
}

impl ScanState {
    pub fn is_code(&self) -> bool {
        matches!(self, ScanState::Normal)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ScanState::InLineComment | ScanState::InBlockComment)
    }
}

/// A single classified byte of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub offset: usize,
    pub byte: u8,
    /// State the byte belongs to (delimiters belong to the construct they open or close).
    pub state: ScanState,
    /// Brace depth immediately before this byte.
    pub depth: usize,
}

/// Left-to-right scanner yielding every byte with its lexical state.
///
/// All delimiters the scanner cares about are ASCII, so scanning bytes is
/// safe for UTF-8 input.
pub struct ScopeTracker<'a> {
    text: &'a [u8],
    pos: usize,
    state: ScanState,
    depth: usize,
    /// Classification forced onto the next byte (second half of a two-byte token).
    carry: Option<ScanState>,
}

impl<'a> ScopeTracker<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::starting_at(text, 0)
    }

    /// Start scanning at `offset` in the normal state with depth 0.
    pub fn starting_at(text: &'a str, offset: usize) -> Self {
        Self {
            text: text.as_bytes(),
            pos: offset.min(text.len()),
            state: ScanState::Normal,
            depth: 0,
            carry: None,
        }
    }

    /// Offset of the next byte to be scanned.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current brace depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Advance until `offset` (exclusive) or end of input.
    pub fn advance_to(&mut self, offset: usize) {
        while self.pos < offset {
            if self.next().is_none() {
                break;
            }
        }
    }
}

impl Iterator for ScopeTracker<'_> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        let offset = self.pos;
        let byte = *self.text.get(offset)?;
        let next = self.text.get(offset + 1).copied();
        let depth = self.depth;
        self.pos += 1;

        if let Some(state) = self.carry.take() {
            return Some(Scanned { offset, byte, state, depth });
        }

        let state = match self.state {
            ScanState::Normal => match (byte, next) {
                (b'"' | b'\'', _) => {
                    self.state = ScanState::InString { delimiter: byte };
                    self.state
                }
                (b'/', Some(b'/')) => {
                    self.state = ScanState::InLineComment;
                    self.state
                }
                (b'/', Some(b'*')) => {
                    self.state = ScanState::InBlockComment;
                    self.carry = Some(ScanState::InBlockComment);
                    self.state
                }
                (b'{', _) => {
                    self.depth += 1;
                    ScanState::Normal
                }
                (b'}', _) => {
                    self.depth = self.depth.saturating_sub(1);
                    ScanState::Normal
                }
                _ => ScanState::Normal,
            },
            current @ ScanState::InString { delimiter } => {
                if byte == b'\\' {
                    // Escaped character never terminates the literal.
                    self.carry = Some(current);
                } else if byte == delimiter {
                    self.state = ScanState::Normal;
                } else if byte == b'\n' {
                    // Java literals cannot span lines; recover at the newline.
                    self.state = ScanState::Normal;
                    return Some(Scanned {
                        offset,
                        byte,
                        state: ScanState::Normal,
                        depth,
                    });
                }
                current
            }
            ScanState::InLineComment => {
                if byte == b'\n' {
                    self.state = ScanState::Normal;
                    ScanState::Normal
                } else {
                    ScanState::InLineComment
                }
            }
            ScanState::InBlockComment => {
                if byte == b'*' && next == Some(b'/') {
                    self.state = ScanState::Normal;
                    self.carry = Some(ScanState::InBlockComment);
                }
                ScanState::InBlockComment
            }
        };

        Some(Scanned { offset, byte, state, depth })
    }
}

/// Brace depth immediately before `offset`, ignoring braces in strings and comments.
pub fn depth_at(text: &str, offset: usize) -> usize {
    let mut tracker = ScopeTracker::new(text);
    tracker.advance_to(offset);
    tracker.depth()
}

/// Whether `offset` lies in a class body but outside any method (depth exactly 1).
///
/// Known approximation: nested class-level braces such as array initializers
/// or instance initializer blocks push their contents below class level.
pub fn is_class_level(text: &str, offset: usize) -> bool {
    depth_at(text, offset) == 1
}

/// The classified byte at `offset`, or `None` past the end of input.
pub fn scanned_at(text: &str, offset: usize) -> Option<Scanned> {
    let mut tracker = ScopeTracker::new(text);
    tracker.advance_to(offset);
    tracker.next()
}

/// Whether the byte at `offset` is code (not inside a string or comment).
pub fn is_code_at(text: &str, offset: usize) -> bool {
    matches!(scanned_at(text, offset), Some(s) if s.state.is_code())
}

/// Whether `offset` starts code at class level, in a single scan.
pub fn is_class_level_code(text: &str, offset: usize) -> bool {
    matches!(scanned_at(text, offset), Some(s) if s.depth == 1 && s.state.is_code())
}

/// Find the code `}` that closes the `{` at `open`.
///
/// Returns `None` when the block is never closed.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    if text.as_bytes().get(open) != Some(&b'{') {
        return None;
    }
    ScopeTracker::starting_at(text, open)
        .find(|s| s.byte == b'}' && s.state.is_code() && s.depth == 1)
        .map(|s| s.offset)
}

/// Remove `//` and `/* */` comments, leaving string literals intact.
///
/// Line comments keep their terminating newline.
pub fn strip_comments(text: &str) -> String {
    let kept: Vec<u8> = ScopeTracker::new(text)
        .filter(|s| !s.state.is_comment())
        .map(|s| s.byte)
        .collect();
    match String::from_utf8(kept) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
