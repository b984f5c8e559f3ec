//! Bracket scanning over JavaScript argument text.
//!
//! Characters inside string literals (`"…"`, `'…'`, `` `…` ``) are skipped,
//! honouring backslash escapes, so a comma or bracket inside a quoted value
//! never changes the depth count.

use std::str::CharIndices;

/// Iterator over the characters of `src` that sit outside string literals.
pub(crate) struct CodeChars<'a> {
    chars: CharIndices<'a>,
    quote: Option<char>,
    escaped: bool,
}

pub(crate) fn code_chars(src: &str) -> CodeChars<'_> {
    CodeChars {
        chars: src.char_indices(),
        quote: None,
        escaped: false,
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, c) in self.chars.by_ref() {
            if let Some(q) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == q {
                    self.quote = None;
                }
                continue;
            }
            if matches!(c, '"' | '\'' | '`') {
                self.quote = Some(c);
                continue;
            }
            return Some((idx, c));
        }
        None
    }
}

/// Byte offset of the `)` closing a call whose argument list starts at `args[0]`.
///
/// Returns `None` when the brackets are unbalanced or the call never closes.
pub(crate) fn find_call_end(args: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in code_chars(args) {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' if depth == 0 => return Some(idx),
            ')' | ']' | '}' => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    None
}

/// Split an argument list on commas at bracket depth zero.
///
/// A blank trailing segment is dropped; blank interior segments are kept.
pub(crate) fn split_top_level(args: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, c) in code_chars(args) {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&args[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    let tail = &args[start..];
    if !tail.trim().is_empty() {
        segments.push(tail);
    }
    segments
}
