//! # Name Resolution Diagnostic
//!
//! Why the closure version does not compile, as data.
//!
//! `let ackermann = |m, n| ... ackermann(m - 1, 1) ...` fails because the
//! binding is introduced only after the closure expression has been
//! resolved; inside the body there is nothing called `ackermann`. The
//! compiler reports E0425. This module locates such a self-call in a source
//! listing and renders the diagnostic in the compiler's layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code for an unresolved name.
pub const UNRESOLVED_NAME: &str = "E0425";

/// The closure-based attempt that motivates both workarounds.
pub const CLOSURE_SELF_CALL_SOURCE: &str = "\
fn main() {
    let ackermann = |m: u64, n: u64| -> u64 {
        if m == 0 {
            n + 1
        } else if n == 0 {
            ackermann(m - 1, 1)
        } else {
            ackermann(m - 1, ackermann(m, n - 1))
        }
    };
    println!(\"{}\", ackermann(3, 4));
}
";

/// File name the canonical listing is reported under.
pub const CLOSURE_SELF_CALL_FILE: &str = "src/main.rs";

/// A single unresolved-name error pinned to a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResolutionDiagnostic {
    /// Compiler error code, e.g. `E0425`.
    pub code: String,
    /// The unresolved identifier.
    pub name: String,
    /// File the error is reported in.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the identifier's first character.
    pub column: usize,
    /// The full text of the offending line.
    pub source_line: String,
}

impl NameResolutionDiagnostic {
    /// Find the first call `name(` in `source` that is not the binding itself.
    ///
    /// On the line introducing the binding (`let name` or `let mut name`)
    /// only the text after its `=` is searched, so a one-line closure calling
    /// itself is found. Calls embedded in longer identifiers are ignored.
    /// Returns `None` if `name` is never called.
    ///
    /// `column` counts characters, not bytes, as the compiler does.
    #[must_use]
    pub fn locate(file: &str, source: &str, name: &str) -> Option<Self> {
        let call = format!("{name}(");

        source.lines().enumerate().find_map(|(index, text)| {
            let from = binding_end(text, name).unwrap_or(0);
            let at = find_call(text, from, &call)?;
            Some(Self {
                code: UNRESOLVED_NAME.to_string(),
                name: name.to_string(),
                file: file.to_string(),
                line: index + 1,
                column: text[..at].chars().count() + 1,
                source_line: text.to_string(),
            })
        })
    }

    /// The diagnostic for [`CLOSURE_SELF_CALL_SOURCE`].
    #[must_use]
    pub fn closure_self_call() -> Self {
        Self::locate(CLOSURE_SELF_CALL_FILE, CLOSURE_SELF_CALL_SOURCE, "ackermann")
            .unwrap_or_else(|| Self {
                code: UNRESOLVED_NAME.to_string(),
                name: "ackermann".to_string(),
                file: CLOSURE_SELF_CALL_FILE.to_string(),
                line: 1,
                column: 1,
                source_line: String::new(),
            })
    }

    /// Headline message, without location.
    #[must_use]
    pub fn message(&self) -> String {
        format!("cannot find function `{}` in this scope", self.name)
    }

    /// Render the transcript the compiler prints for this error.
    #[must_use]
    pub fn render(&self) -> String {
        let number = self.line.to_string();
        let pad = " ".repeat(number.len());
        let indent = " ".repeat(self.column.saturating_sub(1));
        let carets = "^".repeat(self.name.chars().count().max(1));

        let mut out = String::new();
        out.push_str(&format!("error[{}]: {}\n", self.code, self.message()));
        out.push_str(&format!(
            "{pad}--> {}:{}:{}\n",
            self.file, self.line, self.column
        ));
        out.push_str(&format!("{pad} |\n"));
        out.push_str(&format!("{number} | {}\n", self.source_line));
        out.push_str(&format!(
            "{pad} | {indent}{carets} not found in this scope\n"
        ));
        out.push('\n');
        out.push_str("error: aborting due to 1 previous error\n");
        out.push('\n');
        out.push_str(&format!(
            "For more information about this error, try `rustc --explain {}`.\n",
            self.code
        ));
        out
    }
}

impl fmt::Display for NameResolutionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether the identifier-like text at byte `at` is not preceded by more of
/// an identifier.
fn starts_word(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().is_none_or(|c| !is_ident_char(c))
}

/// Byte offset just past the `=` of a `let name` binding on this line.
///
/// A binding with no `=` on the line (`let name;`) leaves nothing to search.
fn binding_end(text: &str, name: &str) -> Option<usize> {
    ["let ", "let mut "].into_iter().find_map(|keyword| {
        let pattern = format!("{keyword}{name}");
        let end = text
            .match_indices(&pattern)
            .map(|(at, _)| at + pattern.len())
            .find(|&end| {
                let at = end - pattern.len();
                starts_word(text, at) && !text[end..].starts_with(is_ident_char)
            })?;
        Some(text[end..].find('=').map_or(text.len(), |eq| end + eq + 1))
    })
}

/// Byte offset of the first whole-identifier `call` at or after `from`.
fn find_call(text: &str, from: usize, call: &str) -> Option<usize> {
    text[from..]
        .match_indices(call)
        .map(|(at, _)| from + at)
        .find(|&at| starts_word(text, at))
}
