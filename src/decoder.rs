//! Best-effort decoder for previously encoded JavaScript forms

use crate::options::{DOCUMENT_CLOSE, DOCUMENT_OPEN, DOC_WRITE_PREFIX, VAR_KEYWORD};

/// Error type for a failed decode attempt.
///
/// Only surfaced by [`Decoder::try_decode`]; [`Decoder::decode`] converts any
/// of these into "return the input unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A candidate line did not reduce to a parseable string literal
    InvalidLiteral {
        /// 1-based line number within the unwrapped input
        line: usize,
        /// Reason reported by the literal parser
        message: String,
    },
    /// Nothing parseable remained after stripping the wrapper boilerplate
    NoContent,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidLiteral { line, message } => {
                write!(
                    f,
                    "line {} is not a recognized JavaScript string form: {}",
                    line, message
                )
            }
            DecodeError::NoContent => {
                write!(f, "no string literals found in input")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Recovers original text from an encoded form
pub struct Decoder {
    /// Verbosity level for fallback warnings
    verbose: u8,
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self { verbose: 0 }
    }

    /// Set verbosity level (0-3)
    pub fn with_verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Decode an encoded form back to plain text.
    ///
    /// All-or-nothing: if any line fails to parse, the input is returned
    /// unchanged. This never fails; callers that need to know why a decode
    /// fell back should use [`Decoder::try_decode`].
    pub fn decode(&self, input: &str) -> String {
        match self.try_decode(input) {
            Ok(text) => text,
            Err(err) => {
                if self.verbose > 0 {
                    eprintln!("Warning: input left unchanged: {}", err);
                }
                input.to_string()
            }
        }
    }

    /// Decode an encoded form, reporting why it is unrecognizable instead of
    /// falling back.
    pub fn try_decode(&self, input: &str) -> Result<String, DecodeError> {
        let mut rest = input.trim();

        if let Some(after) = rest.strip_prefix(DOCUMENT_OPEN) {
            rest = after;
        }
        if let Some(before) = rest.strip_suffix(DOCUMENT_CLOSE) {
            rest = before;
        }

        let mut segments = Vec::new();
        for (index, candidate) in rest.split('\n').enumerate() {
            let candidate = candidate.trim();
            // Blank lines are wrapper separators, never content: an empty
            // text line encodes as "\n", not as an empty encoded line.
            if candidate.is_empty() {
                continue;
            }
            let segment = clean_line(candidate).map_err(|err| DecodeError::InvalidLiteral {
                line: index + 1,
                message: err.to_string(),
            })?;
            segments.push(segment);
        }

        if segments.is_empty() {
            return Err(DecodeError::NoContent);
        }

        Ok(join_segments(&segments))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce one encoded line to the text segment it carries.
///
/// Strips, in order: a leading `var` keyword, a leading `<identifier> = `
/// assignment, a trailing ` +` continuation, a trailing `;`, a surrounding
/// `document.write( ... )` call, and outer `'...'` delimiters (converted to
/// `"..."` without touching the interior). Whatever remains must be a valid
/// JSON string literal.
fn clean_line(line: &str) -> Result<String, serde_json::Error> {
    let mut rest = line.trim();

    if let Some(after) = rest.strip_prefix(VAR_KEYWORD) {
        if after.starts_with(char::is_whitespace) {
            rest = after.trim_start();
        }
    }

    rest = strip_assignment(rest);

    rest = rest.trim_end();
    if let Some(before) = rest.strip_suffix('+') {
        rest = before.trim_end();
    }
    if let Some(before) = rest.strip_suffix(';') {
        rest = before.trim_end();
    }

    if rest.starts_with(DOC_WRITE_PREFIX) && rest.ends_with(')') {
        rest = rest[DOC_WRITE_PREFIX.len()..rest.len() - 1].trim();
    }

    let rewrapped;
    let literal = if rest.len() >= 2 && rest.starts_with('\'') && rest.ends_with('\'') {
        rewrapped = format!("\"{}\"", &rest[1..rest.len() - 1]);
        &rewrapped
    } else {
        rest
    };

    serde_json::from_str::<String>(literal)
}

/// Strip a leading `<identifier> = ` assignment form.
///
/// The identifier region is the span before the first quote character; it
/// must contain an `=` with at least one character in front of it. Covers the
/// non-`var` continuation form (`temp = "..."`).
fn strip_assignment(line: &str) -> &str {
    let quote = line
        .find(|c| c == '\'' || c == '"')
        .unwrap_or(line.len());
    let prefix = &line[..quote];
    match prefix.rfind('=') {
        Some(eq) if eq > 0 => line[eq + 1..].trim_start(),
        _ => line,
    }
}

/// Join recovered segments back into the original text.
///
/// Segments produced by the encoder already end in the newline carried inside
/// their literal; only segments without one (hand-written concatenations) get
/// a separator inserted.
fn join_segments(segments: &[String]) -> String {
    let mut result = String::new();
    for (i, segment) in segments.iter().enumerate() {
        result.push_str(segment);
        if i + 1 < segments.len() && !segment.ends_with('\n') {
            result.push('\n');
        }
    }
    result
}
