//! # tojs
//!
//! Convert plain text into a JavaScript-embeddable string literal form, and
//! back again.
//!
//! Four output modes are supported:
//!
//! - `plain` — the text is passed through unmodified
//! - `js` — bare concatenated string literals:
//!
//! ```text
//! "first line\n" +
//! "second line";
//! ```
//!
//! - `jsvar` — a single variable assignment:
//!
//! ```text
//! var temp = "first line\n" +
//! "second line";
//! ```
//!
//! - `docwrite` — `document.write(...)` statements plus open/close boilerplate:
//!
//! ```text
//! document.open();
//! document.write("first line\n");
//! document.write("second line");
//!
//! document.close();
//! ```
//!
//! Every line except the last carries its newline inside the literal, so a
//! decoded form reproduces the original line breaks exactly.
//!
//! ## Decoding
//!
//! Decoding is a best-effort line-oriented heuristic, not a JavaScript
//! parser. It strips the known wrapper boilerplate, reduces each line to its
//! string literal, and parses it. If any line fails, the whole input is
//! returned unchanged — decoding never errors.
//!
//! ## Example
//!
//! ```
//! use tojs::{EncodeOptions, Encoder, Decoder, OutputMode};
//!
//! let options = EncodeOptions::default().with_mode(OutputMode::DocWrite);
//! let js = Encoder::new(options).encode("hello\nworld");
//! assert_eq!(
//!     js,
//!     "document.open();\ndocument.write(\"hello\\n\");\ndocument.write(\"world\");\n\ndocument.close();"
//! );
//!
//! assert_eq!(Decoder::new().decode(&js), "hello\nworld");
//! ```

pub mod decoder;
pub mod encoder;
pub mod options;

pub use decoder::{DecodeError, Decoder};
pub use encoder::Encoder;
pub use options::{EncodeOptions, OptionOverrides, OutputMode};

/// Encode `text` with loose overrides merged onto the engine defaults.
///
/// Unknown or malformed override fields are silently dropped; this function
/// has no failure cases.
pub fn encode(text: &str, overrides: &OptionOverrides) -> String {
    Encoder::from_overrides(overrides).encode(text)
}

/// Best-effort inverse of [`encode`].
///
/// Returns the input unchanged when it is not a recognized encoded form.
pub fn decode(text: &str) -> String {
    Decoder::new().decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_convenience() {
        let overrides = OptionOverrides {
            mode: Some("js".to_string()),
            ..Default::default()
        };
        assert_eq!(encode("hi", &overrides), "\"hi\";\n");
    }

    #[test]
    fn test_decode_convenience() {
        assert_eq!(decode("\"hi\";"), "hi");
    }

    #[test]
    fn test_default_mode_is_passthrough() {
        assert_eq!(encode("anything", &OptionOverrides::default()), "anything");
    }
}
