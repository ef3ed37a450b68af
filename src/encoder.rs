//! Text to embeddable-JavaScript encoder

use crate::options::{
    EncodeOptions, OptionOverrides, OutputMode, DOCUMENT_CLOSE, DOCUMENT_OPEN, DOC_WRITE_PREFIX,
    VAR_KEYWORD,
};
use anyhow::Result;

/// Encodes text into a JavaScript string-literal form
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with the given options
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Create an encoder from a loose override record (unknown or malformed
    /// fields silently keep their defaults)
    pub fn from_overrides(overrides: &OptionOverrides) -> Self {
        Self::new(EncodeOptions::default().with_overrides(overrides))
    }

    /// The options this encoder was built with
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode text according to the configured output mode.
    ///
    /// This is a pure function of the input and the options; it has no
    /// failure cases. `plain` mode returns the text unchanged.
    pub fn encode(&self, text: &str) -> String {
        let opts = &self.options;

        if opts.mode.is_plain() {
            return text.to_string();
        }

        let mut result = String::new();

        if opts.mode == OutputMode::DocWrite && opts.open {
            result.push_str(DOCUMENT_OPEN);
            if !opts.one_line {
                result.push('\n');
            }
        }

        if opts.mode == OutputMode::JsVar {
            if opts.var_keyword {
                result.push_str(VAR_KEYWORD);
                result.push(' ');
            }
            result.push_str(&opts.var_name);
            result.push_str(" = ");
        }

        let lines: Vec<&str> = if opts.one_line {
            vec![text]
        } else {
            text.split('\n').collect()
        };

        for (i, raw) in lines.iter().enumerate() {
            let is_last = i + 1 == lines.len();

            // Every line except the last carries its newline inside the
            // literal; the decoder's join relies on these markers.
            let mut piece = (*raw).to_string();
            if !is_last {
                piece.push('\n');
            }

            let mut line = stringify(&piece, opts.single_quotes);
            if opts.mode == OutputMode::DocWrite {
                line = format!("{}{})", DOC_WRITE_PREFIX, line);
            }

            let continues = !is_last
                && !opts.one_line
                && matches!(opts.mode, OutputMode::Js | OutputMode::JsVar);
            result.push_str(&line);
            result.push_str(if continues { " +" } else { ";" });
            if !opts.one_line {
                result.push('\n');
            }
        }

        if opts.mode == OutputMode::DocWrite && opts.close {
            if !opts.one_line {
                result.push('\n');
            }
            result.push_str(DOCUMENT_CLOSE);
        }

        result
    }

    /// Encode text directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, text: &str, mut writer: W) -> Result<()> {
        writer.write_all(self.encode(text).as_bytes())?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

/// JSON-style stringify with optional single-quote delimiters.
///
/// Under `single_quotes` only the outer delimiters are swapped; the interior
/// keeps its JSON escaping, so an embedded `'` stays unescaped. The decoder's
/// delimiter conversion mirrors this asymmetry.
pub(crate) fn stringify(text: &str, single_quotes: bool) -> String {
    let quoted =
        serde_json::to_string(text).expect("JSON-encoding a plain string cannot fail");
    if single_quotes {
        format!("'{}'", &quoted[1..quoted.len() - 1])
    } else {
        quoted
    }
}
