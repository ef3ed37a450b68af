//! Encoder configuration and wire-format constants

// JavaScript boilerplate emitted/recognized by the engine
pub const DOCUMENT_OPEN: &str = "document.open();";
pub const DOCUMENT_CLOSE: &str = "document.close();";
pub const DOC_WRITE_PREFIX: &str = "document.write(";
pub const VAR_KEYWORD: &str = "var";

/// Wrapper style for encoded output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Pass the text through unmodified
    #[default]
    Plain,
    /// Bare concatenated string literals
    Js,
    /// A single variable assignment built from concatenated literals
    JsVar,
    /// `document.write(...)` statements plus open/close boilerplate
    DocWrite,
}

impl OutputMode {
    /// Parse a mode name as used on the command line.
    ///
    /// Returns `None` for anything that is not a known mode; callers decide
    /// whether that means "keep the default" (see [`EncodeOptions::with_overrides`]).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "plain" => Some(OutputMode::Plain),
            "js" => Some(OutputMode::Js),
            "jsvar" => Some(OutputMode::JsVar),
            "docwrite" => Some(OutputMode::DocWrite),
            _ => None,
        }
    }

    /// The command-line name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Plain => "plain",
            OutputMode::Js => "js",
            OutputMode::JsVar => "jsvar",
            OutputMode::DocWrite => "docwrite",
        }
    }

    /// True for the passthrough mode that performs no escaping at all
    pub fn is_plain(&self) -> bool {
        matches!(self, OutputMode::Plain)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated configuration consumed by [`crate::Encoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrapper style
    pub mode: OutputMode,
    /// Variable name, used only in `jsvar` mode
    pub var_name: String,
    /// Treat the whole input as a single literal instead of splitting on `\n`
    pub one_line: bool,
    /// Delimit literals with `'` instead of `"`
    pub single_quotes: bool,
    /// Emit the `var` keyword in `jsvar` mode
    pub var_keyword: bool,
    /// Emit `document.open();` in `docwrite` mode
    pub open: bool,
    /// Emit `document.close();` in `docwrite` mode
    pub close: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Plain,
            var_name: "temp".to_string(),
            one_line: false,
            single_quotes: false,
            var_keyword: true,
            open: true,
            close: true,
        }
    }
}

impl EncodeOptions {
    /// Set the output mode
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the jsvar variable name
    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = name.into();
        self
    }

    /// Treat the whole input as one literal
    pub fn with_one_line(mut self, one_line: bool) -> Self {
        self.one_line = one_line;
        self
    }

    /// Delimit literals with single quotes
    pub fn with_single_quotes(mut self, single_quotes: bool) -> Self {
        self.single_quotes = single_quotes;
        self
    }

    /// Apply a set of loose overrides, field by field.
    ///
    /// Each field is either accepted or silently ignored; no combination of
    /// overrides is an error:
    /// - `mode` is accepted only if it names a known [`OutputMode`]
    /// - `var_name` has embedded quote characters stripped and is accepted
    ///   only if something is left afterwards
    /// - booleans are accepted as given
    pub fn with_overrides(mut self, overrides: &OptionOverrides) -> Self {
        if let Some(mode) = overrides.mode.as_deref() {
            if let Some(parsed) = OutputMode::parse(mode) {
                self.mode = parsed;
            }
        }
        if let Some(name) = overrides.var_name.as_deref() {
            let name: String = name.chars().filter(|c| *c != '\'' && *c != '"').collect();
            if !name.is_empty() {
                self.var_name = name;
            }
        }
        if let Some(one_line) = overrides.one_line {
            self.one_line = one_line;
        }
        if let Some(single_quotes) = overrides.single_quotes {
            self.single_quotes = single_quotes;
        }
        if let Some(var_keyword) = overrides.var_keyword {
            self.var_keyword = var_keyword;
        }
        if let Some(open) = overrides.open {
            self.open = open;
        }
        if let Some(close) = overrides.close {
            self.close = close;
        }
        self
    }
}

/// Partial, unvalidated option set as supplied by callers (the CLI hands the
/// raw `-o` string through here, which is why `mode` is a string and not an
/// [`OutputMode`]: unknown names must be droppable, not rejected).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    /// Output mode name (`plain`, `js`, `jsvar`, `docwrite`)
    pub mode: Option<String>,
    /// jsvar variable name
    pub var_name: Option<String>,
    /// Force single-line output
    pub one_line: Option<bool>,
    /// Use single-quote delimiters
    pub single_quotes: Option<bool>,
    /// Emit the `var` keyword
    pub var_keyword: Option<bool>,
    /// Emit `document.open();`
    pub open: Option<bool>,
    /// Emit `document.close();`
    pub close: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!(OutputMode::parse("plain"), Some(OutputMode::Plain));
        assert_eq!(OutputMode::parse("js"), Some(OutputMode::Js));
        assert_eq!(OutputMode::parse("jsvar"), Some(OutputMode::JsVar));
        assert_eq!(OutputMode::parse("docwrite"), Some(OutputMode::DocWrite));
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert_eq!(OutputMode::parse("bogus"), None);
        assert_eq!(OutputMode::parse("DOCWRITE"), None);
        assert_eq!(OutputMode::parse(""), None);
    }

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert_eq!(options.mode, OutputMode::Plain);
        assert_eq!(options.var_name, "temp");
        assert!(!options.one_line);
        assert!(!options.single_quotes);
        assert!(options.var_keyword);
        assert!(options.open);
        assert!(options.close);
    }

    #[test]
    fn test_overrides_accept_valid_fields() {
        let overrides = OptionOverrides {
            mode: Some("jsvar".to_string()),
            var_name: Some("content".to_string()),
            one_line: Some(true),
            single_quotes: Some(true),
            var_keyword: Some(false),
            open: Some(false),
            close: Some(false),
        };

        let options = EncodeOptions::default().with_overrides(&overrides);
        assert_eq!(options.mode, OutputMode::JsVar);
        assert_eq!(options.var_name, "content");
        assert!(options.one_line);
        assert!(options.single_quotes);
        assert!(!options.var_keyword);
        assert!(!options.open);
        assert!(!options.close);
    }

    #[test]
    fn test_overrides_drop_unknown_mode() {
        let overrides = OptionOverrides {
            mode: Some("bogus".to_string()),
            ..Default::default()
        };

        let options = EncodeOptions::default().with_overrides(&overrides);
        assert_eq!(options.mode, OutputMode::Plain);
    }

    #[test]
    fn test_overrides_strip_quotes_from_var_name() {
        let overrides = OptionOverrides {
            var_name: Some("\"my'Var\"".to_string()),
            ..Default::default()
        };

        let options = EncodeOptions::default().with_overrides(&overrides);
        assert_eq!(options.var_name, "myVar");
    }

    #[test]
    fn test_overrides_drop_empty_var_name() {
        let overrides = OptionOverrides {
            var_name: Some("'\"".to_string()),
            ..Default::default()
        };

        let options = EncodeOptions::default().with_overrides(&overrides);
        assert_eq!(options.var_name, "temp");
    }

    #[test]
    fn test_overrides_empty_record_keeps_defaults() {
        let options = EncodeOptions::default().with_overrides(&OptionOverrides::default());
        assert_eq!(options, EncodeOptions::default());
    }
}
