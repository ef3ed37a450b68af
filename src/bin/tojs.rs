//! tojs CLI
//!
//! Convert files, directories, or standard input to embeddable JavaScript
//! string literals (or back).

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tojs::options::DOCUMENT_CLOSE;
use tojs::{Decoder, EncodeOptions, Encoder, OptionOverrides, OutputMode};

const EXAMPLES: &str = "\
Examples:
  $ tojs one.txt two.txt three.txt
  $ tojs -o docwrite file.html > file.html.js
  $ tojs -i docwrite -o plain file.html.js > file.html
  $ tojs -o jsvar --oneline --name myVariable file.txt
  $ echo -e \"one\\ntwo\\nthree\" | tojs
";

#[derive(Parser, Debug)]
#[command(name = "tojs")]
#[command(version)]
#[command(about = "Convert text to embeddable JavaScript string literals and back")]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Files and directories to convert; reads stdin when omitted
    files: Vec<PathBuf>,

    /// The type of input [plain|js|jsvar|docwrite]
    #[arg(short, long, default_value = "plain")]
    input: String,

    /// The type of output [plain|js|jsvar|docwrite]
    #[arg(short, long, default_value = "docwrite")]
    output: String,

    /// If output is "jsvar", this is the variable name
    #[arg(short, long, default_value = "temp")]
    name: String,

    /// Force output to be on one line only
    #[arg(long)]
    oneline: bool,

    /// Use single-quotes instead of double-quotes for output
    #[arg(long)]
    single_quotes: bool,

    /// var keyword will not be included in output
    #[arg(long = "no-var", action = clap::ArgAction::SetFalse)]
    var_keyword: bool,

    /// document.open() will not be included in output
    #[arg(long = "no-open", action = clap::ArgAction::SetFalse)]
    open: bool,

    /// document.close() will not be included in output
    #[arg(long = "no-close", action = clap::ArgAction::SetFalse)]
    close: bool,

    /// Report decode fallbacks on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Streams chunks of input through the engine, tracking the docwrite
/// open/close bookkeeping across multiple files.
struct Converter {
    options: EncodeOptions,
    decoder: Option<Decoder>,
    append_close: bool,
    has_written: bool,
}

impl Converter {
    fn from_cli(cli: &Cli) -> Self {
        let overrides = OptionOverrides {
            mode: Some(cli.output.clone()),
            var_name: Some(cli.name.clone()),
            one_line: Some(cli.oneline),
            single_quotes: Some(cli.single_quotes),
            var_keyword: Some(cli.var_keyword),
            open: Some(cli.open),
            // The trailing document.close() is emitted once after the last
            // chunk, never per chunk.
            close: Some(false),
        };
        let options = EncodeOptions::default().with_overrides(&overrides);

        let decoder = if cli.input != "plain" {
            Some(Decoder::new().with_verbose(u8::from(cli.verbose)))
        } else {
            None
        };

        Self {
            options,
            decoder,
            append_close: cli.close,
            has_written: false,
        }
    }

    fn write_chunk<W: Write>(&mut self, data: &str, out: &mut W) -> Result<()> {
        let text = match &self.decoder {
            Some(decoder) => decoder.decode(data),
            None => data.to_string(),
        };

        let encoded = Encoder::new(self.options.clone()).encode(&text);
        out.write_all(encoded.as_bytes())?;

        // document.open() belongs before the first chunk only
        self.options.open = false;
        self.has_written = true;
        Ok(())
    }

    fn finish<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.options.mode == OutputMode::DocWrite && self.append_close && self.has_written {
            out.write_all(DOCUMENT_CLOSE.as_bytes())?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let mut converter = Converter::from_cli(cli);

    if cli.files.is_empty() {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        if !buffer.is_empty() {
            let data = String::from_utf8_lossy(&buffer);
            converter.write_chunk(&data, out)?;
        }
    } else {
        for file in &cli.files {
            process_path(&mut converter, file, out)?;
        }
    }

    converter.finish(out)
}

fn process_path<W: Write>(converter: &mut Converter, path: &Path, out: &mut W) -> Result<()> {
    if !path.exists() {
        // A missing path is content, not an error (the message is encoded
        // like any other input).
        let message = format!("tojs: {}: No such file or directory.", path.display());
        return converter.write_chunk(&message, out);
    }

    if path.is_dir() {
        let entries = walkdir::WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .collect::<Vec<_>>();

        for entry in entries {
            process_file(converter, entry.path(), out)?;
        }
        return Ok(());
    }

    process_file(converter, path, out)
}

fn process_file<W: Write>(converter: &mut Converter, path: &Path, out: &mut W) -> Result<()> {
    let raw =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let data = String::from_utf8_lossy(&raw);
    converter.write_chunk(&data, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(files: Vec<PathBuf>) -> Cli {
        Cli {
            files,
            input: "plain".to_string(),
            output: "docwrite".to_string(),
            name: "temp".to_string(),
            oneline: false,
            single_quotes: false,
            var_keyword: true,
            open: true,
            close: true,
            verbose: false,
        }
    }

    fn run_to_string(cli: &Cli) -> String {
        let mut out = Vec::new();
        run(cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_docwrite_open_and_close_span_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.txt", "first");
        let b = temp_file(&dir, "b.txt", "second");

        let output = run_to_string(&cli(vec![a, b]));
        assert_eq!(
            output,
            "document.open();\ndocument.write(\"first\");\ndocument.write(\"second\");\ndocument.close();"
        );
    }

    #[test]
    fn test_no_close_flag_suppresses_trailer() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.txt", "first");

        let mut cli = cli(vec![a]);
        cli.close = false;
        let output = run_to_string(&cli);
        assert!(!output.contains("document.close();"));
    }

    #[test]
    fn test_missing_path_is_encoded_as_content() {
        let output = run_to_string(&cli(vec![PathBuf::from("/no/such/file.txt")]));
        assert!(output
            .contains("document.write(\"tojs: /no/such/file.txt: No such file or directory.\");"));
    }

    #[test]
    fn test_directory_is_walked_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        temp_file(&dir, "a.txt", "alpha");
        temp_file(&dir, "b.txt", "beta");

        let output = run_to_string(&cli(vec![dir.path().to_path_buf()]));
        let alpha = output.find("alpha").unwrap();
        let beta = output.find("beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_jsvar_output_uses_name() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.txt", "hi");

        let mut cli = cli(vec![a]);
        cli.output = "jsvar".to_string();
        cli.name = "page".to_string();
        let output = run_to_string(&cli);
        assert_eq!(output, "var page = \"hi\";\n");
    }

    #[test]
    fn test_non_plain_input_is_decoded_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.js", "var temp = \"hi\\nyo\";");

        let mut cli = cli(vec![a]);
        cli.input = "jsvar".to_string();
        cli.output = "plain".to_string();
        let output = run_to_string(&cli);
        assert_eq!(output, "hi\nyo");
    }

    #[test]
    fn test_unknown_output_type_degrades_to_plain() {
        let dir = tempfile::tempdir().unwrap();
        let a = temp_file(&dir, "a.txt", "as-is");

        let mut cli = cli(vec![a]);
        cli.output = "bogus".to_string();
        let output = run_to_string(&cli);
        assert_eq!(output, "as-is");
    }
}
