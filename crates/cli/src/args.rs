//! Command-line options and usage text.

use std::ffi::OsString;
use std::io::{self, Write};

/// How query results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub format: OutputFormat,
    pub show_help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let _argv0 = iter.next();

    let mut options = CliOptions::default();

    while let Some(argument) = iter.next() {
        let arg = argument.to_string_lossy();
        let arg_str = arg.as_ref();

        match arg_str {
            "-h" | "--help" => {
                options.show_help = true;
            }
            "--format" => {
                let next = iter
                    .next()
                    .ok_or_else(|| String::from("missing value for `--format`"))?;
                options.format = parse_format(next.to_string_lossy().as_ref())?;
            }
            _ => {
                if let Some(value) = arg_str.strip_prefix("--format=") {
                    options.format = parse_format(value)?;
                    continue;
                }

                return Err(format!("unknown option `{arg_str}`"));
            }
        }
    }

    Ok(options)
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    match value {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "invalid value for `--format`: `{value}` (expected `text` or `json`)"
        )),
    }
}

pub fn write_usage<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "Usage: stockbook [--format text|json]\n\
         \n\
         Interactive inventory manager. State lives in memory for one run.\n\
         \n\
         Options:\n\
         \n\
         --format text|json   render query results as plain text (default) or JSON\n\
         -h, --help           print this help and exit\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Result<CliOptions, String> {
        parse_args(args.iter().map(OsString::from))
    }

    #[test]
    fn defaults_to_text_output() {
        let options = parse_from(&["stockbook"]).unwrap();
        assert_eq!(options.format, OutputFormat::Text);
        assert!(!options.show_help);
    }

    #[test]
    fn parses_format_with_separate_value() {
        let options = parse_from(&["stockbook", "--format", "json"]).unwrap();
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn parses_format_with_equals_value() {
        let options = parse_from(&["stockbook", "--format=json"]).unwrap();
        assert_eq!(options.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_text_format_is_accepted() {
        let options = parse_from(&["stockbook", "--format=text"]).unwrap();
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn help_flags_are_recognized() {
        assert!(parse_from(&["stockbook", "-h"]).unwrap().show_help);
        assert!(parse_from(&["stockbook", "--help"]).unwrap().show_help);
    }

    #[test]
    fn rejects_unknown_option() {
        let message = parse_from(&["stockbook", "--nope"]).unwrap_err();
        assert!(message.contains("unknown option"));
    }

    #[test]
    fn rejects_missing_format_value() {
        let message = parse_from(&["stockbook", "--format"]).unwrap_err();
        assert!(message.contains("missing value"));
    }

    #[test]
    fn rejects_invalid_format_value() {
        let message = parse_from(&["stockbook", "--format=xml"]).unwrap_err();
        assert!(message.contains("invalid value"));
    }
}
