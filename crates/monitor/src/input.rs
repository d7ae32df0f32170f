//! Command-line argument handling and reading-set parsing.

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use vitals_core::ReadingSet;

/// How the final report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Bedside vitals check
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "vitals-monitor")]
#[command(version, about = "Classify bedside vital readings and sound the alarm on critical values")]
pub struct Args {
    /// Print the report as JSON on stdout (alarm output moves to stderr)
    #[arg(long)]
    pub json: bool,

    /// JSON object of readings, e.g. '{"temperature": 98.6, "pulse": 70, "spo2": 95}'.
    /// Read from stdin when omitted.
    pub readings: Option<String>,
}

impl Args {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Parse the reading set from the inline argument, or from `stdin` if none.
pub fn read_readings(inline: Option<&str>, mut stdin: impl Read) -> anyhow::Result<ReadingSet> {
    let source = match inline {
        Some(json) => json.to_string(),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read readings from stdin")?;
            buf
        }
    };
    serde_json::from_str(&source).context("Readings must be a JSON object of vital name to reading")
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use vitals_core::Reading;

    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("vitals-monitor").chain(list.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_text_and_stdin() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.format(), OutputFormat::Text);
        assert_eq!(parsed.readings, None);
    }

    #[test]
    fn json_flag_and_inline_readings() {
        let parsed = args(&["--json", r#"{"pulse": 70}"#]).unwrap();
        assert_eq!(parsed.format(), OutputFormat::Json);
        assert_eq!(parsed.readings.as_deref(), Some(r#"{"pulse": 70}"#));
    }

    #[test]
    fn help_is_available() {
        assert_eq!(args(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(args(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_unknown_flag_and_extra_positional() {
        assert_eq!(
            args(&["--verbose"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(args(&["{}", "{}"]).is_err());
    }

    #[test]
    fn inline_argument_wins_over_stdin() {
        let readings = read_readings(Some(r#"{"spo2": 97}"#), "not json".as_bytes()).unwrap();
        assert_eq!(readings.0, vec![("spo2".to_string(), Reading::Bare(97.0))]);
    }

    #[test]
    fn reads_stdin_when_no_argument() {
        let readings = read_readings(None, r#"{"pulse": 70, "spo2": 95}"#.as_bytes()).unwrap();
        assert_eq!(readings.len(), 2);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = read_readings(Some("[1, 2]"), std::io::empty()).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }
}
