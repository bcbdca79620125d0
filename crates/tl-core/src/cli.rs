//! Command-line interface for templut.

use std::path::PathBuf;

use clap::Parser;

use crate::format::DEFAULT_FILE_NAME;
use crate::session::SessionConfig;

const EXAMPLES: &str = "\
Examples:
  Record until the board reaches 75 °C or 30 minutes have passed,
  writing `calib-temp-lut.ini` (Ctrl+C stops the session early and
  still writes the file):

      templut ip:192.168.2.1

  Stop once the board reaches 54 °C:

      templut auto -t 54

  Keep 5 evenly spread entries and write them to `example.ini`:

      templut auto -v 5 -t 54 -f example.ini

  Run against the deterministic simulator:

      templut sim:42 -t 40 -f sim.ini
";

/// Generate the temperature calibration lookup table.
#[derive(Parser, Debug)]
#[command(name = "templut", after_help = EXAMPLES)]
pub struct Cli {
    /// Device locator: `auto`, `ip:<host>`, `usb:<port>`, or `sim[:<seed>]`
    pub uri: String,

    /// Maximum board temperature in °C; sampling stops when reached
    #[arg(short = 't', long = "temperature", value_name = "MAX_TEMP", default_value_t = 75)]
    pub temperature: i32,

    /// Session duration in minutes
    #[arg(
        short = 'T',
        long = "timeout",
        value_name = "MIN",
        default_value_t = 30,
        allow_negative_numbers = true
    )]
    pub timeout: i64,

    /// Maximum number of entries kept in the output; <= 0 keeps all
    #[arg(
        short = 'v',
        long = "values",
        value_name = "NB_VALUES",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub values: i64,

    /// Output file path
    #[arg(short = 'f', long = "file", value_name = "PATH", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Merge with an existing table file instead of overwriting it
    #[arg(short = 'a', long = "append")]
    pub append: bool,
}

impl From<&Cli> for SessionConfig {
    fn from(cli: &Cli) -> Self {
        SessionConfig {
            max_temperature: f64::from(cli.temperature),
            timeout_minutes: cli.timeout.max(0) as u64,
            max_values: cli.values,
            output: cli.file.clone(),
            append: cli.append,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["templut", "auto"]);
        assert_eq!(cli.uri, "auto");
        assert_eq!(cli.temperature, 75);
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.values, -1);
        assert_eq!(cli.file, PathBuf::from(DEFAULT_FILE_NAME));
        assert!(!cli.append);
    }

    #[test]
    fn short_and_long_options_parse() {
        let cli = Cli::parse_from([
            "templut", "sim:9", "-t", "54", "-T", "10", "-v", "5", "-f", "example.ini", "-a",
        ]);
        assert_eq!(cli.uri, "sim:9");
        assert_eq!(cli.temperature, 54);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.values, 5);
        assert_eq!(cli.file, PathBuf::from("example.ini"));
        assert!(cli.append);

        let cli = Cli::parse_from([
            "templut",
            "auto",
            "--temperature",
            "60",
            "--timeout",
            "5",
            "--values",
            "3",
            "--file",
            "x.ini",
            "--append",
        ]);
        assert_eq!(cli.temperature, 60);
        assert!(cli.append);
    }

    #[test]
    fn negative_timeout_clamps_to_zero_minutes() {
        let cli = Cli::parse_from(["templut", "auto", "-T", "-5"]);
        let config = SessionConfig::from(&cli);
        assert_eq!(config.timeout_minutes, 0);
    }
}
