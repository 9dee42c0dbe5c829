//! Command Line Arguments

use clap::Parser;

use crate::constants::BASE_URL_ENV;

/// Request one power consumption forecast and chart it
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "power-forecast")]
#[command(about = "Request a multi-day power consumption forecast and chart the result")]
#[command(version)]
pub struct CliArgs {
    /// Forecast horizon in days (1-30, default 7)
    #[arg(short, long)]
    pub days: Option<String>,

    /// Start time, YYYY-MM-DDTHH:MM (default: now)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Prediction service address
    ///
    /// Overrides the `base_url` of settings.toml.
    #[arg(long, env = BASE_URL_ENV)]
    pub api_url: Option<String>,

    /// Print the series as JSON instead of a text chart
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("power-forecast").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&[]).expect("args");
        assert_eq!(args.days, None);
        assert_eq!(args.start, None);
        assert!(!args.json);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "--days",
            "14",
            "--start=2024-01-01T00:00",
            "--api-url",
            "http://forecast:5000",
            "--json",
        ])
        .expect("args");

        assert_eq!(args.days.as_deref(), Some("14"));
        assert_eq!(args.start.as_deref(), Some("2024-01-01T00:00"));
        assert_eq!(args.api_url.as_deref(), Some("http://forecast:5000"));
        assert!(args.json);
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["-d", "3", "-s", "2024-06-01T12:00"]).expect("args");
        assert_eq!(args.days.as_deref(), Some("3"));
        assert_eq!(args.start.as_deref(), Some("2024-06-01T12:00"));
    }

    #[test]
    fn test_horizon_is_validated_later() {
        // Out-of-range values reach the controller, which reports them as a
        // failed request instead of a usage error.
        let args = parse(&["--days", "0"]).expect("args");
        assert_eq!(args.days.as_deref(), Some("0"));
    }

    #[test]
    fn test_missing_value() {
        assert!(parse(&["--days"]).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["--verbose"]).expect_err("unknown flag");
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_generated() {
        let err = parse(&["--help"]).expect_err("help");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--api-url"));
    }
}
