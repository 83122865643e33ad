use crate::config::OperatingFlags;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the replay tool
#[derive(Parser, Debug)]
#[command(name = "banking-rules")]
#[command(
    about = "Replay transaction requests through the banking rules engine",
    long_about = None
)]
pub struct CliArgs {
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    #[arg(
        long = "system-locked",
        help = "Hold non-urgent transfers as PENDING"
    )]
    pub system_locked: bool,

    #[arg(
        long = "compliance-audit",
        help = "Freeze high-risk accounts instead of suspending them"
    )]
    pub compliance_audit: bool,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log filter used when RUST_LOG is not set"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Operating flags selected on the command line
    pub fn operating_flags(&self) -> OperatingFlags {
        OperatingFlags::new()
            .with_system_locked(self.system_locked)
            .with_compliance_audit_mode(self.compliance_audit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["program", "input.csv"]).unwrap();

        assert_eq!(args.input_file, PathBuf::from("input.csv"));
        assert_eq!(args.log_level, "info");
        assert_eq!(args.operating_flags(), OperatingFlags::default());
    }

    #[rstest]
    #[case::locked(&["program", "--system-locked", "in.csv"], true, false)]
    #[case::audit(&["program", "--compliance-audit", "in.csv"], false, true)]
    #[case::both(&["program", "in.csv", "--system-locked", "--compliance-audit"], true, true)]
    fn test_flag_parsing(
        #[case] args: &[&str],
        #[case] system_locked: bool,
        #[case] compliance_audit_mode: bool,
    ) {
        let flags = CliArgs::try_parse_from(args).unwrap().operating_flags();

        assert_eq!(flags.system_locked, system_locked);
        assert_eq!(flags.compliance_audit_mode, compliance_audit_mode);
    }

    #[test]
    fn test_log_level_override() {
        let args =
            CliArgs::try_parse_from(["program", "--log-level", "debug", "in.csv"]).unwrap();
        assert_eq!(args.log_level, "debug");
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::unknown_flag(&["program", "--verbose", "in.csv"])]
    fn test_invalid_arguments(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
