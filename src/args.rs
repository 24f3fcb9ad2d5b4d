use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "atnec";

// CLI root definition. Exactly two positionals: the source env file and the quoted output.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Env file to read
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,
    /// Destination file, truncated if it already exists
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,
}

impl Cli {
    // Parse raw process arguments, program name first. Returns None unless exactly two follow.
    // Both values are taken as paths verbatim, even `--` or a leading `-`.
    pub fn from_raw_args<I, T>(raw: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        if raw.len() != 3 {
            return None;
        }
        raw.insert(1, OsString::from("--"));
        Self::try_parse_from(raw).ok()
    }
}

// Usage line printed on stdout for any argument-count mistake.
pub fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} <input-file> <output-file>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_positionals() {
        let cli = Cli::from_raw_args([PROGRAM_NAME, "in.env", "out.env"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.env"));
        assert_eq!(cli.output, PathBuf::from("out.env"));
    }

    #[test]
    fn hyphen_leading_values_are_paths() {
        let cli = Cli::from_raw_args([PROGRAM_NAME, "-in.env", "--out.env"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("-in.env"));
        assert_eq!(cli.output, PathBuf::from("--out.env"));

        let cli = Cli::from_raw_args([PROGRAM_NAME, "--", "out.env"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("--"));
        assert_eq!(cli.output, PathBuf::from("out.env"));
    }

    #[test]
    fn rejects_wrong_argument_counts() {
        assert!(Cli::from_raw_args([PROGRAM_NAME]).is_none());
        assert!(Cli::from_raw_args([PROGRAM_NAME, "in.env"]).is_none());
        assert!(Cli::from_raw_args([PROGRAM_NAME, "--help"]).is_none());
        assert!(Cli::from_raw_args([PROGRAM_NAME, "-V"]).is_none());
        assert!(Cli::from_raw_args([PROGRAM_NAME, "in.env", "out.env", "extra.env"]).is_none());
        assert!(Cli::from_raw_args([PROGRAM_NAME, "--", "in.env", "out.env"]).is_none());
    }

    #[test]
    fn usage_names_the_program() {
        assert_eq!(usage(), "Usage: atnec <input-file> <output-file>");
    }
}
