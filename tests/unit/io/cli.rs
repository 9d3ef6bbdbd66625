//! Tests for command-line parsing and session processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;
    use quadcode::CodecError;
    use quadcode::encoding::Strategy;
    use quadcode::io::cli::{Cli, Session, Source};
    use quadcode::io::configuration::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run(args: &[&str], input: &str) -> (Result<(), CodecError>, String) {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        let result = Session::new(cli).run_with(Cursor::new(input.to_string()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    // Tests CLI parsing with no source selected
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["quadcode"]);

        assert_eq!(cli.source(), None);
        assert_eq!(cli.max_width, DEFAULT_MAX_WIDTH);
        assert_eq!(cli.max_height, DEFAULT_MAX_HEIGHT);
        assert_eq!(cli.strategy, Strategy::Scan);
        assert!(!cli.quiet);
    }

    // Tests short and long source flags
    // Verified by swapping the manual and file short flags
    #[test]
    fn test_cli_source_flags() {
        assert_eq!(Cli::parse_from(["quadcode", "-m"]).source(), Some(Source::Manual));
        assert_eq!(
            Cli::parse_from(["quadcode", "--manual"]).source(),
            Some(Source::Manual)
        );
        assert_eq!(
            Cli::parse_from(["quadcode", "-f", "image.pbm"]).source(),
            Some(Source::File(PathBuf::from("image.pbm")))
        );
        assert_eq!(
            Cli::parse_from(["quadcode", "--file", "image.pbm"]).source(),
            Some(Source::File(PathBuf::from("image.pbm")))
        );
    }

    // Tests usage errors are raised before any grid is built
    // Verified by removing the manual/file conflict
    #[test]
    fn test_cli_usage_errors() {
        assert!(Cli::try_parse_from(["quadcode", "-m", "-f", "a.pbm"]).is_err());
        assert!(Cli::try_parse_from(["quadcode", "-f"]).is_err());
        assert!(Cli::try_parse_from(["quadcode", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["quadcode", "--strategy", "guess"]).is_err());
    }

    // Tests both help spellings request help output
    // Verified by disabling the question-mark flag
    #[test]
    fn test_cli_help_flags() {
        for flag in ["-?", "-h", "--help"] {
            let error = Cli::try_parse_from(["quadcode", flag]).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::DisplayHelp, "{flag}");
        }
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from([
            "quadcode",
            "-f",
            "x.pbm",
            "--max-width",
            "64",
            "--max-height",
            "32",
            "--strategy",
            "summed-area",
            "-q",
        ]);
        assert_eq!(cli.strategy, Strategy::SummedArea);
        assert!(cli.quiet);
        let limits = cli.limits().unwrap();
        assert_eq!((limits.max_width, limits.max_height), (64, 32));
    }

    // Tests running without a source prints help and succeeds
    // Verified by returning an error when no source is given
    #[test]
    fn test_session_without_source_prints_help() {
        let (result, out) = run(&["quadcode"], "");
        assert!(result.is_ok());
        assert!(out.contains("--manual"));
        assert!(out.contains("--file"));
    }

    // Tests manual mode end to end
    // Verified by skipping the grid echo
    #[test]
    fn test_session_manual_mode() {
        let (result, out) = run(&["quadcode", "-m"], "2 2\n1 1\n0 1\n");
        assert!(result.is_ok());
        assert!(out.contains("Image (2x2):\n1 1\n0 1\n"));
        assert!(out.ends_with("Code:\nXPPBP\n"));
    }

    // Tests file mode end to end in quiet mode
    // Verified by printing the header in quiet mode
    #[test]
    fn test_session_file_mode_quiet() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zero.pbm");
        fs::write(&path, "P1\n4 4\n0 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 0\n").unwrap();

        let (result, out) = run(
            &["quadcode", "-q", "--strategy", "summed-area", "-f", path.to_str().unwrap()],
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "B\n");
    }

    // Tests oversized images fail before anything is encoded
    // Verified by ignoring the command-line maxima
    #[test]
    fn test_session_rejects_oversized_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wide.pbm");
        fs::write(&path, "P1\n3 1\n1 0 1\n").unwrap();

        let (result, out) = run(
            &["quadcode", "--max-width", "2", "-f", path.to_str().unwrap()],
            "",
        );
        assert!(matches!(result, Err(CodecError::DimensionsOutOfBounds { .. })));
        assert!(!out.contains("Code:"));
    }

    // Tests zero limits are a parameter error
    // Verified by accepting zero maxima
    #[test]
    fn test_session_rejects_zero_limits() {
        let (result, _) = run(&["quadcode", "-m", "--max-height", "0"], "1 1\n1\n");
        assert!(matches!(
            result,
            Err(CodecError::InvalidParameter {
                parameter: "max_height",
                ..
            })
        ));
    }
}
