//! Tests for interactive image entry

#[cfg(test)]
mod tests {
    use quadcode::CodecError;
    use quadcode::io::configuration::Limits;
    use quadcode::io::manual::read_manual_input;
    use std::io::Cursor;

    // Tests a complete entry produces the grid and prompts with the maxima
    // Verified by omitting the maximum from the width prompt
    #[test]
    fn test_reads_grid_and_prompts() {
        let mut prompts = Vec::new();
        let grid = read_manual_input(
            Cursor::new("2\n2\n1 1\n0 1\n"),
            &mut prompts,
            &Limits::default(),
        )
        .unwrap();

        assert_eq!(grid.to_string(), "1 1\n0 1\n");
        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.contains("max 1024"));
        assert!(prompts.contains("max 768"));
    }

    // Tests a non-numeric width is a format error
    // Verified by treating unreadable widths as zero
    #[test]
    fn test_bad_width() {
        let result = read_manual_input(Cursor::new("two 2\n"), Vec::new(), &Limits::default());
        assert!(matches!(result, Err(CodecError::InvalidFormat { .. })));
    }

    // Tests configured limits apply to manual entry
    // Verified by ignoring the height maximum
    #[test]
    fn test_limits_apply() {
        let limits = Limits::new(4, 4).unwrap();
        let result = read_manual_input(Cursor::new("4 5\n"), Vec::new(), &limits);
        assert!(matches!(
            result,
            Err(CodecError::DimensionsOutOfBounds { height: 5, .. })
        ));
    }

    // Tests pixel tokens must be exactly 0 or 1
    // Verified by accepting any integer
    #[test]
    fn test_invalid_pixel_tokens() {
        let result = read_manual_input(Cursor::new("2 1\n1 3\n"), Vec::new(), &Limits::default());
        assert!(matches!(result, Err(CodecError::InvalidPixel { index: 1, .. })));

        let result = read_manual_input(Cursor::new("2 1\n? 1\n"), Vec::new(), &Limits::default());
        assert!(matches!(result, Err(CodecError::InvalidPixel { index: 0, .. })));
    }

    // Tests input ending early is truncation
    // Verified by padding missing pixels with zeros
    #[test]
    fn test_truncated_entry() {
        let result = read_manual_input(Cursor::new("2 2\n1 0\n"), Vec::new(), &Limits::default());
        assert!(matches!(
            result,
            Err(CodecError::Truncated {
                read: 2,
                expected: 4
            })
        ));
    }
}
