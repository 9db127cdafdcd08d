//! Freeform import text: first line is the palette name, each following
//! non-blank line is one hex color.

use crate::error::{AppError, Result};
use crate::model::{Palette, Rgb};

/// Parse import text into a palette whose entries are named after their hex codes.
///
/// Fails on fewer than two lines, on a blank name, on no colors, and on the
/// first color line that is not valid hex (the error names that line).
pub fn parse(text: &str) -> Result<Palette> {
    let mut lines = text.trim().lines();
    let name = lines.next().unwrap_or_default().trim();
    let rest: Vec<&str> = lines.collect();
    if rest.is_empty() {
        return Err(AppError::InvalidImportFormat);
    }

    let colors = rest
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::parse::<Rgb>)
        .collect::<Result<Vec<_>>>()?;

    if name.is_empty() || colors.is_empty() {
        return Err(AppError::InvalidPalette);
    }
    Ok(Palette::from_colors(name, colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_then_colors_in_order() {
        let palette = parse("MyPalette\n#FF0000\n#00FF00").unwrap();
        assert_eq!(palette.name(), "MyPalette");
        assert_eq!(
            palette.colors().collect::<Vec<_>>(),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]
        );
        assert_eq!(palette.entries()[0].name, "#FF0000");
    }

    #[test]
    fn single_line_is_rejected() {
        assert!(matches!(parse("OnlyName"), Err(AppError::InvalidImportFormat)));
        assert!(matches!(parse("OnlyName\n\n  \n"), Err(AppError::InvalidImportFormat)));
        assert!(matches!(parse(""), Err(AppError::InvalidImportFormat)));
    }

    #[test]
    fn blank_lines_and_crlf_are_ignored() {
        let palette = parse("  Mixed \r\n#abc\r\n\r\n   \r\n#123456\r\n").unwrap();
        assert_eq!(palette.name(), "Mixed");
        assert_eq!(palette.count(), 2);
    }

    #[test]
    fn invalid_line_aborts_and_is_named() {
        let err = parse("P\n#FF0000\nbanana\n#00FF00").unwrap_err();
        assert!(matches!(err, AppError::InvalidColor(ref t) if t == "banana"));
        assert!(err.to_string().contains("'banana'"));
    }

    #[test]
    fn leading_blank_lines_are_trimmed_before_the_name_is_taken() {
        let palette = parse("   \n#FF0000\n#00FF00").unwrap();
        assert_eq!(palette.name(), "#FF0000");
        assert_eq!(palette.count(), 1);
    }
}
