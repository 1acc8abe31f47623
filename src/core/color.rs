//! ANSI colour handling for the frame renderer.  No external deps.

use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ColorError {
    UnknownName(String),
    InvalidHexDigit,
    InvalidHexLength,
}

/// Foreground colour, either one of the eight basic SGR codes or a
/// 24-bit true colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiColor {
    Basic(u8),
    Rgb(u8, u8, u8),
}

pub const RESET: &str = "\x1b[0m";

impl AnsiColor {
    /// Default bar colour (a light steel blue).
    pub const DEFAULT: Self = Self::Rgb(0x69, 0xB4, 0xEE);

    /// Parse colour names or `#rrggbb`.  Falls back to the hex parser on
    /// an unrecognised name.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::Basic(30)),
            "red" => Ok(Self::Basic(31)),
            "green" => Ok(Self::Basic(32)),
            "yellow" => Ok(Self::Basic(33)),
            "blue" => Ok(Self::Basic(34)),
            "magenta" => Ok(Self::Basic(35)),
            "cyan" => Ok(Self::Basic(36)),
            "white" => Ok(Self::Basic(37)),
            "steel" | "default" => Ok(Self::DEFAULT),
            other if other.starts_with('#') || other.len() == 6 => Self::from_hex(other),
            other => Err(ColorError::UnknownName(other.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Escape sequence switching the terminal to this colour.
    #[must_use]
    pub fn escape(self) -> String {
        match self {
            Self::Basic(n) => format!("\x1b[{n}m"),
            Self::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: AnsiColor, text: &str) -> String {
    format!("{c}{text}{RESET}")
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::UnknownName(s) => write!(f, "unknown colour name `{s}`"),
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_parse() {
        assert_eq!(AnsiColor::parse("red"), Ok(AnsiColor::Basic(31)));
        assert_eq!(AnsiColor::parse("  CYAN "), Ok(AnsiColor::Basic(36)));
        assert_eq!(AnsiColor::parse("steel"), Ok(AnsiColor::DEFAULT));
    }

    #[test]
    fn hex_colors_parse_with_and_without_hash() {
        assert_eq!(
            AnsiColor::parse("#10a0ff"),
            Ok(AnsiColor::Rgb(0x10, 0xA0, 0xFF))
        );
        assert_eq!(
            AnsiColor::parse("505050"),
            Ok(AnsiColor::Rgb(0x50, 0x50, 0x50))
        );
    }

    #[test]
    fn bad_colors_are_rejected() {
        assert!(matches!(
            AnsiColor::parse("taupe"),
            Err(ColorError::UnknownName(_))
        ));
        assert_eq!(
            AnsiColor::parse("#12345"),
            Err(ColorError::InvalidHexLength)
        );
        assert_eq!(AnsiColor::parse("#12z456"), Err(ColorError::InvalidHexDigit));
    }

    #[test]
    fn escape_sequences_are_well_formed() {
        assert_eq!(AnsiColor::Basic(32).escape(), "\x1b[32m");
        assert_eq!(AnsiColor::Rgb(1, 2, 3).escape(), "\x1b[38;2;1;2;3m");
        assert_eq!(colorize(AnsiColor::Basic(31), "x"), "\x1b[31mx\x1b[0m");
    }
}
