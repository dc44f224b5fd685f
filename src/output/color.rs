//! Symbolic terminal colors.

use std::fmt;

use super::colors;

/// A named ANSI style: reset, bold, or one of the 16 foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Bold,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every defined color, in table order.
    pub const ALL: [Color; 18] = [
        Color::Reset,
        Color::Bold,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// The escape sequence that switches the terminal to this style.
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Reset => colors::RESET,
            Color::Bold => colors::BOLD,
            Color::Black => colors::BLACK,
            Color::Red => colors::RED,
            Color::Green => colors::GREEN,
            Color::Yellow => colors::YELLOW,
            Color::Blue => colors::BLUE,
            Color::Magenta => colors::MAGENTA,
            Color::Cyan => colors::CYAN,
            Color::White => colors::WHITE,
            Color::BrightBlack => colors::BRIGHT_BLACK,
            Color::BrightRed => colors::BRIGHT_RED,
            Color::BrightGreen => colors::BRIGHT_GREEN,
            Color::BrightYellow => colors::BRIGHT_YELLOW,
            Color::BrightBlue => colors::BRIGHT_BLUE,
            Color::BrightMagenta => colors::BRIGHT_MAGENTA,
            Color::BrightCyan => colors::BRIGHT_CYAN,
            Color::BrightWhite => colors::BRIGHT_WHITE,
        }
    }

    /// Symbolic name, e.g. `BRIGHT_GREEN`.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Reset => "RESET",
            Color::Bold => "BOLD",
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Magenta => "MAGENTA",
            Color::Cyan => "CYAN",
            Color::White => "WHITE",
            Color::BrightBlack => "BRIGHT_BLACK",
            Color::BrightRed => "BRIGHT_RED",
            Color::BrightGreen => "BRIGHT_GREEN",
            Color::BrightYellow => "BRIGHT_YELLOW",
            Color::BrightBlue => "BRIGHT_BLUE",
            Color::BrightMagenta => "BRIGHT_MAGENTA",
            Color::BrightCyan => "BRIGHT_CYAN",
            Color::BrightWhite => "BRIGHT_WHITE",
        }
    }

    /// Wrap `text` in this color.
    pub fn paint(self, text: &str) -> String {
        colorize(text, self)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.escape()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}

/// Wrap `text` with a color code followed by a reset.
///
/// The code is used as given; pass a [`Color`] or one of the constants in
/// [`colors`](super::colors).
pub fn colorize(text: &str, color: impl AsRef<str>) -> String {
    format!("{}{}{}", color.as_ref(), text, colors::RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_wraps_text_for_every_color() {
        for color in Color::ALL {
            for text in ["", "hello", "multi word text", "ünïcödé ✓"] {
                let out = colorize(text, color);
                assert!(out.starts_with(color.escape()), "{}", color.name());
                assert!(out.ends_with(colors::RESET));
                let inner = &out[color.escape().len()..out.len() - colors::RESET.len()];
                assert_eq!(inner, text);
            }
        }
    }

    #[test]
    fn test_colorize_accepts_raw_codes() {
        assert_eq!(colorize("x", colors::RED), "\x1b[31mx\x1b[0m");
        assert_eq!(colorize("x", "\x1b[4m"), "\x1b[4mx\x1b[0m");
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(Color::Reset.escape(), "\x1b[0m");
        assert_eq!(Color::Bold.escape(), "\x1b[1m");
        assert_eq!(Color::Black.escape(), "\x1b[30m");
        assert_eq!(Color::White.escape(), "\x1b[37m");
        assert_eq!(Color::BrightBlack.escape(), "\x1b[90m");
        assert_eq!(Color::BrightWhite.escape(), "\x1b[97m");
    }

    #[test]
    fn test_escapes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for color in Color::ALL {
            assert!(seen.insert(color.escape()), "duplicate {}", color.name());
        }
    }

    #[test]
    fn test_paint_matches_colorize() {
        assert_eq!(Color::Cyan.paint("?"), colorize("?", Color::Cyan));
        assert_eq!(Color::Green.to_string(), colors::GREEN);
    }
}
