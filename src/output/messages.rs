//! Status message output.
//!
//! Provides success, error, warning and info lines plus section headers.
//! Errors go to stderr; everything else goes to stdout.

use std::io::{self, Stderr, Stdout, Write};

use super::colors::*;

const SUCCESS_GLYPH: char = '✓';
const ERROR_GLYPH: char = '✗';
const WARNING_GLYPH: char = '⚠';
const INFO_GLYPH: char = 'ℹ';

fn success_line(msg: &str) -> String {
    format!("{GREEN}{SUCCESS_GLYPH}{RESET} {}", msg)
}

fn error_line(msg: &str) -> String {
    format!("{RED}{ERROR_GLYPH}{RESET} {}", msg)
}

fn warning_line(msg: &str) -> String {
    format!("{YELLOW}{WARNING_GLYPH}{RESET}  {}", msg)
}

fn info_line(msg: &str) -> String {
    format!("{BLUE}{INFO_GLYPH}{RESET}  {}", msg)
}

/// Writes leveled status lines to an output and an error stream.
///
/// The free functions in this module ([`print_success`] and friends) cover
/// the common case of the process streams. Use a `StatusPrinter` directly
/// when output has to be captured or redirected.
#[derive(Debug)]
pub struct StatusPrinter<O = Stdout, E = Stderr> {
    out: O,
    err: E,
}

impl StatusPrinter<Stdout, Stderr> {
    /// Printer bound to the process stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Default for StatusPrinter<Stdout, Stderr> {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: Write, E: Write> StatusPrinter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", success_line(msg))
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.err, "{}", error_line(msg))
    }

    pub fn warning(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", warning_line(msg))
    }

    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", info_line(msg))
    }

    /// Print a blank line, `text` in bold, and a separator as long as `text`.
    ///
    /// The separator length counts the characters of `text`, never the
    /// escape codes around it.
    pub fn header(&mut self, text: &str, separator: char) -> io::Result<()> {
        let rule: String = std::iter::repeat(separator)
            .take(text.chars().count())
            .collect();
        writeln!(self.out)?;
        writeln!(self.out, "{BOLD}{}{RESET}", text)?;
        writeln!(self.out, "{}", rule)
    }

    /// Borrow the output stream.
    pub fn out(&mut self) -> &mut O {
        &mut self.out
    }

    /// Borrow the error stream.
    pub fn err(&mut self) -> &mut E {
        &mut self.err
    }

    /// Consume the printer and return both streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{}", success_line(msg));
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{}", error_line(msg));
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{}", warning_line(msg));
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{}", info_line(msg));
}

/// Print a bold header underlined with `separator`.
pub fn print_header(text: &str, separator: char) {
    let rule: String = std::iter::repeat(separator)
        .take(text.chars().count())
        .collect();
    println!();
    println!("{BOLD}{}{RESET}", text);
    println!("{}", rule);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> StatusPrinter<Vec<u8>, Vec<u8>> {
        StatusPrinter::new(Vec::new(), Vec::new())
    }

    fn streams(printer: StatusPrinter<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = printer.into_inner();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_goes_to_stdout() {
        let mut p = capture();
        p.success("done").unwrap();
        let (out, err) = streams(p);
        assert_eq!(out, "\x1b[32m✓\x1b[0m done\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_error_goes_to_stderr() {
        let mut p = capture();
        p.error("boom").unwrap();
        let (out, err) = streams(p);
        assert!(out.is_empty());
        assert_eq!(err, "\x1b[31m✗\x1b[0m boom\n");
    }

    #[test]
    fn test_warning_and_info_glyphs() {
        let mut p = capture();
        p.warning("careful").unwrap();
        p.info("note").unwrap();
        let (out, _) = streams(p);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "\x1b[33m⚠\x1b[0m  careful");
        assert_eq!(lines[1], "\x1b[34mℹ\x1b[0m  note");
    }

    #[test]
    fn test_header_separator_matches_visible_length() {
        let mut p = capture();
        p.header("ABC", '=').unwrap();
        let (out, _) = streams(p);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["", "\x1b[1mABC\x1b[0m", "==="]);
    }

    #[test]
    fn test_header_counts_characters_not_bytes() {
        let mut p = capture();
        p.header("Résumé", '-').unwrap();
        let (out, _) = streams(p);
        assert_eq!(out.lines().last().unwrap(), "------");
    }

    #[test]
    fn test_header_empty_text() {
        let mut p = capture();
        p.header("", '=').unwrap();
        let (out, _) = streams(p);
        assert_eq!(out, "\n\x1b[1m\x1b[0m\n\n");
    }

    #[test]
    fn test_free_functions_do_not_panic() {
        print_success("ok");
        print_error("err");
        print_warning("warn");
        print_info("info");
        print_header("Section", '~');
    }
}
