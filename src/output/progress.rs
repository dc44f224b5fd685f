//! Single-line progress indicator.
//!
//! Each update overwrites the current terminal line with
//! `label: |██████░░░░| 60.0%`. Reaching the total ends the line.

use std::io::{self, Stdout, Write};

use crate::error::{ClikitError, Result};

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_LABEL: &str = "Progress";
pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Display options for a [`ProgressIndicator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressOptions {
    pub width: usize,
    pub label: String,
    pub filled: char,
    pub empty: char,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            label: DEFAULT_LABEL.to_string(),
            filled: FILLED_GLYPH,
            empty: EMPTY_GLYPH,
        }
    }
}

impl ProgressOptions {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_glyphs(mut self, filled: char, empty: char) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }
}

/// Mutable progress of one bounded task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub total: u64,
    pub current: u64,
    pub width: usize,
    pub label: String,
}

impl ProgressState {
    /// `current / total`. Exceeds 1.0 once advanced past the total.
    pub fn fraction(&self) -> f64 {
        self.current as f64 / self.total as f64
    }

    /// Number of filled cells.
    ///
    /// Grows past `width` on overshoot, up to twice the width. The
    /// percentage keeps showing the true fraction.
    pub fn filled(&self) -> usize {
        let cap = self.width.saturating_mul(2);
        let cells = (self.width as f64 * self.fraction()).floor();
        if cells >= cap as f64 {
            cap
        } else {
            cells as usize
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }
}

/// Build a bar of `filled` filled glyphs padded with empty glyphs up to `width`.
pub fn render_bar(filled: usize, width: usize, filled_glyph: char, empty_glyph: char) -> String {
    let empty = width.saturating_sub(filled);
    let cells = filled.saturating_add(empty);
    let mut bar = String::with_capacity(cells.saturating_mul(filled_glyph.len_utf8()));
    bar.extend(std::iter::repeat(filled_glyph).take(filled));
    bar.extend(std::iter::repeat(empty_glyph).take(empty));
    bar
}

/// A re-rendered progress bar for a task of known size.
pub struct ProgressIndicator<W = Stdout> {
    state: ProgressState,
    filled_glyph: char,
    empty_glyph: char,
    out: W,
}

impl ProgressIndicator<Stdout> {
    /// Create an indicator that renders to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ClikitError::InvalidTotal`] if `total` is zero and
    /// [`ClikitError::InvalidWidth`] if the width is zero.
    pub fn new(total: u64, options: ProgressOptions) -> Result<Self> {
        Self::with_writer(total, options, io::stdout())
    }
}

impl<W: Write> ProgressIndicator<W> {
    /// Create an indicator that renders to `out`.
    pub fn with_writer(total: u64, options: ProgressOptions, out: W) -> Result<Self> {
        if total == 0 {
            return Err(ClikitError::InvalidTotal);
        }
        if options.width == 0 {
            return Err(ClikitError::InvalidWidth);
        }
        Ok(Self {
            state: ProgressState {
                total,
                current: 0,
                width: options.width,
                label: options.label,
            },
            filled_glyph: options.filled,
            empty_glyph: options.empty,
            out,
        })
    }

    /// Move forward by `amount` and redraw.
    pub fn advance(&mut self, amount: u64) -> Result<()> {
        self.state.current = self.state.current.saturating_add(amount);
        self.render()
    }

    /// Move forward by one and redraw.
    pub fn tick(&mut self) -> Result<()> {
        self.advance(1)
    }

    /// Jump to an absolute position and redraw.
    pub fn set(&mut self, value: u64) -> Result<()> {
        self.state.current = value;
        self.render()
    }

    /// Jump to the total and redraw, ending the line.
    pub fn finish(&mut self) -> Result<()> {
        self.set(self.state.total)
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn fraction(&self) -> f64 {
        self.state.fraction()
    }

    /// The text of the current bar, without the leading carriage return.
    pub fn line(&self) -> String {
        let bar = render_bar(
            self.state.filled(),
            self.state.width,
            self.filled_glyph,
            self.empty_glyph,
        );
        format!(
            "{}: |{}| {:.1}%",
            self.state.label,
            bar,
            self.fraction() * 100.0
        )
    }

    /// Consume the indicator and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self) -> Result<()> {
        write!(self.out, "\r{}", self.line())?;
        if self.state.is_complete() {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(total: u64, width: usize) -> ProgressIndicator<Vec<u8>> {
        let options = ProgressOptions::default().with_width(width);
        ProgressIndicator::with_writer(total, options, Vec::new()).unwrap()
    }

    fn output(p: ProgressIndicator<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let result = ProgressIndicator::with_writer(0, ProgressOptions::default(), Vec::new());
        assert!(matches!(result, Err(ClikitError::InvalidTotal)));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let options = ProgressOptions::default().with_width(0);
        let result = ProgressIndicator::with_writer(10, options, Vec::new());
        assert!(matches!(result, Err(ClikitError::InvalidWidth)));
    }

    #[test]
    fn test_defaults() {
        let options = ProgressOptions::default();
        assert_eq!(options.width, 50);
        assert_eq!(options.label, "Progress");
    }

    #[test]
    fn test_four_steps_render_quarters_and_one_newline() {
        let mut p = indicator(4, 10);
        let mut fractions = Vec::new();
        let mut newlines = Vec::new();
        let mut seen = 0;
        for _ in 0..4 {
            p.tick().unwrap();
            fractions.push(p.fraction());
            let out = String::from_utf8(p.out.clone()).unwrap();
            newlines.push(out.matches('\n').count() - seen);
            seen = out.matches('\n').count();
        }
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(newlines, vec![0, 0, 0, 1]);

        let out = output(p);
        let frames: Vec<&str> = out.split('\r').skip(1).collect();
        assert_eq!(
            frames,
            vec![
                "Progress: |██░░░░░░░░| 25.0%",
                "Progress: |█████░░░░░| 50.0%",
                "Progress: |███████░░░| 75.0%",
                "Progress: |██████████| 100.0%\n",
            ]
        );
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_render_format() {
        let mut p = indicator(4, 10);
        p.advance(1).unwrap();
        assert_eq!(output(p), "\rProgress: |██░░░░░░░░| 25.0%");
    }

    #[test]
    fn test_label_and_glyphs() {
        let options = ProgressOptions::default()
            .with_width(4)
            .with_label("Copying")
            .with_glyphs('#', '-');
        let mut p = ProgressIndicator::with_writer(2, options, Vec::new()).unwrap();
        p.set(1).unwrap();
        assert_eq!(p.line(), "Copying: |##--| 50.0%");
    }

    #[test]
    fn test_filled_is_floored() {
        let mut p = indicator(3, 10);
        p.set(1).unwrap();
        assert_eq!(p.state().filled(), 3);
        assert!(p.line().ends_with("| 33.3%"));
    }

    #[test]
    fn test_set_is_absolute() {
        let mut p = indicator(10, 10);
        p.set(7).unwrap();
        assert_eq!(p.state().current, 7);
        p.advance(2).unwrap();
        assert_eq!(p.state().current, 9);
    }

    #[test]
    fn test_finish_completes() {
        let mut p = indicator(8, 8);
        p.finish().unwrap();
        assert_eq!(p.state().current, 8);
        assert!(p.state().is_complete());
        assert_eq!(output(p), "\rProgress: |████████| 100.0%\n");
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut p = indicator(2, 4);
        p.set(3).unwrap();
        assert_eq!(p.fraction(), 1.5);
        assert_eq!(p.state().filled(), 6);
        assert_eq!(p.line(), "Progress: |██████| 150.0%");
    }

    #[test]
    fn test_huge_overshoot_caps_bar_at_twice_width() {
        let mut p = indicator(1, 10);
        p.set(u64::MAX).unwrap();
        assert_eq!(p.state().filled(), 20);
        let line = p.line();
        assert!(line.starts_with(&format!("Progress: |{}| ", "█".repeat(20))));
        assert!(line.ends_with('%'));

        let mut p = indicator(1, 10);
        p.set(1_000_000_000).unwrap();
        assert_eq!(p.line(), format!("Progress: |{}| 100000000000.0%", "█".repeat(20)));
    }

    #[test]
    fn test_updates_after_completion_start_fresh_line() {
        let mut p = indicator(1, 2);
        p.finish().unwrap();
        p.advance(1).unwrap();
        let out = output(p);
        assert_eq!(out, "\rProgress: |██| 100.0%\n\rProgress: |████| 200.0%\n");
    }

    #[test]
    fn test_render_bar_clamps_empty_cells() {
        assert_eq!(render_bar(0, 3, '#', '.'), "...");
        assert_eq!(render_bar(2, 3, '#', '.'), "##.");
        assert_eq!(render_bar(5, 3, '#', '.'), "#####");
    }
}
