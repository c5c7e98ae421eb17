//! Report rendering.
//!
//! The scoring loop only talks to [`ReportRenderer`]; the terminal output
//! below is one implementation and tests drive it over an in-memory buffer.

use std::io::{self, Write};

use accuracy_core::{AccuracySnapshot, CounterTriple};

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Cursor home followed by erase-to-end-of-screen.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/// Width used when stdout is not attached to a terminal.
const FALLBACK_WIDTH: u16 = 80;

/// Accuracy above which a figure is shown green
const GOOD_RATIO: f64 = 0.70;

/// Accuracy above which a figure is shown yellow
const FAIR_RATIO: f64 = 0.50;

/// Where the progress bar width comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalWidth {
    /// Query the terminal before every redraw.
    Live,
    Fixed(u16),
}

impl TerminalWidth {
    pub fn columns(&self) -> u16 {
        match self {
            TerminalWidth::Live => crossterm::terminal::size()
                .map(|(cols, _)| cols)
                .unwrap_or(FALLBACK_WIDTH),
            TerminalWidth::Fixed(cols) => *cols,
        }
    }
}

/// Position in the dataset for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Dataset lines consumed so far, skipped ones included
    pub lines_read: u64,
    pub dataset_lines: u64,
}

pub trait ReportRenderer {
    /// Redraw after a pair was scored.
    fn render_progress(&mut self, snapshot: &AccuracySnapshot, progress: &Progress) -> io::Result<()>;

    /// Print the final results once the predictions are exhausted.
    fn render_final(&mut self, snapshot: &AccuracySnapshot) -> io::Result<()>;
}

/// Filled cells of a bar `columns` wide. Never exceeds `columns`.
pub fn filled_cells(columns: usize, progress: &Progress) -> usize {
    if progress.dataset_lines == 0 {
        return 0;
    }
    let filled = columns as u128 * progress.lines_read as u128 / progress.dataset_lines as u128;
    filled.min(columns as u128) as usize
}

fn ratio_color(ratio: f64) -> &'static str {
    if ratio > GOOD_RATIO {
        GREEN
    } else if ratio > FAIR_RATIO {
        YELLOW
    } else {
        RED
    }
}

fn write_result<W: Write>(out: &mut W, total: u64, count: u64) -> io::Result<()> {
    if total == 0 {
        return writeln!(out, "----");
    }
    let ratio = count as f64 / total as f64;
    writeln!(out, "{}{:.3}%{RESET}", ratio_color(ratio), ratio * 100.0)
}

fn write_triple<W: Write>(out: &mut W, name: &str, triple: &CounterTriple) -> io::Result<()> {
    writeln!(out, "{name}")?;
    write!(out, "Without color: ")?;
    write_result(out, triple.total, triple.correct)?;
    write!(out, "With color:    ")?;
    write_result(out, triple.total, triple.correct_with_color)?;
    writeln!(out)
}

/// Per-category breakdown shared by every renderer.
pub fn write_breakdown<W: Write>(out: &mut W, snapshot: &AccuracySnapshot) -> io::Result<()> {
    write_triple(out, "Global:", &snapshot.global)?;

    write!(out, "Nothing:       ")?;
    write_result(out, snapshot.nothing.total, snapshot.nothing.correct)?;
    writeln!(out)?;

    write_triple(out, "Check:", &snapshot.check)?;
    write_triple(out, "Checkmate:", &snapshot.checkmate)?;
    write_triple(out, "Checkmate and Check combined:", &snapshot.check_family)
}

/// Live ANSI report: progress bar plus breakdown, redrawn in place.
pub struct TerminalRenderer<W> {
    out: W,
    width: TerminalWidth,
    drawn: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: TerminalWidth) -> Self {
        Self {
            out,
            width,
            drawn: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_bar(&mut self, progress: &Progress) -> io::Result<()> {
        let columns = self.width.columns().saturating_sub(2) as usize;
        let filled = filled_cells(columns, progress);
        writeln!(
            self.out,
            "[{GREEN}{}{RESET}{}]",
            "|".repeat(filled),
            " ".repeat(columns - filled)
        )
    }
}

impl<W: Write> ReportRenderer for TerminalRenderer<W> {
    fn render_progress(&mut self, snapshot: &AccuracySnapshot, progress: &Progress) -> io::Result<()> {
        if self.drawn {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        self.write_bar(progress)?;
        writeln!(self.out)?;
        write_breakdown(&mut self.out, snapshot)?;
        self.out.flush()?;
        self.drawn = true;
        Ok(())
    }

    fn render_final(&mut self, snapshot: &AccuracySnapshot) -> io::Result<()> {
        write!(self.out, "{CLEAR_SCREEN}")?;
        writeln!(self.out, "RESULTS:")?;
        writeln!(self.out)?;
        write_breakdown(&mut self.out, snapshot)?;
        self.out.flush()
    }
}

/// Prints only the final breakdown; for pipes and logs.
pub struct QuietRenderer<W> {
    out: W,
}

impl<W: Write> QuietRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportRenderer for QuietRenderer<W> {
    fn render_progress(&mut self, _snapshot: &AccuracySnapshot, _progress: &Progress) -> io::Result<()> {
        Ok(())
    }

    fn render_final(&mut self, snapshot: &AccuracySnapshot) -> io::Result<()> {
        writeln!(self.out, "RESULTS:")?;
        writeln!(self.out)?;
        write_breakdown(&mut self.out, snapshot)?;
        self.out.flush()
    }
}
