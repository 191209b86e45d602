//! Terminal bar chart renderer

use crate::errors::Result;
use crate::pipeline::traits::ChartRenderer;
use crate::types::WordCount;
use std::io::Write;

/// Width of the longest bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// Horizontal bar chart written to any [`Write`] sink
///
/// One row per word: right-aligned label, a bar scaled to the largest count,
/// then the count.
#[derive(Debug)]
pub struct TerminalBarChart<W: Write> {
    out: W,
    bar_width: usize,
}

impl TerminalBarChart<std::io::Stdout> {
    /// Chart printed to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalBarChart<W> {
    /// Chart written to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Set the width of the longest bar
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar_len(&self, count: usize, max_count: usize) -> usize {
        if count == 0 || max_count == 0 {
            return 0;
        }
        let scaled = (count as f64 / max_count as f64 * self.bar_width as f64).round() as usize;
        scaled.max(1)
    }
}

impl<W: Write> ChartRenderer for TerminalBarChart<W> {
    fn render(&mut self, title: &str, counts: &[WordCount]) -> Result<()> {
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count()))?;

        if counts.is_empty() {
            writeln!(self.out, "(no words)")?;
            self.out.flush()?;
            return Ok(());
        }

        let label_width = counts.iter().map(|c| c.word.len()).max().unwrap_or(0);
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);

        for entry in counts {
            let bar: String = std::iter::repeat(BAR_CHAR)
                .take(self.bar_len(entry.count, max_count))
                .collect();
            writeln!(
                self.out,
                "{:>width$} | {} {}",
                entry.word,
                bar,
                entry.count,
                width = label_width
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(counts: &[WordCount], width: usize) -> String {
        let mut chart = TerminalBarChart::new(Vec::new()).with_bar_width(width);
        chart.render("Top Words", counts).unwrap();
        String::from_utf8(chart.into_inner()).unwrap()
    }

    #[test]
    fn test_render_rows() {
        let output = render_to_string(
            &[WordCount::new("election", 4), WordCount::new("vote", 2)],
            4,
        );
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Top Words");
        assert_eq!(lines[1], "=========");
        assert_eq!(lines[2], "election | ████ 4");
        assert_eq!(lines[3], "    vote | ██ 2");
    }

    #[test]
    fn test_small_counts_still_get_a_bar() {
        let output = render_to_string(
            &[WordCount::new("many", 100), WordCount::new("rare", 1)],
            10,
        );

        assert!(output.contains("rare | █ 1"));
    }

    #[test]
    fn test_render_empty() {
        let output = render_to_string(&[], 10);

        assert_eq!(output, "Top Words\n=========\n(no words)\n");
    }
}
