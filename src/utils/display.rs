//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Plain-text renderings of a grid for the command line
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1) * 3);
        for (x, _, alive) in grid.iter_cells() {
            output.push(if alive { '█' } else { '·' });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (x, y, alive) in grid.iter_cells() {
            if x == 0 {
                output.push_str(&format!("{:2} ", y));
            }
            output.push_str(if alive { "██" } else { "··" });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }

        output
    }

    /// One-line summary of size and population
    pub fn format_summary(grid: &Grid) -> String {
        let total = grid.width() * grid.height();
        format!(
            "{}x{} grid, {} alive ({:.1}%)",
            grid.width(),
            grid.height(),
            grid.living_count(),
            grid.living_count() as f64 / total as f64 * 100.0
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
