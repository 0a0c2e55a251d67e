//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Code, Feedback, Symbol};
use colored::{ColoredString, Colorize};

/// Render a symbol as its letter on a matching background
#[must_use]
pub fn symbol_swatch(symbol: Symbol) -> ColoredString {
    let letter = format!(" {} ", symbol.letter());
    match symbol {
        Symbol::Red => letter.white().on_red(),
        Symbol::Green => letter.black().on_green(),
        Symbol::Blue => letter.white().on_blue(),
        Symbol::Yellow => letter.black().on_yellow(),
        Symbol::White => letter.black().on_white(),
        Symbol::Purple => letter.white().on_magenta(),
        Symbol::Orange => letter.black().on_truecolor(255, 165, 0),
        Symbol::Grey => letter.white().on_bright_black(),
    }
    .bold()
}

/// Render a code as a row of swatches
#[must_use]
pub fn code_swatches(code: &Code) -> String {
    code.symbols()
        .iter()
        .map(|&symbol| symbol_swatch(symbol).to_string())
        .collect()
}

/// Render a palette as swatches followed by color names
#[must_use]
pub fn palette_legend(palette: &[Symbol]) -> String {
    palette
        .iter()
        .map(|&symbol| format!("{} {}", symbol_swatch(symbol), symbol.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Sorted markers padded with `-` to the code length, e.g. `OOX--`
#[must_use]
pub fn padded_markers(feedback: Feedback) -> String {
    let mut markers = feedback.to_markers();
    while markers.len() < CODE_LENGTH {
        markers.push('-');
    }
    markers
}

/// Colored marker string: exact markers green, partial markers yellow
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    padded_markers(feedback)
        .chars()
        .map(|marker| match marker {
            crate::core::EXACT_MARKER => marker.to_string().bright_green().bold().to_string(),
            crate::core::PARTIAL_MARKER => marker.to_string().bright_yellow().bold().to_string(),
            _ => marker.to_string().bright_black().to_string(),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_markers_fill_to_length() {
        assert_eq!(padded_markers(Feedback::new(0, 0)), "-----");
        assert_eq!(padded_markers(Feedback::new(1, 2)), "OOX--");
        assert_eq!(padded_markers(Feedback::PERFECT), "XXXXX");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
