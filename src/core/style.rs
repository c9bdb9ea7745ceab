//! ANSI styling per severity
//!
//! Each emittable level owns an ordered list of display attributes. Styling
//! a line prepends the escape code of every attribute in order, so the first
//! attribute ends up closest to the text, then appends a single clear code.

use super::log_level::LogLevel;
use colored::Color;

/// A single SGR display attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    Clear,
    Bold,
    Italic,
    Underline,
    Foreground(Color),
}

impl StyleAttribute {
    /// SGR parameter, e.g. `1` for bold or `31` for red.
    pub fn code(&self) -> String {
        match self {
            StyleAttribute::Clear => "0".to_string(),
            StyleAttribute::Bold => "1".to_string(),
            StyleAttribute::Italic => "3".to_string(),
            StyleAttribute::Underline => "4".to_string(),
            StyleAttribute::Foreground(color) => color.to_fg_str().to_string(),
        }
    }

    /// Full escape sequence, e.g. `\x1b[1m`.
    pub fn ansi(&self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

/// Per-level style table used by the console appender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    // Indexed by level ordinal; `All` has no slot.
    styles: [Vec<StyleAttribute>; 5],
}

impl Default for StyleRegistry {
    fn default() -> Self {
        use StyleAttribute::{Bold, Foreground};
        Self {
            styles: [
                vec![Bold, Foreground(Color::Red)],
                vec![Bold, Foreground(Color::Yellow)],
                vec![Bold, Foreground(Color::White)],
                vec![Foreground(Color::White)],
                vec![Bold, Foreground(Color::Black)],
            ],
        }
    }
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the attributes of one level. `All` is ignored.
    #[must_use]
    pub fn with_style(mut self, level: LogLevel, attributes: Vec<StyleAttribute>) -> Self {
        if let Some(slot) = self.styles.get_mut(usize::from(level.ordinal())) {
            *slot = attributes;
        }
        self
    }

    /// Attributes for `level`; empty for `All`.
    pub fn style(&self, level: LogLevel) -> &[StyleAttribute] {
        self.styles
            .get(usize::from(level.ordinal()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn render(&self, line: &str, level: LogLevel) -> String {
        let attributes = self.style(level);
        let mut styled = String::with_capacity(line.len() + attributes.len() * 5 + 4);
        for attribute in attributes.iter().rev() {
            styled.push_str(&attribute.ansi());
        }
        styled.push_str(line);
        styled.push_str(&StyleAttribute::Clear.ansi());
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_codes() {
        assert_eq!(StyleAttribute::Bold.ansi(), "\x1b[1m");
        assert_eq!(StyleAttribute::Underline.code(), "4");
        assert_eq!(StyleAttribute::Foreground(Color::Red).code(), "31");
        assert_eq!(StyleAttribute::Foreground(Color::Black).code(), "30");
    }

    #[test]
    fn test_error_rendered_bold_red() {
        let styled = StyleRegistry::default().render("<ERROR>\tboom", LogLevel::Error);
        assert_eq!(styled, "\x1b[31m\x1b[1m<ERROR>\tboom\x1b[0m");
    }

    #[test]
    fn test_debug_single_attribute() {
        let styled = StyleRegistry::default().render("x", LogLevel::Debug);
        assert_eq!(styled, "\x1b[37mx\x1b[0m");
    }

    #[test]
    fn test_all_has_no_style() {
        let registry = StyleRegistry::default();
        assert!(registry.style(LogLevel::All).is_empty());
        assert_eq!(registry.render("x", LogLevel::All), "x\x1b[0m");
    }

    #[test]
    fn test_override_style() {
        let registry = StyleRegistry::default()
            .with_style(LogLevel::Info, vec![StyleAttribute::Italic, StyleAttribute::Underline]);
        assert_eq!(registry.render("i", LogLevel::Info), "\x1b[4m\x1b[3mi\x1b[0m");
    }
}
