//! Greedy word wrapping against font metrics.

use crate::font::StandardFont;
use crate::text::sanitize_win_ansi;

/// Break `text` into lines no wider than `max_width` at `size` points.
///
/// Words are separated by any whitespace. A word wider than `max_width`
/// is kept whole on its own line. Empty text yields no lines.
#[must_use]
pub fn wrap_text(text: &str, max_width: f32, size: f32, font: StandardFont) -> Vec<String> {
    let sanitized = sanitize_win_ansi(text);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in sanitized.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if font.width_of_text_at_size(&candidate, size) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
