//! Formatting utilities for display

/// Length of `text` in UTF-16 code units, the unit a browser text field
/// reports its length in.
pub fn code_unit_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Group digits in threes with commas: `1234567` -> `"1,234,567"`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a percentage the way the server sent it: whole numbers without a
/// fractional part, everything else with the shortest exact decimal.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{value}%")
    }
}

/// CSS width for the confidence meter fill, clamped to the bar.
pub fn meter_width(confidence: f64) -> String {
    let clamped = if confidence.is_finite() {
        confidence.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format_percent(clamped)
}

pub fn results_caption(total: u32) -> String {
    format!("{total} results found")
}

pub fn batch_caption(flagged: usize, total: usize) -> String {
    format!("{flagged} of {total} flagged as fake")
}
