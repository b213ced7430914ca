// ABOUTME: This module renders the before/after report for planned summary updates
// ABOUTME: It highlights needles in red and their replacements in green when color is on

use owo_colors::OwoColorize;
use std::ops::Range;

use crate::constants::ui;
use crate::replace::replace_with_spans;
use crate::types::{PlannedUpdate, ReplacementPair};

pub struct ReportFormatter {
    use_color: bool,
}

impl ReportFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Two lines: the original summary and the new one
    pub fn format_update(&self, update: &PlannedUpdate, pairs: &[ReplacementPair]) -> String {
        let (old_line, new_line) = if self.use_color {
            let needles: Vec<&str> = pairs.iter().map(|p| p.needle.as_str()).collect();
            let (new_summary, inserted) = replace_with_spans(update.original_summary(), pairs);

            (
                highlight(update.original_summary(), &needles, |s| s.red().to_string()),
                paint_ranges(&new_summary, inserted, |s| s.green().to_string()),
            )
        } else {
            (
                update.original_summary().to_string(),
                update.new_summary.clone(),
            )
        };

        format!(
            "{}{:>width$} - {}\n{}+ {}",
            ui::LINE_INDENT,
            update.id(),
            old_line,
            " ".repeat(ui::LINE_INDENT.len() + ui::ID_WIDTH),
            new_line,
            width = ui::ID_WIDTH,
        )
    }

    pub fn format_report(&self, updates: &[PlannedUpdate], pairs: &[ReplacementPair]) -> String {
        let mut lines: Vec<String> = updates
            .iter()
            .map(|update| self.format_update(update, pairs))
            .collect();

        let changed = updates.iter().filter(|u| u.is_changed()).count();
        lines.push(String::new());
        lines.push(format!(
            "{} planned update{}, {} with a changed summary.",
            updates.len(),
            if updates.len() == 1 { "" } else { "s" },
            changed
        ));

        lines.join("\n")
    }
}

/// Paint every occurrence of `terms` in `text`. Ranges are found on the plain
/// text; when matches overlap the earliest (then longest) one wins.
fn highlight(text: &str, terms: &[&str], paint: impl Fn(&str) -> String) -> String {
    let mut ranges: Vec<Range<usize>> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .flat_map(|term| {
            text.match_indices(term)
                .map(|(start, m)| start..start + m.len())
                .collect::<Vec<_>>()
        })
        .collect();
    ranges.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    paint_ranges(text, ranges, paint)
}

/// Paint sorted byte ranges of `text`; a range starting inside an earlier one is skipped
fn paint_ranges(
    text: &str,
    ranges: impl IntoIterator<Item = Range<usize>>,
    paint: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    for Range { start, end } in ranges {
        if start < pos {
            continue;
        }
        out.push_str(&text[pos..start]);
        out.push_str(&paint(&text[start..end]));
        pos = end;
    }
    out.push_str(&text[pos..]);
    out
}
