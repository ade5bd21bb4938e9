//! Terminal table renderer
//!
//! Fixed-width, word-wrapping, box-drawing layout for monospaced output.
//! Each column has a fixed width and alignment; a logical row may span
//! several physical lines when cells wrap.

use crate::core::model::{Column, ShopTable};

const H_DELIM: char = '|';
const V_DELIM: char = '-';
const X_DELIM: char = '+';

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Vertical alignment of short cells within a multi-line row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Bottom,
}

/// Fixed terminal layout per column.
fn layout(column: Column) -> (usize, Align) {
    match column {
        Column::Name => (20, Align::Left),
        Column::Price => (10, Align::Right),
        Column::Weight => (10, Align::Right),
        Column::Ac => (8, Align::Center),
        Column::Damage => (16, Align::Center),
        Column::Properties => (24, Align::Left),
        Column::Category => (16, Align::Center),
        Column::Source => (8, Align::Center),
    }
}

/// Render the whole shop as a box-drawn table. The header is centered and
/// bottom-aligned with rules above and below; data rows are top-aligned with
/// a rule below each (the previous rule doubles as their top edge).
pub fn render_table(shop: &ShopTable) -> String {
    let widths: Vec<usize> = shop.columns.iter().map(|c| layout(*c).0).collect();
    let aligns: Vec<Align> = shop.columns.iter().map(|c| layout(*c).1).collect();
    let header_aligns = vec![Align::Center; widths.len()];

    let mut out = String::new();
    out.push_str(&render_row(
        &shop.titles(),
        &widths,
        &header_aligns,
        VAlign::Bottom,
        true,
        true,
    ));
    for row in &shop.rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&render_row(
            &cells,
            &widths,
            &aligns,
            VAlign::Top,
            false,
            true,
        ));
    }
    out
}

/// Render one logical row: wrap every cell to its column width, pad all
/// cells to the tallest cell's line count, and frame the lines with box
/// characters.
///
/// # Panics
///
/// Panics when the cell, width, and alignment lists differ in length;
/// callers own that invariant.
pub fn render_row(
    cells: &[&str],
    widths: &[usize],
    aligns: &[Align],
    v_align: VAlign,
    rule_above: bool,
    rule_below: bool,
) -> String {
    assert!(
        cells.len() == widths.len() && widths.len() == aligns.len(),
        "cells, widths, and alignments must have equal lengths"
    );

    let mut boxes: Vec<Vec<String>> = Vec::with_capacity(cells.len());
    let mut height = 1;
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        let lines = wrap_cell(cell, *width, *align);
        height = height.max(lines.len());
        boxes.push(lines);
    }
    for (i, lines) in boxes.iter_mut().enumerate() {
        let blank = pad("", widths[i], aligns[i]);
        while lines.len() < height {
            match v_align {
                VAlign::Top => lines.push(blank.clone()),
                VAlign::Bottom => lines.insert(0, blank.clone()),
            }
        }
    }

    let mut out = String::new();
    if rule_above {
        out.push_str(&rule(widths));
    }
    for line in 0..height {
        out.push(H_DELIM);
        for cell_lines in &boxes {
            out.push_str(&cell_lines[line]);
            out.push(H_DELIM);
        }
        out.push('\n');
    }
    if rule_below {
        out.push_str(&rule(widths));
    }
    out
}

fn rule(widths: &[usize]) -> String {
    let mut out = String::new();
    out.push(X_DELIM);
    for width in widths {
        for _ in 0..*width {
            out.push(V_DELIM);
        }
        out.push(X_DELIM);
    }
    out.push('\n');
    out
}

/// Word-wrap a cell to its column width, padding every line. Words are
/// packed greedily; a single word longer than the width is split hard with a
/// trailing hyphen.
fn wrap_cell(text: &str, width: usize, align: Align) -> Vec<String> {
    let trimmed = text.trim();
    let mut chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= width {
        return vec![pad(trimmed, width, align)];
    }

    let mut lines = Vec::new();
    while !chars.is_empty() {
        if chars.len() <= width {
            lines.push(pad(&chars.iter().collect::<String>(), width, align));
            break;
        }
        // Largest prefix of at most `width` chars followed by whitespace.
        match (1..=width).rev().find(|&k| chars[k].is_whitespace()) {
            Some(cut) => {
                let line: String = chars[..cut].iter().collect();
                lines.push(pad(line.trim_end(), width, align));
                chars.drain(..=cut);
            }
            None => {
                // First word is longer than the column; hard split.
                let mut line: String = chars[..width - 1].iter().collect();
                line.push('-');
                lines.push(pad(&line, width, align));
                chars.drain(..width - 1);
            }
        }
        while chars.first().is_some_and(|c| c.is_whitespace()) {
            chars.remove(0);
        }
    }
    lines
}

/// Pad a line to the column width. Odd center padding puts the extra space
/// on the left.
fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    let n = width.saturating_sub(len);
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(n)),
        Align::Right => format!("{}{}", " ".repeat(n), text),
        Align::Center => format!("{}{}{}", " ".repeat(n - n / 2), text, " ".repeat(n / 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::project_columns;

    #[test]
    fn test_pad_left_right() {
        assert_eq!(pad("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad("ab", 5, Align::Right), "   ab");
    }

    #[test]
    fn test_pad_center_extra_space_goes_left() {
        assert_eq!(pad("ab", 5, Align::Center), "  ab ");
        assert_eq!(pad("ab", 6, Align::Center), "  ab  ");
    }

    #[test]
    fn test_wrap_exact_fit_is_single_line() {
        let lines = wrap_cell("abcde", 5, Align::Left);
        assert_eq!(lines, ["abcde"]);
    }

    #[test]
    fn test_wrap_packs_words_greedily() {
        let lines = wrap_cell("light thrown finesse", 8, Align::Left);
        assert_eq!(lines, ["light   ", "thrown  ", "finesse "]);
        assert!(lines.iter().all(|l| l.chars().count() == 8));
    }

    #[test]
    fn test_wrap_hard_splits_long_word_with_hyphen() {
        let lines = wrap_cell("extraordinary", 6, Align::Left);
        assert_eq!(lines[0], "extra-");
        assert_eq!(lines[1], "ordin-");
        assert_eq!(lines[2], "ary   ");
    }

    #[test]
    fn test_wrap_overlong_text_stays_within_width() {
        let lines = wrap_cell("a quarterstaff of surprising quality", 10, Align::Left);
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn test_render_row_pads_to_tallest_cell() {
        let out = render_row(
            &["one two three", "x"],
            &[5, 3],
            &[Align::Left, Align::Left],
            VAlign::Top,
            false,
            false,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "|one  |x  |");
        assert_eq!(lines[1], "|two  |   |");
        assert_eq!(lines[2], "|three|   |");
    }

    #[test]
    fn test_render_row_bottom_alignment() {
        let out = render_row(
            &["one two", "x"],
            &[3, 3],
            &[Align::Left, Align::Left],
            VAlign::Bottom,
            false,
            false,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "|one|   |");
        assert_eq!(lines[1], "|two|x  |");
    }

    #[test]
    fn test_render_row_rules() {
        let out = render_row(
            &["a"],
            &[3],
            &[Align::Left],
            VAlign::Top,
            true,
            true,
        );
        assert_eq!(out, "+---+\n|a  |\n+---+\n");
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn test_render_row_length_mismatch_panics() {
        render_row(&["a", "b"], &[3], &[Align::Left], VAlign::Top, false, false);
    }

    #[test]
    fn test_render_table_shape() {
        let shop = ShopTable {
            columns: project_columns(false, false),
            rows: vec![vec![
                "Club".to_string(),
                "1 sp".to_string(),
                "2 lb.".to_string(),
                "Weapons".to_string(),
                "PHB".to_string(),
            ]],
        };
        let out = render_table(&shop);
        let lines: Vec<&str> = out.lines().collect();
        // Top rule, header, header rule, data row, bottom rule.
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("Name"));
        assert!(lines[3].starts_with("|Club"));
        // Every line spans the same total width.
        let total = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == total));
    }
}
