// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned text tables.
//!
//! Cell widths ignore ANSI color sequences so colored cells line up with
//! plain ones.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Column {
    header: &'static str,
    align: Align,
    max: Option<usize>,
}

impl Column {
    pub fn left(header: &'static str) -> Self {
        Self { header, align: Align::Left, max: None }
    }

    pub fn right(header: &'static str) -> Self {
        Self { header, align: Align::Right, max: None }
    }

    /// Truncate plain cells wider than `max` characters with a trailing ellipsis.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn row(&mut self, cells: Vec<String>) {
        let mut cells = cells;
        cells.resize(self.columns.len(), String::new());
        for (cell, column) in cells.iter_mut().zip(&self.columns) {
            if let Some(max) = column.max {
                *cell = truncate(cell, max);
            }
        }
        self.rows.push(cells);
    }

    pub fn to_text(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| visible_width(&row[i]))
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut text = String::new();
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|c| crate::color::header(c.header))
            .collect();
        push_line(&mut text, &self.columns, &widths, &headers);
        for row in &self.rows {
            push_line(&mut text, &self.columns, &widths, row);
        }
        text
    }
}

fn push_line(text: &mut String, columns: &[Column], widths: &[usize], cells: &[String]) {
    let last = columns.len().saturating_sub(1);
    let mut line = String::new();
    for (i, ((cell, column), width)) in cells.iter().zip(columns).zip(widths).enumerate() {
        let pad = width.saturating_sub(visible_width(cell));
        match column.align {
            Align::Left if i == last => line.push_str(cell),
            Align::Left => {
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            }
            Align::Right => {
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
            }
        }
        if i != last {
            line.push_str("  ");
        }
    }
    text.push_str(line.trim_end());
    text.push('\n');
}

/// Terminal column count, excluding `ESC [ ... m` sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => width += char_width(c),
        }
    }
    width
}

/// Columns a character occupies: 2 for wide East Asian text and emoji
/// presentation symbols (including the verdict markers), 0 for variation
/// selectors and zero-width joiners, 1 otherwise.
fn char_width(c: char) -> usize {
    match c {
        '\u{200B}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' => 0,
        '\u{231A}'..='\u{231B}'
        | '\u{23E9}'..='\u{23EC}'
        | '\u{23F0}'
        | '\u{23F3}'
        | '\u{25FD}'..='\u{25FE}'
        | '\u{2614}'..='\u{2615}'
        | '\u{26A1}'
        | '\u{26AA}'..='\u{26AB}'
        | '\u{26BD}'..='\u{26BE}'
        | '\u{26C4}'..='\u{26C5}'
        | '\u{26D4}'
        | '\u{26EA}'
        | '\u{26F2}'..='\u{26F5}'
        | '\u{26FA}'
        | '\u{26FD}'
        | '\u{2705}'
        | '\u{270A}'..='\u{270B}'
        | '\u{2728}'
        | '\u{274C}'
        | '\u{274E}'
        | '\u{2753}'..='\u{2755}'
        | '\u{2757}'
        | '\u{2795}'..='\u{2797}'
        | '\u{27B0}'
        | '\u{27BF}'
        | '\u{2B1B}'..='\u{2B1C}'
        | '\u{2B50}'
        | '\u{2B55}'
        | '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{303E}'
        | '\u{3041}'..='\u{33FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{A000}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}'
        | '\u{1F300}'..='\u{1F64F}'
        | '\u{1F680}'..='\u{1F6FF}'
        | '\u{1F900}'..='\u{1F9FF}'
        | '\u{1FA70}'..='\u{1FAFF}'
        | '\u{20000}'..='\u{3FFFD}' => 2,
        _ => 1,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if max == 0 || s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
