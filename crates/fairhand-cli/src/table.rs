//! Box-drawing renderer for the outcome table.
//!
//! Cells read from the row player's perspective: "Win" means the row
//! move beats the column move.

use fairhand_core::{Outcome, OutcomeMatrix};

const HEADER: &str = "v PC\\User >";

pub fn render(matrix: &OutcomeMatrix) -> String {
    let widths = column_widths(matrix);

    let mut out = String::new();
    rule(&mut out, &widths, '╔', '═', '╤', '╗');

    let mut header: Vec<&str> = vec![HEADER];
    header.extend(matrix.moves().iter().map(String::as_str));
    line(&mut out, &widths, &header);

    for (name, cells) in matrix.rows() {
        rule(&mut out, &widths, '╟', '─', '┼', '╢');
        let mut row: Vec<&str> = vec![name];
        row.extend(cells.iter().map(|c| cell(*c)));
        line(&mut out, &widths, &row);
    }

    rule(&mut out, &widths, '╚', '═', '╧', '╝');
    out
}

fn cell(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::FirstWins => "Win",
        Outcome::SecondWins => "Lose",
        Outcome::Draw => "Draw",
    }
}

fn column_widths(matrix: &OutcomeMatrix) -> Vec<usize> {
    let mut label_width = HEADER.chars().count();
    for name in matrix.moves() {
        label_width = label_width.max(name.chars().count());
    }

    let mut widths = vec![label_width];
    for (col, name) in matrix.moves().iter().enumerate() {
        let mut w = name.chars().count();
        for row in 0..matrix.len() {
            w = w.max(cell(matrix.get(row, col)).len());
        }
        widths.push(w);
    }
    widths
}

fn rule(out: &mut String, widths: &[usize], left: char, fill: char, mid: char, right: char) {
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        for _ in 0..w + 2 {
            out.push(fill);
        }
    }
    out.push(right);
    out.push('\n');
}

fn line(out: &mut String, widths: &[usize], cells: &[&str]) {
    out.push('║');
    for (i, (w, text)) in widths.iter().zip(cells).enumerate() {
        if i > 0 {
            out.push('│');
        }
        let pad = w - text.chars().count();
        let left = pad / 2;
        out.push(' ');
        for _ in 0..left {
            out.push(' ');
        }
        out.push_str(text);
        for _ in 0..pad - left {
            out.push(' ');
        }
        out.push(' ');
    }
    out.push('║');
    out.push('\n');
}
