//! Fixed-width console rendering of the relation table.

use ring_game_core::{MoveRelations, MoveSet};

/// Total width of rule lines and table rows
pub const TABLE_WIDTH: usize = 128;

/// Header of move names, then the wins, losses and draws rows
pub fn relation_table(moves: &MoveSet, table: &[MoveRelations]) -> String {
    let rows = [
        moves.iter().map(str::to_string).collect(),
        labelled("Wins:", table.iter().map(|r| &r.beats)),
        labelled("Loses to:", table.iter().map(|r| &r.loses_to)),
        labelled("Draw if:", table.iter().map(|r| &r.draws_with)),
    ];

    let mut out = rule('-');
    for cells in &rows {
        out.push('\n');
        out.push_str(&row(cells));
        out.push('\n');
        out.push_str(&rule('-'));
    }
    out
}

fn labelled<'a>(label: &str, lists: impl Iterator<Item = &'a Vec<String>>) -> Vec<String> {
    lists
        .map(|names| {
            names
                .iter()
                .fold(label.to_string(), |cell, name| cell + " " + name)
        })
        .collect()
}

pub fn rule(c: char) -> String {
    c.to_string().repeat(TABLE_WIDTH)
}

/// `|` then each cell centered in an equal share of the width and closed by `|`
fn row(cells: &[String]) -> String {
    let width = TABLE_WIDTH.saturating_sub(cells.len()) / cells.len().max(1);
    cells.iter().fold("|".to_string(), |mut line, cell| {
        line.push_str(&center(cell, width));
        line.push('|');
        line
    })
}

/// Center `text` in `width` columns, truncating with `...` when it does not fit
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let text: String = if len > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        (kept + "...").chars().take(width).collect()
    } else {
        text.to_string()
    };

    let pad = width - text.chars().count();
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
