// * HTML Row Extractor
// * Finds the highscores row for a player and returns its cell texts.
// * First match wins: rows are scanned in document order and the first one whose
// * text contains the name (case-insensitive substring) is taken. Header rows
// * (no <td> cells) never match.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

// * Precompiled CSS selectors
static SELECTOR_TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Invalid tr selector"));
static SELECTOR_TD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("Invalid td selector"));

/// Returns the trimmed `<td>` texts of the first row mentioning `username`,
/// or `None` when no row does.
pub fn find_player_row(html: &str, username: &str) -> Option<Vec<String>> {
    let needle = username.trim().to_lowercase();
    // ! A blank needle would match every row
    if needle.is_empty() {
        return None;
    }

    let document = Html::parse_document(html);
    document
        .select(&SELECTOR_TR)
        .filter(|row| row.select(&SELECTOR_TD).next().is_some())
        .find(|row| row_text(row).to_lowercase().contains(&needle))
        .map(|row| row_cells(&row))
}

fn row_text(row: &ElementRef) -> String {
    row.text().collect()
}

fn row_cells(row: &ElementRef) -> Vec<String> {
    row.select(&SELECTOR_TD)
        .map(|td| {
            let text: String = td.text().collect();
            text.trim().to_string()
        })
        .collect()
}
