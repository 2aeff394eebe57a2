//! Plain-text item lists: one `label,magnitude` or `label=magnitude` per line.
//!
//! ```text
//! # parameter counts
//! GPT-2, 1.5e9
//! GPT-3 = 1.75e11
//! ```

use pyramidview_core::Item;

use crate::error::IoError;

/// Parse an item list. Blank lines and `#` comments are skipped.
///
/// The label is everything before the last separator, so labels may contain
/// commas as long as the magnitude comes last.
pub fn parse_item_list(text: &str) -> Result<Vec<Item>, IoError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            parse_item(line).map_err(|message| IoError::Parse {
                line: line_no,
                message,
            })
        })
        .collect()
}

/// Parse a single `label=magnitude` or `label,magnitude` entry.
pub fn parse_item_entry(entry: &str) -> Result<Item, IoError> {
    parse_item(entry.trim()).map_err(|message| IoError::Parse { line: 1, message })
}

fn parse_item(line: &str) -> Result<Item, String> {
    let split_at = line
        .rfind(|c: char| c == '=' || c == ',')
        .ok_or_else(|| format!("expected 'label,magnitude', got '{line}'"))?;
    let label = line[..split_at].trim();
    let raw = line[split_at + 1..].trim();
    if label.is_empty() {
        return Err(format!("missing label in '{line}'"));
    }
    let magnitude: f64 = raw
        .replace('_', "")
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    Ok(Item::new(label, magnitude))
}
