//! Comma-separated inventory parsing and availability lines.
//!
//! # Responsibility
//! - Split a comma-separated item list into clean item names.
//! - Produce the formatted "no stock" line for items outside a prefix.
//!
//! # Invariants
//! - Item order is preserved from the input list.
//! - The prefix check is case-insensitive; nothing else is.

/// Splits a comma-separated list into trimmed, non-empty items.
pub fn split_items(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns one availability line per item whose name does not start with
/// `prefix` (case-insensitive).
///
/// Each line has the fixed shape `Yes, we have no {item} today`.
pub fn missing_item_lines(list: &str, prefix: char) -> Vec<String> {
    let prefix = prefix.to_lowercase().next().unwrap_or(prefix);
    split_items(list)
        .into_iter()
        .filter(|item| {
            item.chars()
                .next()
                .map(|first| first.to_lowercase().next() != Some(prefix))
                .unwrap_or(false)
        })
        .map(|item| format!("Yes, we have no {item} today"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{missing_item_lines, split_items};

    #[test]
    fn split_trims_and_drops_empty_items() {
        assert_eq!(
            split_items(" apples , ,oranges,, kiwis "),
            vec!["apples", "oranges", "kiwis"]
        );
    }

    #[test]
    fn prefix_check_is_case_insensitive() {
        let lines = missing_item_lines("Apples,oranges", 'a');
        assert_eq!(lines, vec!["Yes, we have no oranges today"]);
    }
}
