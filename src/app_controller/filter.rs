/// Prompt text the search box starts out with.
pub const SEARCH_PLACEHOLDER: &str = "Search by Flight Number...";

/// The flight number to look up, or `None` when the box holds nothing usable.
pub(super) fn search_key(input: &str) -> Option<&str> {
    let key = input.trim();
    if key.is_empty() || key == SEARCH_PLACEHOLDER {
        return None;
    }
    Some(key)
}
