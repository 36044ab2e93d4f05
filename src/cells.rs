//! Cell measurement and padding.
//!
//! Width is the raw `char` count of a string. Wide characters (CJK, emoji)
//! count as one, so tables containing them will not line up on a terminal;
//! simple-table markup measures columns the same way.

/// The padding symbol used when none is given.
pub const SPACE: &str = " ";

/// Get the width of a string in cells.
///
/// # Examples
///
/// ```
/// use rst_table::cells::cell_len;
///
/// assert_eq!(cell_len("hello"), 5);
/// assert_eq!(cell_len("héllo"), 5);
/// ```
#[must_use]
pub fn cell_len(text: &str) -> usize {
    text.chars().count()
}

/// Return `count` copies of `symbol` (a space when `symbol` is `None`).
#[must_use]
pub fn pad(count: usize, symbol: Option<&str>) -> String {
    symbol.unwrap_or(SPACE).repeat(count)
}

/// Right-pad a string with spaces to `total` cells.
///
/// Strings already `total` cells or longer are returned unchanged: this
/// never truncates.
#[must_use]
pub fn set_cell_size(text: &str, total: usize) -> String {
    let current = cell_len(text);
    if current >= total {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + (total - current));
    out.push_str(text);
    out.push_str(&pad(total - current, None));
    out
}
