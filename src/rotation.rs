//! Cyclic rotation helpers.
//!
//! All modulo arithmetic over variable-length weekday lists lives here.
//!
//! # Example
//!
//! ```
//! use cooking_rota::rotation::{block_slice, rotate};
//!
//! let days = ["Mon", "Wed", "Fri"];
//! assert_eq!(rotate(&days, 1), vec!["Wed", "Fri", "Mon"]);
//! assert_eq!(block_slice(&days, 2, 2), vec!["Fri", "Mon"]);
//! ```

/// Returns `list` rotated so that `list[start % len]` comes first.
///
/// Empty input yields an empty output.
pub fn rotate<T: Clone>(list: &[T], start: usize) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    let start = start % list.len();
    list[start..].iter().chain(&list[..start]).cloned().collect()
}

/// Returns `len` consecutive elements starting at `offset`, wrapping around.
///
/// Element `j` of the result is `list[(offset + j) % list.len()]`, so a
/// block longer than the list repeats elements. Empty input yields an
/// empty output.
pub fn block_slice<T: Clone>(list: &[T], offset: usize, len: usize) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    let start = offset % list.len();
    (0..len)
        .map(|j| list[(start + j % list.len()) % list.len()].clone())
        .collect()
}
