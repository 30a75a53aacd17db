use crate::grid::{Coord, Grid};

/// Parses an array of string slices into a filled `Grid`.
///
/// Each string slice in the input array represents a row on the grid, starting from row 0.
/// The grid is square: its size is the number of rows, and every row must have exactly
/// that many characters. Only the uppercase letters `A`-`Z` are accepted. The resulting
/// cells carry no `word_id`, since no placement wrote them.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the grid.
///
/// # Returns
/// * `Ok(Grid)` if parsing is successful.
/// * `Err(String)` if:
///     - The input is empty.
///     - Any row's character length differs from the number of rows.
///     - A character outside `A`-`Z` is encountered.
///
/// # Examples
/// ```
/// use wordsearch_engine::utils::grid_from_str_array;
/// use wordsearch_engine::grid::Coord;
///
/// let grid = grid_from_str_array(&["SEH", "XAT", "QQQ"]).unwrap();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.letter_at(Coord::new(1, 2)), Some('T'));
///
/// assert!(grid_from_str_array(&["AB", "C"]).is_err());
/// assert!(grid_from_str_array(&["ab", "cd"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, String> {
    if s.is_empty() {
        return Err("Grid must have at least one row".to_string());
    }

    let size = s.len();
    let mut grid = Grid::blank(size);

    for (r, row_str) in s.iter().enumerate() {
        let len = row_str.chars().count();
        if len != size {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                r, len, size
            ));
        }

        for (c, letter) in row_str.chars().enumerate() {
            if !letter.is_ascii_uppercase() {
                return Err(format!(
                    "Unrecognized character '{}' in row {} col {}",
                    letter, r, c
                ));
            }
            grid.set_letter(Coord::new(r, c), letter, None);
        }
    }

    Ok(grid)
}

/// Formats a number of seconds as `MM:SS`.
///
/// # Examples
/// ```
/// use wordsearch_engine::utils::format_elapsed;
/// assert_eq!(format_elapsed(0), "00:00");
/// assert_eq!(format_elapsed(754), "12:34");
/// ```
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
