// src/core/scanner.rs
use crate::core::grid::Grid;
use crate::core::types::OccurrenceCount;

/// Counts overlapping occurrences of `word` along every row of the grid,
/// scanning left to right.
pub fn count_horizontal(grid: &Grid, word: &str) -> OccurrenceCount {
    let word: Vec<char> = word.chars().collect();
    (0..grid.rows())
        .map(|r| count_in_line(grid.row(r), &word))
        .sum()
}

/// Counts overlapping occurrences of `word` along every column of the grid,
/// scanning top to bottom. Same algorithm as the horizontal pass, applied to
/// the column strings instead of the rows.
pub fn count_vertical(grid: &Grid, word: &str) -> OccurrenceCount {
    let word: Vec<char> = word.chars().collect();
    (0..grid.cols())
        .map(|c| count_in_line(&grid.column(c), &word))
        .sum()
}

/// Overlapping match count of `word` inside a single line.
///
/// An occurrence is recorded at every start index `i` with
/// `line[i..i+len] == word`; the scan resumes at `i + 1`, not `i + len`, so
/// "aa" occurs three times in "aaaa". Empty words and words longer than the
/// line count as zero.
fn count_in_line(line: &[char], word: &[char]) -> OccurrenceCount {
    if word.is_empty() || word.len() > line.len() {
        return 0;
    }
    line.windows(word.len()).filter(|w| *w == word).count() as OccurrenceCount
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn overlapping_matches_are_all_counted() {
        assert_eq!(count_in_line(&chars("aaaa"), &chars("aa")), 3);
        assert_eq!(count_in_line(&chars("ababa"), &chars("aba")), 2);
    }

    #[test]
    fn word_longer_than_line_counts_zero() {
        assert_eq!(count_in_line(&chars("ab"), &chars("abc")), 0);
    }

    #[test]
    fn empty_word_counts_zero() {
        assert_eq!(count_in_line(&chars("abc"), &[]), 0);
    }

    #[test]
    fn horizontal_sums_across_rows() {
        let grid = Grid::build(&["aaaa", "bbbb", "aaba"]).unwrap();
        assert_eq!(count_horizontal(&grid, "aa"), 4);
    }

    #[test]
    fn vertical_reads_columns_top_to_bottom() {
        let grid = Grid::build(&["ax", "bx", "cx"]).unwrap();
        assert_eq!(count_vertical(&grid, "abc"), 1);
        assert_eq!(count_vertical(&grid, "xx"), 2);
        // Reverse direction is not searched.
        assert_eq!(count_vertical(&grid, "cba"), 0);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let grid = Grid::build(&["Chill"]).unwrap();
        assert_eq!(count_horizontal(&grid, "chill"), 0);
        assert_eq!(count_horizontal(&grid, "Chill"), 1);
    }

    #[test]
    fn vertical_equals_horizontal_on_transpose() {
        let rows = ["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"];
        let grid = Grid::build(&rows).unwrap();

        let transposed: Vec<String> = (0..grid.cols())
            .map(|c| grid.column(c).into_iter().collect())
            .collect();
        let transpose = Grid::build(&transposed).unwrap();

        for word in ["chill", "cwinx", "ab", "dc", "q", "zz"] {
            assert_eq!(
                count_vertical(&grid, word),
                count_horizontal(&transpose, word),
                "direction symmetry broken for {word:?}"
            );
        }
    }
}
