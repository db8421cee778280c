use std::sync::OnceLock;

use regex::Regex;

use crate::models::Align;

/// Pipe tables: `| a | b |` rows with an optional `| :-: | --: |` separator.
pub struct Table;

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| {
        Regex::new(r"^\s*\|?[\s:-]+\|[\s|:-]*$").expect("Invalid table separator regex")
    })
}

fn center_regex() -> &'static Regex {
    static CENTER: OnceLock<Regex> = OnceLock::new();
    CENTER.get_or_init(|| Regex::new(r"^\s*:-+:\s*$").expect("Invalid center regex"))
}

fn right_regex() -> &'static Regex {
    static RIGHT: OnceLock<Regex> = OnceLock::new();
    RIGHT.get_or_init(|| Regex::new(r"^\s*-+:\s*$").expect("Invalid right regex"))
}

impl Table {
    pub const PIPE: char = '|';

    pub fn is_row(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PIPE) && trimmed.ends_with(Self::PIPE)
    }

    /// Splits a row into raw (untrimmed) cells, dropping the text outside the outer pipes.
    ///
    /// A pipe separates cells unless it directly follows a backtick or has an odd number of
    /// backticks after it (i.e. sits inside a code span).
    pub fn split_cells(trimmed: &str) -> Vec<&str> {
        let bytes = trimmed.as_bytes();
        let mut ticks_after = bytes.iter().filter(|b| **b == b'`').count();
        let mut pieces = vec![];
        let mut start = 0;
        let mut prev = None;
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'`' {
                ticks_after -= 1;
            } else if *b == b'|' && prev != Some(b'`') && ticks_after % 2 == 0 {
                pieces.push(&trimmed[start..i]);
                start = i + 1;
            }
            prev = Some(*b);
        }
        pieces.push(&trimmed[start..]);

        // Drop the pieces before the first and after the last separator.
        if pieces.len() < 2 {
            return vec![];
        }
        pieces[1..pieces.len() - 1].to_vec()
    }

    /// Column alignments if the row is a header separator.
    pub fn separator(trimmed: &str) -> Option<Vec<Align>> {
        if !separator_regex().is_match(trimmed) {
            return None;
        }
        Some(
            Self::split_cells(trimmed)
                .into_iter()
                .map(|cell| {
                    if center_regex().is_match(cell) {
                        Align::Center
                    } else if right_regex().is_match(cell) {
                        Align::Right
                    } else {
                        Align::Left
                    }
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_simple_row() {
        assert_eq!(Table::split_cells("| a | b |"), vec![" a ", " b "]);
    }

    #[test]
    fn pipes_inside_code_do_not_split() {
        assert_eq!(
            Table::split_cells("| `a|b` | c |"),
            vec![" `a|b` ", " c "]
        );
    }

    #[test]
    fn empty_cells_are_kept() {
        assert_eq!(Table::split_cells("|| x |"), vec!["", " x "]);
    }

    #[test]
    fn row_detection() {
        assert!(Table::is_row("| a |"));
        assert!(!Table::is_row("| a"));
        assert!(!Table::is_row("a |"));
    }

    #[test]
    fn separator_alignment() {
        assert_eq!(
            Table::separator("| :-: | ---: |"),
            Some(vec![Align::Center, Align::Right])
        );
        assert_eq!(
            Table::separator("|:---|---|"),
            Some(vec![Align::Left, Align::Left])
        );
    }

    #[test]
    fn data_row_is_not_a_separator() {
        assert_eq!(Table::separator("| a | b |"), None);
    }
}
