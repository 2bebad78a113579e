//! Reference-string parsing.
//!
//! Raw form input arrives as one text field holding a separator-delimited
//! list: page identifiers for page replacement, cylinder numbers for disk
//! scheduling. The three separator modes match what the form offers.

use std::str::FromStr;

use oslab_error::{Result, SimError};

/// How the raw reference-string text is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Comma, optionally followed by whitespace: `7, 0,1`.
    Comma,
    /// Semicolon, optionally followed by whitespace: `7; 0;1`.
    Semicolon,
    /// Any run of whitespace (spaces, tabs, newlines).
    Whitespace,
}

impl Separator {
    pub const ALL: [Self; 3] = [Self::Comma, Self::Semicolon, Self::Whitespace];

    /// Stable identifier used in saved form state and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Whitespace => "whitespace",
        }
    }

    /// Split raw text into tokens.
    ///
    /// For the punctuation separators, whitespace following the delimiter is
    /// consumed along with it, so `"7, 0"` yields `["7", "0"]`.
    pub fn split(self, input: &str) -> Vec<String> {
        match self {
            Self::Comma => split_on(input, ','),
            Self::Semicolon => split_on(input, ';'),
            Self::Whitespace => input.split_whitespace().map(str::to_owned).collect(),
        }
    }
}

fn split_on(input: &str, delimiter: char) -> Vec<String> {
    input
        .split(delimiter)
        .map(|token| token.trim_start().to_owned())
        .collect()
}

impl FromStr for Separator {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|sep| sep.id() == s)
            .ok_or_else(|| SimError::UnknownSeparator { id: s.to_owned() })
    }
}

/// Split a page-replacement reference string into page identifiers.
pub fn parse_pages(input: &str, separator: Separator) -> Vec<String> {
    separator.split(input)
}

/// Parse a disk-scheduling reference string into cylinder numbers.
pub fn parse_cylinders(input: &str, separator: Separator) -> Result<Vec<u32>> {
    separator
        .split(input)
        .into_iter()
        .map(|token| {
            token.parse::<u32>().map_err(|_| SimError::InvalidToken {
                token: token.clone(),
            })
        })
        .collect()
}
