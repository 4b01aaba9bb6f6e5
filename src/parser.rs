//! Restaurant list parsing functionality.

use crate::error::{Error, Result};
use crate::neighborhoods;
use crate::types::Restaurant;

/// Default field delimiter in the flat-text list.
pub const DEFAULT_DELIMITER: char = '•';

/// Line-oriented parser for the flat-text restaurant list.
///
/// Each non-blank line holds a name followed by a known neighborhood,
/// then optionally a cuisine and a dollar-sign price tier, separated by
/// bullets:
///
/// ```text
/// Panda Inn Alhambra • Chinese • $$
/// ```
#[derive(Debug, Clone)]
pub struct ListingParser {
    delimiter: char,
}

impl ListingParser {
    /// Create a new parser with the default bullet delimiter.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse one trimmed non-empty line into a [`Restaurant`].
    ///
    /// The last delimiter-separated segment containing a `$` is taken as
    /// the price tier; of the remaining segments the first must end with a
    /// known neighborhood name and the second, when present, is the
    /// cuisine.
    ///
    /// # Errors
    ///
    /// Returns a parse error quoting the line when no known neighborhood
    /// matches, and when the cuisine segment is missing or empty. Either
    /// error aborts a [`parse_text`](Self::parse_text) run.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chowmap::ListingParser;
    ///
    /// let parser = ListingParser::new();
    /// let record = parser.parse_line("Panda Inn Alhambra • Chinese • $$")?;
    /// assert_eq!(record.name, "Panda Inn");
    /// assert_eq!(record.neighborhood, "Alhambra");
    /// # Ok::<(), chowmap::Error>(())
    /// ```
    pub fn parse_line(&self, line: &str) -> Result<Restaurant> {
        let mut segments: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();

        // Price is the last dollar-bearing segment, wherever it sits.
        let price = match segments.iter().rposition(|s| s.contains('$')) {
            Some(index) => segments.remove(index),
            None => "",
        };

        let blob = segments.first().copied().unwrap_or("");
        let cuisine = segments.get(1).copied().unwrap_or("");

        let Some((name, neighborhood)) = neighborhoods::split_trailing(blob) else {
            return Err(Error::parse(format!(
                "no known neighborhood in line {line:?} (name segment: {blob:?}, price: {price:?})"
            )));
        };
        if cuisine.is_empty() {
            return Err(Error::parse(format!(
                "missing cuisine in line {line:?} (parsed {name:?} in {neighborhood:?})"
            )));
        }

        Ok(Restaurant {
            name: name.to_string(),
            neighborhood: neighborhood.to_string(),
            address: String::new(),
            cuisine: cuisine.to_string(),
            price: price.to_string(),
        })
    }

    /// Parse a whole document, one record per non-blank line.
    ///
    /// The first malformed line aborts the run; there is no
    /// partial-success mode.
    pub fn parse_text(&self, text: &str) -> Result<Vec<Restaurant>> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line))
            .collect()
    }
}

impl Default for ListingParser {
    fn default() -> Self {
        Self::new()
    }
}
