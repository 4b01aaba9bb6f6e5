//! Common types for chowmap.

use std::fmt;

/// One restaurant entry, as parsed from the flat-text list and persisted
/// to CSV between the two stages.
///
/// Field order matches the CSV column order: Name, Neighborhood, Address,
/// Cuisine, Price. The `address` field stays empty until the lookup stage
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Restaurant {
    /// Restaurant name (e.g., "Panda Inn")
    #[serde(rename = "Name")]
    pub name: String,
    /// Neighborhood, one of the known LA-area place names (e.g., "Alhambra")
    #[serde(rename = "Neighborhood")]
    pub neighborhood: String,
    /// Street address, empty until resolved
    #[serde(rename = "Address", default)]
    pub address: String,
    /// Cuisine description (e.g., "Chinese")
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    /// Price tier token (e.g., "$$"), empty when the source line had none
    #[serde(rename = "Price")]
    pub price: String,
}

impl Restaurant {
    /// Whether this record already has a resolved address.
    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    /// Cache key for lookup results, shared by records that name the same
    /// restaurant in the same neighborhood.
    pub fn cache_key(&self) -> String {
        format!("{}|{}", self.name, self.neighborhood)
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.neighborhood)
    }
}

/// One candidate match returned by the places search.
///
/// Ephemeral: consumed immediately to pick or reject an address, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceCandidate {
    /// Provider place id
    pub id: String,
    /// Display name as reported by the provider
    pub name: String,
    /// Canonical formatted address
    pub address: String,
    /// Place-type tags, possibly empty
    pub types: Vec<String>,
}

impl PlaceCandidate {
    /// One-line label for the disambiguation menu.
    pub fn label(&self) -> String {
        if self.types.is_empty() {
            format!("{}, {}", self.name, self.address)
        } else {
            format!("{}, {} [{}]", self.name, self.address, self.types.join(", "))
        }
    }
}

/// Billed rate per text search request, in USD.
pub const TEXT_SEARCH_COST_USD: f64 = 0.032;

/// End-of-run accounting for the lookup stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Total records in the input file
    pub total_records: usize,
    /// Records holding a non-empty address after the run
    pub with_address: usize,
    /// Search requests issued, successful or not
    pub requests_issued: usize,
}

impl RunSummary {
    /// Estimated spend for the run, requests times the per-request rate.
    pub fn estimated_cost(&self) -> f64 {
        self.requests_issued as f64 * TEXT_SEARCH_COST_USD
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        writeln!(f, "  Records:         {}", self.total_records)?;
        writeln!(f, "  With address:    {}", self.with_address)?;
        writeln!(f, "  Search requests: {}", self.requests_issued)?;
        write!(f, "  Estimated cost:  ${:.2}", self.estimated_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_joins_name_and_neighborhood() {
        let record = Restaurant {
            name: "Panda Inn".to_string(),
            neighborhood: "Alhambra".to_string(),
            ..Default::default()
        };
        assert_eq!(record.cache_key(), "Panda Inn|Alhambra");
    }

    #[test]
    fn test_has_address() {
        let mut record = Restaurant::default();
        assert!(!record.has_address());
        record.address = "123 Main St".to_string();
        assert!(record.has_address());
    }

    #[test]
    fn test_candidate_label_with_and_without_types() {
        let mut candidate = PlaceCandidate {
            id: "abc".to_string(),
            name: "Panda Inn".to_string(),
            address: "3488 W Main St, Alhambra, CA 91801".to_string(),
            types: vec![],
        };
        assert_eq!(
            candidate.label(),
            "Panda Inn, 3488 W Main St, Alhambra, CA 91801"
        );

        candidate.types = vec!["restaurant".to_string(), "food".to_string()];
        assert_eq!(
            candidate.label(),
            "Panda Inn, 3488 W Main St, Alhambra, CA 91801 [restaurant, food]"
        );
    }

    #[test]
    fn test_summary_cost_uses_fixed_rate() {
        let summary = RunSummary {
            total_records: 100,
            with_address: 90,
            requests_issued: 50,
        };
        assert!((summary.estimated_cost() - 1.6).abs() < f64::EPSILON);

        let text = summary.to_string();
        assert!(text.contains("Search requests: 50"));
        assert!(text.contains("$1.60"));
    }
}
