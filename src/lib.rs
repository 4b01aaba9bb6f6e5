//! # chowmap
//!
//! Turn a flat-text list of LA restaurants into a mapping-ready CSV with
//! resolved street addresses.
//!
//! The pipeline has two stages, run as separate binaries:
//!
//! - **`chowmap-parse`** reads the flat-text list (one restaurant per
//!   line: name + neighborhood, cuisine, price tier separated by bullets)
//!   and writes a CSV with an empty Address column.
//! - **`chowmap-lookup`** reads that CSV and, for every record without an
//!   address, queries the Google Places text search endpoint. A single
//!   match is accepted automatically; multiple matches go to an
//!   interactive menu; no match (or a failed request) falls back to
//!   manual entry. The CSV is rewritten after every resolved record, so
//!   an interrupted run can simply be restarted.
//!
//! The stages share no state beyond the CSV file.
//!
//! ## Input format
//!
//! ```text
//! Panda Inn Alhambra • Chinese • $$
//! Jitlada East Hollywood • Thai • $$
//! Guelaguetza Koreatown • Oaxacan
//! ```
//!
//! The neighborhood is recognized as a trailing substring of the first
//! segment, matched against a fixed set of known LA-area names
//! (longest name first, so "West Hollywood" beats "Hollywood").
//!
//! ## Library use
//!
//! ```rust
//! use chowmap::ListingParser;
//!
//! let parser = ListingParser::new();
//! let records = parser.parse_text("Panda Inn Alhambra • Chinese • $$")?;
//! assert_eq!(records[0].name, "Panda Inn");
//! assert_eq!(records[0].neighborhood, "Alhambra");
//! # Ok::<(), chowmap::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod neighborhoods;
pub mod parser;
pub mod places;
pub mod prompt;
pub mod resolver;
pub mod store;
pub mod types;

// Re-export main API
pub use error::{Error, Result};
pub use parser::ListingParser;
pub use places::{PlaceSearch, PlacesClient};
pub use prompt::{Console, MenuChoice};
pub use resolver::Resolver;
pub use types::{PlaceCandidate, Restaurant, RunSummary};
