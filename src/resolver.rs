//! The lookup engine: sequential address resolution with caching and
//! incremental persistence.
//!
//! Records are visited strictly in order; one record is fully resolved,
//! including any operator prompts, before the next begins. Every record
//! gaining a non-empty address triggers a full rewrite of the output file,
//! so an interrupted run can simply be restarted: rows that already carry
//! an address are never looked up again.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::Result;
use crate::places::PlaceSearch;
use crate::prompt::{Console, MenuChoice};
use crate::store;
use crate::types::{Restaurant, RunSummary};

/// Query qualifier appended to every search.
const QUERY_SUFFIX: &str = "Los Angeles, CA";

/// How a record got its address.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    CacheHit,
    AutoAccepted,
    Picked,
    ManuallyEntered,
    Skipped,
}

/// Sequential address resolver for a parsed record set.
#[derive(Debug)]
pub struct Resolver<S, R, W> {
    search: S,
    console: Console<R, W>,
    cache: HashMap<String, String>,
    requests_issued: usize,
}

impl<S: PlaceSearch, R: BufRead, W: Write> Resolver<S, R, W> {
    /// Create a resolver over a search collaborator and operator console.
    pub fn new(search: S, console: Console<R, W>) -> Self {
        Self {
            search,
            console,
            cache: HashMap::new(),
            requests_issued: 0,
        }
    }

    /// Search requests issued so far, successful or not.
    pub fn requests_issued(&self) -> usize {
        self.requests_issued
    }

    /// Resolve every record missing an address, in order.
    ///
    /// Mutates `records` in place. After each record that ends up with a
    /// non-empty address, the entire record set is rewritten to `output`.
    /// Ends by printing a [`RunSummary`] to the console and returning it.
    pub async fn resolve_all(
        &mut self,
        records: &mut [Restaurant],
        output: &Path,
    ) -> Result<RunSummary> {
        let total = records.len();
        for index in 0..total {
            if records[index].has_address() {
                continue;
            }
            self.console
                .say(&format!("[{}/{}] {}", index + 1, total, records[index]))?;

            let (address, outcome) = self.resolve_one(&records[index]).await?;
            self.report(&address, &outcome)?;
            records[index].address = address;

            if records[index].has_address() {
                store::save(output, records)?;
            }
        }

        let summary = RunSummary {
            total_records: total,
            with_address: records.iter().filter(|r| r.has_address()).count(),
            requests_issued: self.requests_issued,
        };
        self.console.say("")?;
        self.console.say(&summary.to_string())?;
        Ok(summary)
    }

    /// Resolve one record: cache first, then a single search, then
    /// auto-accept or operator disambiguation.
    async fn resolve_one(&mut self, record: &Restaurant) -> Result<(String, Outcome)> {
        let key = record.cache_key();
        if let Some(cached) = self.cache.get(&key) {
            return Ok((cached.clone(), Outcome::CacheHit));
        }

        let query = format!("{} {} {QUERY_SUFFIX}", record.name, record.neighborhood);
        self.requests_issued += 1;

        let resolved = match self.search.search_text(&query).await {
            Err(err) => {
                self.console.say(&format!("  search failed: {err}"))?;
                self.manual_or_skip()?
            }
            Ok(candidates) => match candidates.as_slice() {
                [] => {
                    self.console.say("  no results")?;
                    self.manual_or_skip()?
                }
                [only] => (only.address.clone(), Outcome::AutoAccepted),
                _ => match self.console.pick_candidate(&candidates)? {
                    MenuChoice::Pick(index) => {
                        (candidates[index].address.clone(), Outcome::Picked)
                    }
                    MenuChoice::Manual => self.manual_or_skip()?,
                    MenuChoice::Skip => (String::new(), Outcome::Skipped),
                },
            },
        };

        // Skips are cached too, so a duplicate row does not re-ask.
        self.cache.insert(key, resolved.0.clone());
        Ok(resolved)
    }

    fn manual_or_skip(&mut self) -> Result<(String, Outcome)> {
        let typed = self.console.manual_address()?;
        if typed.is_empty() {
            Ok((String::new(), Outcome::Skipped))
        } else {
            Ok((typed, Outcome::ManuallyEntered))
        }
    }

    fn report(&mut self, address: &str, outcome: &Outcome) -> Result<()> {
        let line = match outcome {
            Outcome::CacheHit if address.is_empty() => "  cached: skipped".to_string(),
            Outcome::CacheHit => format!("  cached: {address}"),
            Outcome::AutoAccepted => format!("  accepted: {address}"),
            Outcome::Picked => format!("  selected: {address}"),
            Outcome::ManuallyEntered => format!("  manual: {address}"),
            Outcome::Skipped => "  skipped".to_string(),
        };
        self.console.say(&line)
    }
}
