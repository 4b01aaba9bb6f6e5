//! CSV persistence for the record hand-off between the two stages.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::Restaurant;

/// Fixed CSV column order.
pub const HEADER: [&str; 5] = ["Name", "Neighborhood", "Address", "Cuisine", "Price"];

/// Serialize records as CSV.
///
/// The five-column header row is always written, even for an empty record
/// set. Embedded delimiters get standard CSV quoting.
pub fn write_records<W: Write>(writer: W, records: &[Restaurant]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    if records.is_empty() {
        // serde only emits the header alongside the first row
        out.write_record(HEADER)?;
    }
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// Deserialize records from CSV.
///
/// Columns are keyed by header name, so their order does not matter; a
/// missing Address column defaults every record to an empty address.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Restaurant>> {
    let mut input = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in input.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Write the full record set to a file, replacing any previous content.
pub fn save<P: AsRef<Path>>(path: P, records: &[Restaurant]) -> Result<()> {
    write_records(File::create(path)?, records)
}

/// Load the full record set from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Restaurant>> {
    read_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ListingParser;

    fn sample() -> Vec<Restaurant> {
        vec![
            Restaurant {
                name: "Panda Inn".to_string(),
                neighborhood: "Alhambra".to_string(),
                address: String::new(),
                cuisine: "Chinese".to_string(),
                price: "$$".to_string(),
            },
            Restaurant {
                name: "Jitlada".to_string(),
                neighborhood: "East Hollywood".to_string(),
                address: "5233 W Sunset Blvd, Los Angeles, CA 90027".to_string(),
                cuisine: "Thai".to_string(),
                price: "$$".to_string(),
            },
        ]
    }

    #[test]
    fn test_header_always_first_and_fixed() {
        let mut buffer = Vec::new();
        write_records(&mut buffer, &sample()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Name,Neighborhood,Address,Cuisine,Price\n"));

        let mut empty = Vec::new();
        write_records(&mut empty, &[]).unwrap();
        let text = String::from_utf8(empty).unwrap();
        assert_eq!(text, "Name,Neighborhood,Address,Cuisine,Price\n");
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let records = sample();
        let mut buffer = Vec::new();
        write_records(&mut buffer, &records).unwrap();
        let reloaded = read_records(buffer.as_slice()).unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn test_parse_then_round_trip() {
        let parser = ListingParser::new();
        let records = parser
            .parse_text("Panda Inn Alhambra • Chinese • $$\nJitlada East Hollywood • Thai • $$")
            .unwrap();
        let mut buffer = Vec::new();
        write_records(&mut buffer, &records).unwrap();
        assert_eq!(read_records(buffer.as_slice()).unwrap(), records);
    }

    #[test]
    fn test_missing_address_column_defaults_empty() {
        let csv_text = "Name,Neighborhood,Cuisine,Price\nPanda Inn,Alhambra,Chinese,$$\n";
        let records = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "");
        assert_eq!(records[0].cuisine, "Chinese");
    }

    #[test]
    fn test_embedded_comma_is_quoted() {
        let records = vec![Restaurant {
            name: "Coni'Seafood".to_string(),
            neighborhood: "Inglewood".to_string(),
            address: "3544 W Imperial Hwy, Inglewood, CA 90303".to_string(),
            cuisine: "Mexican, Seafood".to_string(),
            price: "$$".to_string(),
        }];
        let mut buffer = Vec::new();
        write_records(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("\"Mexican, Seafood\""));
        assert_eq!(read_records(buffer.as_slice()).unwrap(), records);
    }

    #[test]
    fn test_save_and_load_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restaurants.csv");
        let records = sample();
        save(&path, &records).unwrap();
        assert_eq!(load(&path).unwrap(), records);
    }
}
