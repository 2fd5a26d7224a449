use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Laptop, LaptopDataset};

// ---------------------------------------------------------------------------
// Declared schema
// ---------------------------------------------------------------------------

/// Column schema of the source file, bound by position. The header names in
/// the file itself are ignored; these are also the labels the table view uses.
pub const LAPTOP_COLUMNS: [&str; 13] = [
    "Index",
    "Company",
    "Product",
    "TypeName",
    "Inches",
    "ScreenResolution",
    "CPU",
    "RAM",
    "Memory",
    "GPU",
    "OpSys",
    "Weight",
    "Price",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the dataset. All variants abort
/// the load as a whole; there is no row-skip-and-continue fallback, since a
/// partially loaded table would corrupt every downstream aggregate.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid {encoding} text")]
    Decode { path: PathBuf, encoding: &'static str },

    /// Row 0 is the header; data rows are numbered from 1.
    #[error("row {row}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the laptop table from a delimited text file.
///
/// The source data ships Latin-1 encoded (manufacturer names carry accented
/// characters), so the bytes are decoded as WINDOWS_1252 before CSV parsing.
pub fn load_csv(path: &Path) -> Result<LaptopDataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, _, had_errors) = WINDOWS_1252.decode(&bytes);
    if had_errors {
        return Err(LoadError::Decode {
            path: path.to_path_buf(),
            encoding: WINDOWS_1252.name(),
        });
    }

    parse_records(&text)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV record in file order, before the decorated columns are coerced.
/// Deserialized positionally, so the struct field order is the schema order.
#[derive(Debug, Deserialize)]
struct RawRow {
    index: u32,
    company: String,
    product: String,
    type_name: String,
    inches: f64,
    screen_resolution: String,
    cpu: String,
    ram: String,
    memory: String,
    gpu: String,
    op_sys: String,
    weight: String,
    price: f64,
}

/// Parse decoded CSV text into a dataset.
///
/// The reader runs in flexible mode so that a record with the wrong number of
/// fields surfaces as a [`LoadError::SchemaMismatch`] naming the row, instead
/// of a generic CSV error or silently mis-bound columns.
fn parse_records(text: &str) -> Result<LaptopDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header_len = reader.headers()?.len();
    if header_len != LAPTOP_COLUMNS.len() {
        return Err(LoadError::SchemaMismatch {
            row: 0,
            expected: LAPTOP_COLUMNS.len(),
            found: header_len,
        });
    }

    let mut laptops = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;

        if record.len() != LAPTOP_COLUMNS.len() {
            return Err(LoadError::SchemaMismatch {
                row,
                expected: LAPTOP_COLUMNS.len(),
                found: record.len(),
            });
        }

        let raw: RawRow = record
            .deserialize(None)
            .map_err(|e| LoadError::Parse {
                row,
                message: e.to_string(),
            })?;

        let ram_gb = parse_ram(&raw.ram).map_err(|message| LoadError::Parse { row, message })?;
        let weight_kg =
            parse_weight(&raw.weight).map_err(|message| LoadError::Parse { row, message })?;

        laptops.push(Laptop {
            index: raw.index,
            company: raw.company,
            product: raw.product,
            type_name: raw.type_name,
            inches: raw.inches,
            screen_resolution: raw.screen_resolution,
            cpu: raw.cpu,
            ram_gb,
            memory: raw.memory,
            gpu: raw.gpu,
            op_sys: raw.op_sys,
            weight_kg,
            price: raw.price,
        });
    }

    Ok(LaptopDataset::from_laptops(laptops))
}

// -- Decorated-column coercion --

/// `"16GB"` → `16`.
fn parse_ram(raw: &str) -> Result<u32, String> {
    let digits = raw
        .trim()
        .strip_suffix("GB")
        .ok_or_else(|| format!("RAM value {raw:?} does not end in \"GB\""))?;
    digits
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("RAM value {raw:?} is not a whole GB count"))
}

/// `"2.1kg"` → `2.1`.
fn parse_weight(raw: &str) -> Result<f64, String> {
    let number = raw
        .trim()
        .strip_suffix("kg")
        .ok_or_else(|| format!("Weight value {raw:?} does not end in \"kg\""))?;
    number
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Weight value {raw:?} is not a number of kg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "laptop_ID,Company,Product,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price_euros";

    fn row(index: u32, ram: &str, weight: &str, price: &str) -> String {
        format!(
            "{index},Acer,Aspire 3,Notebook,15.6,1366x768,Intel Core i3,{ram},500GB HDD,Intel HD Graphics,Windows 10,{weight},{price}"
        )
    }

    #[test]
    fn decorated_columns_round_trip() {
        let text = format!("{HEADER}\n{}\n", row(1, "16GB", "2.1kg", "899.5"));
        let ds = parse_records(&text).unwrap();

        assert_eq!(ds.len(), 1);
        let laptop = &ds.laptops[0];
        assert_eq!(laptop.ram_gb, 16);
        assert_eq!(laptop.weight_kg, 2.1);
        assert_eq!(laptop.price, 899.5);
        assert_eq!(laptop.inches, 15.6);
    }

    #[test]
    fn file_header_names_are_ignored() {
        // Header carries the source file's own names; the declared schema
        // binds by position regardless.
        let text = format!("{HEADER}\n{}\n", row(7, "8GB", "1.4kg", "500"));
        let ds = parse_records(&text).unwrap();
        assert_eq!(ds.laptops[0].company, "Acer");
        assert_eq!(ds.laptops[0].index, 7);
    }

    #[test]
    fn ram_without_suffix_is_a_parse_error() {
        let text = format!("{HEADER}\n{}\n", row(1, "16", "2.1kg", "899.5"));
        match parse_records(&text) {
            Err(LoadError::Parse { row, message }) => {
                assert_eq!(row, 1);
                assert!(message.contains("RAM"), "unexpected message: {message}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn weight_with_bad_number_is_a_parse_error() {
        let text = format!("{HEADER}\n{}\n", row(1, "8GB", "heavykg", "500"));
        match parse_records(&text) {
            Err(LoadError::Parse { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_price_is_a_parse_error() {
        let text = format!("{HEADER}\n{}\n", row(1, "8GB", "1.2kg", "cheap"));
        match parse_records(&text) {
            Err(LoadError::Parse { row, .. }) => assert_eq!(row, 1),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn short_record_is_a_schema_mismatch() {
        let text = format!("{HEADER}\n1,Acer,Aspire 3\n");
        match parse_records(&text) {
            Err(LoadError::SchemaMismatch {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 13);
                assert_eq!(found, 3);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn short_header_is_a_schema_mismatch() {
        match parse_records("a,b,c\n") {
            Err(LoadError::SchemaMismatch { row, found, .. }) => {
                assert_eq!(row, 0);
                assert_eq!(found, 3);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn latin1_bytes_decode_from_disk() {
        // "Portégé" with é as the single Latin-1 byte 0xE9; invalid UTF-8.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(HEADER.as_bytes());
        bytes.extend_from_slice(b"\n1,Toshiba,Port\xE9g\xE9 Z30,Ultrabook,13.3,1920x1080,Intel Core i7,8GB,256GB SSD,Intel HD Graphics,Windows 10,1.2kg,1349.0\n");

        let path = std::env::temp_dir().join("laptop_lens_latin1_roundtrip.csv");
        std::fs::write(&path, &bytes).unwrap();
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ds.laptops[0].product, "Portégé Z30");
        assert_eq!(ds.laptops[0].ram_gb, 8);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("laptop_lens_does_not_exist.csv");
        match load_csv(&path) {
            Err(LoadError::Io { .. }) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
