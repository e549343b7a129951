use std::ffi::OsStr;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::hit::HitRecord;
use crate::utils::validation::{
    check_document_size, check_hit_limit, check_hsp_limit, MAX_HITS_DOCUMENT_BYTES,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hits JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    TooManyHits(String),

    #[error("Hit '{hit_id}': {message}")]
    TooManyHsps { hit_id: String, message: String },

    #[error("{0}")]
    DocumentTooLarge(String),

    #[error("Hit '{hit_id}': HSP coordinates {hit_from}..{hit_to} must be 1 or greater")]
    InvalidCoordinate {
        hit_id: String,
        hit_from: i64,
        hit_to: i64,
    },
}

/// Hits for one query against one database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query_name: String,

    /// Database the search ran against, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default)]
    pub hits: Vec<HitRecord>,
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("gz" | "bgz")
    )
}

/// Read a search result from a JSON file, optionally gzip-compressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Json` if
/// it is not valid hits JSON, a limit error if it is too large or holds too many
/// hits or HSPs, or `ParseError::InvalidCoordinate` for coordinates below 1.
pub fn parse_hits_file(path: &Path) -> Result<SearchResult, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        debug!("Reading gzipped hits from {}", path.display());
        parse_hits_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_hits_reader(BufReader::new(file))
    }
}

/// Read a search result from any reader.
///
/// At most [`MAX_HITS_DOCUMENT_BYTES`] are read; hit and HSP counts are checked
/// after deserialization.
///
/// # Errors
///
/// Returns `ParseError::DocumentTooLarge` if the input exceeds the size limit,
/// `ParseError::Json` for malformed input, a limit error if it holds too many
/// hits or HSPs, or `ParseError::InvalidCoordinate` for coordinates below 1.
pub fn parse_hits_reader<R: Read>(reader: R) -> Result<SearchResult, ParseError> {
    let mut buf = Vec::new();
    reader
        .take(MAX_HITS_DOCUMENT_BYTES + 1)
        .read_to_end(&mut buf)?;
    if let Some(message) = check_document_size(buf.len() as u64) {
        return Err(ParseError::DocumentTooLarge(message));
    }

    let result: SearchResult = serde_json::from_slice(&buf)?;
    check_limits(&result)?;
    Ok(result)
}

/// Parse a search result from a JSON string
///
/// # Errors
///
/// Returns `ParseError::DocumentTooLarge` if the input exceeds the size limit,
/// `ParseError::Json` for malformed input, a limit error if it holds too many
/// hits or HSPs, or `ParseError::InvalidCoordinate` for coordinates below 1.
pub fn parse_hits_json(json: &str) -> Result<SearchResult, ParseError> {
    if let Some(message) = check_document_size(json.len() as u64) {
        return Err(ParseError::DocumentTooLarge(message));
    }
    let result: SearchResult = serde_json::from_str(json)?;
    check_limits(&result)?;
    Ok(result)
}

fn check_limits(result: &SearchResult) -> Result<(), ParseError> {
    if let Some(message) = check_hit_limit(result.hits.len()) {
        return Err(ParseError::TooManyHits(message));
    }
    for hit in &result.hits {
        if let Some(message) = check_hsp_limit(hit.hsps.len()) {
            return Err(ParseError::TooManyHsps {
                hit_id: hit.hit_id.clone(),
                message,
            });
        }
        // Coordinates are 1-based
        if let Some(hsp) = hit.hsps.iter().find(|h| h.hit_from < 1 || h.hit_to < 1) {
            return Err(ParseError::InvalidCoordinate {
                hit_id: hit.hit_id.clone(),
                hit_from: hsp.hit_from,
                hit_to: hsp.hit_to,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::Hsp;
    use crate::utils::validation::MAX_HSPS_PER_HIT;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HITS_JSON: &str = r#"{
        "query_name": "LOC_Os01g01010",
        "database": "rice_genome",
        "hits": [
            {"ordinal": 1, "hit_id": "gnl|BL_ORD_ID|0", "definition": "Chr01 rice chromosome 1",
             "accession": "0", "length": 43270923,
             "hsps": [{"hit_from": 2903, "hit_to": 3268, "bit_score": 650.5, "e_value": 0.0},
                      {"hit_from": 10200, "hit_to": 10100}]},
            {"ordinal": 2, "hit_id": "gnl|BL_ORD_ID|5", "definition": "Chr06",
             "hsps": [{"hit_from": 500, "hit_to": 420}]}
        ]
    }"#;

    #[test]
    fn test_parse_hits_json() {
        let result = parse_hits_json(HITS_JSON).unwrap();
        assert_eq!(result.query_name, "LOC_Os01g01010");
        assert_eq!(result.database.as_deref(), Some("rice_genome"));
        assert_eq!(result.hits.len(), 2);
        assert_eq!(result.hits[0].hsps.len(), 2);
        assert_eq!(result.hits[0].hsps[0].bit_score, Some(650.5));
        assert_eq!(result.hits[1].length, 0);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_hits_json("{\"hits\": ["),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_too_many_hsps() {
        let hit = HitRecord::new(1, "big").with_hsps(vec![Hsp::new(1, 2); MAX_HSPS_PER_HIT + 1]);
        let result = SearchResult {
            query_name: "q".to_string(),
            database: None,
            hits: vec![hit],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(matches!(
            parse_hits_json(&json),
            Err(ParseError::TooManyHsps { hit_id, .. }) if hit_id == "big"
        ));
    }

    #[test]
    fn test_coordinates_below_one_rejected() {
        let json = r#"{"query_name": "q", "hits": [
            {"ordinal": 1, "hit_id": "ok", "hsps": [{"hit_from": 1, "hit_to": 20}]},
            {"ordinal": 2, "hit_id": "bad",
             "hsps": [{"hit_from": -9223372036854775808, "hit_to": 9223372036854775807}]}
        ]}"#;
        match parse_hits_json(json) {
            Err(ParseError::InvalidCoordinate {
                hit_id,
                hit_from,
                hit_to,
            }) => {
                assert_eq!(hit_id, "bad");
                assert_eq!(hit_from, i64::MIN);
                assert_eq!(hit_to, i64::MAX);
            }
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }

        let zero = r#"{"query_name": "q", "hits": [
            {"ordinal": 1, "hit_id": "z", "hsps": [{"hit_from": 0, "hit_to": 5}]}
        ]}"#;
        assert!(matches!(
            parse_hits_reader(zero.as_bytes()),
            Err(ParseError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_parse_plain_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(HITS_JSON.as_bytes()).unwrap();
        file.flush().unwrap();

        let result = parse_hits_file(file.path()).unwrap();
        assert_eq!(result.hits.len(), 2);
    }

    #[test]
    fn test_parse_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = NamedTempFile::with_suffix(".json.gz").unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(HITS_JSON.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let result = parse_hits_file(file.path()).unwrap();
        assert_eq!(result.hits[1].definition, "Chr06");
    }
}
