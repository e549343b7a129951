//! Input size limits for hit files.

/// Maximum number of hits accepted from a single search result (DOS protection)
pub const MAX_HITS: usize = 100_000;

/// Maximum number of HSPs accepted for a single hit
pub const MAX_HSPS_PER_HIT: usize = 10_000;

/// Maximum size of a hits document after decompression (256MB)
pub const MAX_HITS_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024;

/// Check a hit count against [`MAX_HITS`].
///
/// Returns an error message if the count is over the limit, None if it is safe.
///
/// # Examples
///
/// ```
/// use blast_linkout::utils::validation::check_hit_limit;
///
/// assert!(check_hit_limit(10).is_none());
/// assert!(check_hit_limit(1_000_000).is_some());
/// ```
#[must_use]
pub fn check_hit_limit(count: usize) -> Option<String> {
    if count > MAX_HITS {
        Some(format!(
            "Too many hits: {count} exceeds maximum of {MAX_HITS}"
        ))
    } else {
        None
    }
}

/// Check the HSP count of one hit against [`MAX_HSPS_PER_HIT`]
#[must_use]
pub fn check_hsp_limit(count: usize) -> Option<String> {
    if count > MAX_HSPS_PER_HIT {
        Some(format!(
            "Too many HSPs: {count} exceeds maximum of {MAX_HSPS_PER_HIT}"
        ))
    } else {
        None
    }
}

/// Check a document size against [`MAX_HITS_DOCUMENT_BYTES`]
#[must_use]
pub fn check_document_size(bytes: u64) -> Option<String> {
    if bytes > MAX_HITS_DOCUMENT_BYTES {
        Some(format!(
            "Hits document too large: exceeds maximum of {MAX_HITS_DOCUMENT_BYTES} bytes"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hit_limit() {
        assert!(check_hit_limit(0).is_none());
        assert!(check_hit_limit(MAX_HITS).is_none());
        assert!(check_hit_limit(MAX_HITS + 1).is_some());
    }

    #[test]
    fn test_check_hsp_limit() {
        assert!(check_hsp_limit(MAX_HSPS_PER_HIT).is_none());
        assert!(check_hsp_limit(MAX_HSPS_PER_HIT + 1).is_some());
    }

    #[test]
    fn test_check_document_size() {
        assert!(check_document_size(MAX_HITS_DOCUMENT_BYTES).is_none());
        assert!(check_document_size(MAX_HITS_DOCUMENT_BYTES + 1).is_some());
    }
}
