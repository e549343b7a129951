use tracing::debug;

use crate::core::hit::{coordinate_bounds, AuxiliaryInfo, HitRecord, Hsp};
use crate::core::link::{url_with_query, Link};
use crate::core::types::BuilderOptions;
use crate::linkout::{require_hsps, require_linkout_id, LinkoutBuilder, LinkoutError};

/// Feature type and highlighted feature name used in the overlay
const FEATURE_TYPE: &str = "BlastHit";

/// Links to the hit region in GBrowse with every HSP added as a `BlastHit` feature.
///
/// GBrowse wants `;` between query parameters, so every `&` in the finished
/// URL is rewritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct GbrowseLinkout;

/// `start..stop` range text for each HSP plus the flat list of span coordinates
pub fn hsp_ranges(hsps: &[Hsp]) -> (Vec<String>, Vec<i64>) {
    let mut ranges = Vec::with_capacity(hsps.len());
    let mut coords = Vec::with_capacity(hsps.len() * 2);
    for hsp in hsps {
        let (start, stop) = hsp.span();
        ranges.push(format!("{start}..{stop}"));
        coords.push(start);
        coords.push(stop);
    }
    (ranges, coords)
}

impl LinkoutBuilder for GbrowseLinkout {
    fn build(
        &self,
        url_prefix: &str,
        hit: &HitRecord,
        info: &AuxiliaryInfo,
        _options: &BuilderOptions,
    ) -> Result<Link, LinkoutError> {
        let id = require_linkout_id(hit)?;
        require_hsps(hit, info)?;

        let (ranges, coords) = hsp_ranges(&info.hsps);
        let (min, max) = coordinate_bounds(&coords).ok_or_else(|| {
            LinkoutError::EmptyAlignmentSet {
                hit_id: hit.hit_id.clone(),
            }
        })?;

        let query = [
            ("ref", id.to_string()),
            ("start", min.to_string()),
            ("stop", max.to_string()),
            ("add", format!("{id} BLAST {FEATURE_TYPE} {}", ranges.join(","))),
            ("h_feat", FEATURE_TYPE.to_string()),
        ];

        let href = url_with_query(url_prefix, &query).replace('&', ";");
        debug!("GBrowse link-out for {}: {}", hit.hit_id, href);

        Ok(Link::new(id, href).in_new_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_hsp_hit() -> (HitRecord, AuxiliaryInfo) {
        let hsps = vec![Hsp::new(100, 200), Hsp::new(50, 80)];
        let hit = HitRecord::new(1, "hit")
            .with_linkout_id("Chr01")
            .with_hsps(hsps.clone());
        let info = AuxiliaryInfo::new("query1", hsps);
        (hit, info)
    }

    #[test]
    fn test_ranges_and_bounds() {
        let (_, info) = two_hsp_hit();
        let (ranges, coords) = hsp_ranges(&info.hsps);
        assert_eq!(ranges, vec!["100..200", "50..80"]);
        assert_eq!(coordinate_bounds(&coords), Some((50, 200)));
    }

    #[test]
    fn test_reverse_strand_range_is_ordered() {
        let (ranges, coords) = hsp_ranges(&[Hsp::new(300, 250)]);
        assert_eq!(ranges, vec!["250..300"]);
        assert_eq!(coords, vec![250, 300]);
    }

    #[test]
    fn test_url_is_semicolon_delimited() {
        let (hit, info) = two_hsp_hit();
        let link = GbrowseLinkout
            .build(
                "http://gbrowse.example.org/cgi-bin/gb2/gbrowse/rice/",
                &hit,
                &info,
                &BuilderOptions::new(),
            )
            .unwrap();

        assert!(!link.href.contains('&'));
        assert_eq!(
            link.href,
            "http://gbrowse.example.org/cgi-bin/gb2/gbrowse/rice/?ref=Chr01;start=50;stop=200;\
             add=Chr01%20BLAST%20BlastHit%20100..200%2C50..80;h_feat=BlastHit"
        );
        assert_eq!(link.text, "Chr01");
        assert_eq!(link.target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_prefix_ampersands_are_rewritten() {
        let (hit, info) = two_hsp_hit();
        let link = GbrowseLinkout
            .build("http://x.org/gb?a=1&b=2", &hit, &info, &BuilderOptions::new())
            .unwrap();
        assert!(link.href.starts_with("http://x.org/gb?a=1;b=2;ref=Chr01;"));
    }

    #[test]
    fn test_empty_hsps() {
        let hit = HitRecord::new(1, "hit").with_linkout_id("Chr01");
        let info = AuxiliaryInfo::new("q", Vec::new());
        assert_eq!(
            GbrowseLinkout.build("http://x.org/", &hit, &info, &BuilderOptions::new()),
            Err(LinkoutError::EmptyAlignmentSet {
                hit_id: "hit".to_string()
            })
        );
    }

    #[test]
    fn test_missing_identifier() {
        let (mut hit, info) = two_hsp_hit();
        hit.linkout_id = None;
        assert!(matches!(
            GbrowseLinkout.build("http://x.org/", &hit, &info, &BuilderOptions::new()),
            Err(LinkoutError::MissingIdentifier { .. })
        ));
    }
}
