use serde::Serialize;
use tracing::debug;

use crate::core::hit::{coordinate_bounds, AuxiliaryInfo, HitRecord, Hsp};
use crate::core::link::Link;
use crate::core::types::{BuilderOptions, Strand};
use crate::linkout::{require_hsps, require_linkout_id, LinkoutBuilder, LinkoutError};

/// Track class used for the BLAST result track
pub const TRACK_TYPE: &str = "JBrowse/View/Track/CanvasFeatures";

/// Links to the hit region in JBrowse with the HSPs added as a feature on a new track.
///
/// The region shown is padded so the hit fills roughly the middle two thirds
/// of the view. The added track is not switched on; users enable it from the
/// track list.
#[derive(Debug, Clone, Copy, Default)]
pub struct JbrowseLinkout;

/// One HSP as a JBrowse `match_part` subfeature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subfeature {
    pub start: i64,
    pub end: i64,
    pub strand: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Subfeature {
    /// Reverse-strand HSPs are reported with start and end swapped
    pub fn from_hsp(hsp: &Hsp) -> Self {
        let strand = hsp.strand();
        let (start, end) = match strand {
            Strand::Reverse => (hsp.hit_to, hsp.hit_from),
            Strand::Forward => (hsp.hit_from, hsp.hit_to),
        };
        Self {
            start,
            end,
            strand: strand.as_jbrowse(),
            kind: "match_part",
        }
    }
}

#[derive(Serialize)]
struct Feature<'a> {
    seq_id: &'a str,
    start: i64,
    end: i64,
    name: String,
    subfeatures: Vec<Subfeature>,
}

#[derive(Serialize)]
struct Track {
    label: &'static str,
    key: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    store: &'static str,
}

/// Subfeatures in input order plus the raw `hit_from`/`hit_to` of every HSP
pub fn subfeatures(hsps: &[Hsp]) -> (Vec<Subfeature>, Vec<i64>) {
    let mut features = Vec::with_capacity(hsps.len());
    let mut coords = Vec::with_capacity(hsps.len() * 2);
    for hsp in hsps {
        coords.push(hsp.hit_from);
        coords.push(hsp.hit_to);
        features.push(Subfeature::from_hsp(hsp));
    }
    (features, coords)
}

/// Visible region for a hit spanning `min..max`.
///
/// Each side is padded by a sixth of the span, rounded half away from zero.
/// The start is not clamped and may drop below 1. Ends saturate at the `i64` range.
#[must_use]
pub fn view_window(min: i64, max: i64) -> (i64, i64) {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let buffer = (max.abs_diff(min) as f64 / 6.0).round() as i64;
    (min.saturating_sub(buffer), max.saturating_add(buffer))
}

fn encode<T: Serialize>(value: &T) -> Result<String, LinkoutError> {
    serde_json::to_string(value).map_err(|e| LinkoutError::Encode(e.to_string()))
}

impl LinkoutBuilder for JbrowseLinkout {
    fn build(
        &self,
        url_prefix: &str,
        hit: &HitRecord,
        info: &AuxiliaryInfo,
        _options: &BuilderOptions,
    ) -> Result<Link, LinkoutError> {
        let id = require_linkout_id(hit)?;
        require_hsps(hit, info)?;

        let (parts, coords) = subfeatures(&info.hsps);
        let (min, max) = coordinate_bounds(&coords).ok_or_else(|| {
            LinkoutError::EmptyAlignmentSet {
                hit_id: hit.hit_id.clone(),
            }
        })?;
        let (screen_start, screen_end) = view_window(min, max);

        let feature = Feature {
            seq_id: id,
            start: min,
            end: max,
            name: format!("{} Blast Hit", info.query_name),
            subfeatures: parts,
        };
        let track = Track {
            label: "blast",
            key: "BLAST Result",
            kind: TRACK_TYPE,
            store: "url",
        };

        let fragments = [
            format!("loc={id}:{screen_start}..{screen_end}"),
            format!("addFeatures={}", encode(&[feature])?),
            format!("addTracks={}", encode(&[track])?),
        ];

        let href = format!("{url_prefix}{}", fragments.join("&"));
        debug!("JBrowse link-out for {}: {}", hit.hit_id, href);

        Ok(Link::new(id, href).in_new_window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(hsps: Vec<Hsp>) -> Link {
        let hit = HitRecord::new(1, "hit")
            .with_linkout_id("Chr01")
            .with_hsps(hsps.clone());
        let info = AuxiliaryInfo::new("query1", hsps);
        JbrowseLinkout
            .build(
                "http://jbrowse.example.org/?data=rice&",
                &hit,
                &info,
                &BuilderOptions::new(),
            )
            .unwrap()
    }

    #[test]
    fn test_reverse_strand_subfeature() {
        let (parts, coords) = subfeatures(&[Hsp::new(200, 100)]);
        assert_eq!(
            parts,
            vec![Subfeature {
                start: 100,
                end: 200,
                strand: "-1",
                kind: "match_part"
            }]
        );
        assert_eq!(coords, vec![200, 100]);
        assert_eq!(
            serde_json::to_string(&parts[0]).unwrap(),
            r#"{"start":100,"end":200,"strand":"-1","type":"match_part"}"#
        );
    }

    #[test]
    fn test_view_window() {
        assert_eq!(view_window(100, 700), (0, 800));
        // 50 / 6 = 8.33
        assert_eq!(view_window(100, 150), (92, 158));
        // 3 / 6 = 0.5 rounds away from zero
        assert_eq!(view_window(10, 13), (9, 14));
        assert_eq!(view_window(5, 5), (5, 5));
        assert_eq!(view_window(i64::MIN, i64::MAX), (i64::MIN, i64::MAX));
    }

    #[test]
    fn test_full_url() {
        let link = build(vec![Hsp::new(100, 400), Hsp::new(700, 600)]);
        assert_eq!(
            link.href,
            "http://jbrowse.example.org/?data=rice&loc=Chr01:0..800&addFeatures=[{\"seq_id\":\"Chr01\",\
             \"start\":100,\"end\":700,\"name\":\"query1 Blast Hit\",\"subfeatures\":[\
             {\"start\":100,\"end\":400,\"strand\":\"1\",\"type\":\"match_part\"},\
             {\"start\":600,\"end\":700,\"strand\":\"-1\",\"type\":\"match_part\"}]}]\
             &addTracks=[{\"label\":\"blast\",\"key\":\"BLAST Result\",\
             \"type\":\"JBrowse/View/Track/CanvasFeatures\",\"store\":\"url\"}]"
        );
        assert_eq!(link.text, "Chr01");
        assert_eq!(link.target.as_deref(), Some("_blank"));
    }

    #[test]
    fn test_is_deterministic() {
        let hsps = vec![Hsp::new(5, 50), Hsp::new(90, 60)];
        assert_eq!(build(hsps.clone()), build(hsps));
    }

    #[test]
    fn test_empty_hsps() {
        let hit = HitRecord::new(1, "hit").with_linkout_id("Chr01");
        let info = AuxiliaryInfo::new("q", Vec::new());
        assert!(matches!(
            JbrowseLinkout.build("http://x.org/?", &hit, &info, &BuilderOptions::new()),
            Err(LinkoutError::EmptyAlignmentSet { .. })
        ));
    }
}
