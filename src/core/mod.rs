//! Core data types for BLAST link-outs.
//!
//! - [`HitRecord`], [`Hsp`], [`AuxiliaryInfo`]: a pre-parsed search hit and the
//!   context handed to link builders
//! - [`Link`]: the rendered hyperlink and its HTML form
//! - [`IdPattern`]: how the link-out identifier is pulled from a definition line
//! - [`LinkoutKey`], [`BuilderOptions`], [`Strand`]: shared small types
//!
//! ## Coordinates
//!
//! HSP coordinates are 1-based positions on the hit sequence. A reverse-strand
//! HSP has `hit_from > hit_to`; spans are always computed with min/max.
//!
//! [`HitRecord`]: hit::HitRecord
//! [`Hsp`]: hit::Hsp
//! [`AuxiliaryInfo`]: hit::AuxiliaryInfo
//! [`Link`]: link::Link
//! [`IdPattern`]: identifier::IdPattern
//! [`LinkoutKey`]: types::LinkoutKey
//! [`BuilderOptions`]: types::BuilderOptions
//! [`Strand`]: types::Strand

pub mod hit;
pub mod identifier;
pub mod link;
pub mod types;
