use crate::core::hit::{AuxiliaryInfo, HitRecord};
use crate::core::link::Link;
use crate::core::types::BuilderOptions;
use crate::linkout::{LinkoutBuilder, LinkoutError};

/// Placeholder for databases without link-outs; always `Disabled`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinkout;

impl LinkoutBuilder for NoLinkout {
    fn build(
        &self,
        _url_prefix: &str,
        _hit: &HitRecord,
        _info: &AuxiliaryInfo,
        _options: &BuilderOptions,
    ) -> Result<Link, LinkoutError> {
        Err(LinkoutError::Disabled)
    }
}
