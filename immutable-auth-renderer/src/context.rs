//! Template context for a single generated contract block.

use serde::Serialize;

use immutable_auth_core::{NameSaltPair, Salt};

use crate::error::RenderError;

/// Values interpolated into `immutable.sol.tera`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockContext {
    /// Identifier fragment, inserted verbatim.
    pub name: String,
    /// `0x`-prefixed 64-digit hex literal.
    pub salt: String,
}

impl BlockContext {
    pub fn new(pair: &NameSaltPair, salt: &Salt) -> Self {
        BlockContext {
            name: pair.name.0.clone(),
            salt: salt.to_literal(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
