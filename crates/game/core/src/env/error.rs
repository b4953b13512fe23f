//! Oracle access errors.

/// Raised when a required oracle is missing from the environment or a
/// definition lookup names an unregistered id.
///
/// `UnknownType` indicates a content-registration bug, never a condition a
/// player can trigger: every id the engine resolves comes from the
/// registry's own name list or from built-in content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("enemy oracle not available")]
    EnemiesNotAvailable,

    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("tile oracle not available")]
    TilesNotAvailable,

    #[error("offering oracle not available")]
    OfferingsNotAvailable,

    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("unknown {family} type: {id}")]
    UnknownType { family: &'static str, id: String },
}

impl OracleError {
    pub fn unknown(family: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownType {
            family,
            id: id.into(),
        }
    }
}
