//! Error types shared by every layer built on `rank_core`.

/// Errors arising from the core data model (orders, competitors, parameters).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A competitor was looked up in an `Order` that does not contain it.
    #[error("competitor {0:?} is not present in the order")]
    UnknownCompetitor(String),

    /// A parameter record failed validation (e.g. `lambda` outside `[0, 1]`).
    #[error("invalid parameter: {0}")]
    InvalidParams(String),
}
