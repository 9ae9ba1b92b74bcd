//! rank_algo — the ranking optimizer: loss evaluator, SOS calculator,
//! inconsistency reporter, annealer, and slider. Depends only on `rank_core`.
#![forbid(unsafe_code)]

pub mod anneal;
pub mod loss;
pub mod report;
pub mod slide;
pub mod sos;

pub use anneal::{anneal, AnnealOutcome};
pub use loss::{primary_inconsistency_loss, total_loss};
pub use report::inconsistency_report;
pub use slide::{slide, SlideOutcome};
pub use sos::compute_sos;
