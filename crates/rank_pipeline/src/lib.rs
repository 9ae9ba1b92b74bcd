//! rank_pipeline — orchestrates the ranking engine end to end: normalize the
//! competitor set, anneal, slide, decorate with diagnostics, apply the
//! optional filter, and hand back the document `rank_io` will write out.
#![forbid(unsafe_code)]

pub mod error;
pub mod orchestrate;

pub use error::PipelineError;
pub use orchestrate::run;
