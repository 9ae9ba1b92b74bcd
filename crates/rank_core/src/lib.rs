//! rank_core — competitor/game/order types, the explicit parameter record,
//! and a deterministic RNG shared by every other crate in the workspace.
//!
//! This crate is I/O-free: no file or network access, no global state.
//! Everything an operation needs is passed in explicitly.

pub mod error;
pub mod params;
pub mod rng;
pub mod types;

pub use error::CoreError;
pub use params::Params;
pub use rng::RankRng;
pub use types::{Competitor, Game, GameSide, InconsistentGame, Order, RankingEntry};
