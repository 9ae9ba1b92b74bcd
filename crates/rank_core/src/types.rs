//! Competitors, games, and the permutation (`Order`) they are ranked under.

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An opaque, interned competitor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Competitor(String);

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Competitor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Competitor {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// An immutable observed result: `winner` beat `loser`. Winner must differ
/// from loser; multiple games between the same pair are allowed and each
/// counts independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    pub winner: Competitor,
    pub loser: Competitor,
}

impl Game {
    pub fn new(winner: impl Into<Competitor>, loser: impl Into<Competitor>) -> Self {
        Self {
            winner: winner.into(),
            loser: loser.into(),
        }
    }
}

/// A permutation of N competitors together with its inverse index map.
///
/// Position 0 is rank 1 (best); position N-1 is rank N (worst). The index
/// map is kept consistent with `competitors` by construction: every mutator
/// updates both in the same call, so the two are never allowed to diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    competitors: Vec<Competitor>,
    index: HashMap<Competitor, usize>,
}

impl Order {
    /// Build an order from a sequence of competitors, each expected unique.
    pub fn new(competitors: Vec<Competitor>) -> Self {
        let index = competitors
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { competitors, index }
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn as_slice(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.iter()
    }

    /// Zero-based position of `competitor`, or an error if it is absent.
    pub fn position(&self, competitor: &Competitor) -> Result<usize, CoreError> {
        self.index
            .get(competitor)
            .copied()
            .ok_or_else(|| CoreError::UnknownCompetitor(competitor.as_str().to_owned()))
    }

    /// Zero-based position of `competitor`. Panics if absent; reserved for
    /// hot loops where the caller has already established the invariant
    /// (the inner annealer/slider loops only ever look up competitors that
    /// are known, by construction, to be present in the order).
    #[inline]
    pub fn position_unchecked(&self, competitor: &Competitor) -> usize {
        self.index[competitor]
    }

    pub fn competitor_at(&self, position: usize) -> &Competitor {
        &self.competitors[position]
    }

    /// Exchange the competitors at positions `i` and `j`, updating the index map.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.competitors.swap(i, j);
        self.index.insert(self.competitors[i].clone(), i);
        self.index.insert(self.competitors[j].clone(), j);
    }

    /// Remove the competitor at `from` and reinsert it at `to` (a window
    /// move), shifting intermediate competitors by one and updating every
    /// affected entry of the index map.
    pub fn remove_insert(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let competitor = self.competitors.remove(from);
        self.competitors.insert(to, competitor);

        let (lo, hi) = if from < to { (from, to) } else { (to, from) };
        for pos in lo..=hi {
            self.index.insert(self.competitors[pos].clone(), pos);
        }
    }
}

/// One entry of an inconsistency record: a game that contradicts the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameSide {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InconsistentGame {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub side: GameSide,
    pub opponent: Competitor,
    pub magnitude: u64,
}

/// A finished ranking entry: rank, competitor, and its diagnostic metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankingEntry {
    pub rank: usize,
    pub competitor: Competitor,
    pub inconsistency_score: i64,
    #[cfg_attr(feature = "serde", serde(rename = "SOS"))]
    pub sos: f64,
    pub inconsistent_games: Vec<InconsistentGame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_swap_keeps_index_consistent() {
        let mut order = Order::new(vec!["a".into(), "b".into(), "c".into()]);
        order.swap(0, 2);
        assert_eq!(order.as_slice(), &[
            Competitor::new("c"),
            Competitor::new("b"),
            Competitor::new("a"),
        ]);
        assert_eq!(order.position(&Competitor::new("a")).unwrap(), 2);
        assert_eq!(order.position(&Competitor::new("c")).unwrap(), 0);
    }

    #[test]
    fn order_remove_insert_shifts_intermediate_positions() {
        let mut order = Order::new(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        order.remove_insert(0, 2);
        assert_eq!(order.as_slice(), &[
            Competitor::new("b"),
            Competitor::new("c"),
            Competitor::new("a"),
            Competitor::new("d"),
        ]);
        assert_eq!(order.position(&Competitor::new("a")).unwrap(), 2);
        assert_eq!(order.position(&Competitor::new("b")).unwrap(), 0);
        assert_eq!(order.position(&Competitor::new("c")).unwrap(), 1);
        assert_eq!(order.position(&Competitor::new("d")).unwrap(), 3);
    }

    #[test]
    fn unknown_competitor_position_errors() {
        let order = Order::new(vec!["a".into()]);
        assert_eq!(
            order.position(&Competitor::new("z")),
            Err(CoreError::UnknownCompetitor("z".to_owned()))
        );
    }
}
