use std::collections::BTreeMap;

use derive_more::IntoIterator;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    rules::face::Face,
    simulation::{game::Game, table::TrialTable},
};

/// Derived statistics over a game's stored trial table.
///
/// The analyzer is stateless: every operation recomputes from the game's
/// current table, so one analyzer can be reused across plays. All operations
/// fail with [`Error::NoGamePlayed`] until the game's first successful play.
pub struct Analyzer<'a> {
    game: &'a Game,
}

impl<'a> Analyzer<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    fn table(&self) -> Result<&'a TrialTable> {
        self.game.results().ok_or(Error::NoGamePlayed)
    }

    /// The number of rolls in which every die landed on the same face.
    pub fn jackpot(&self) -> Result<usize> {
        let table = self.table()?;
        Ok(table
            .rows()
            .iter()
            .filter(|row| row.iter().all(|face| face == &row[0]))
            .count())
    }

    /// Per-roll occurrence counts of every face any of the game's dice can
    /// show.
    ///
    /// The face axis is the sorted union of all dice's face sets. Dice with
    /// different face sets are allowed by design, but be aware that the union
    /// then contains faces some dice can never produce; their columns stay
    /// zero for rolls of those dice.
    pub fn face_counts_per_roll(&self) -> Result<FaceCounts> {
        let table = self.table()?;
        let mut seen = FxHashSet::default();
        let mut faces: Vec<Face> = self
            .game
            .dice()
            .iter()
            .flat_map(|die| die.faces().iter().cloned())
            .filter(|face| seen.insert(face.clone()))
            .collect();
        faces.sort();

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                faces
                    .iter()
                    .map(|face| row.iter().filter(|outcome| *outcome == face).count())
                    .collect()
            })
            .collect();
        Ok(FaceCounts { faces, rows })
    }

    /// Frequency of each distinct unordered outcome multiset, keyed on the
    /// sorted tuple of each roll's outcomes.
    pub fn combo_count(&self) -> Result<OutcomeCounts> {
        self.count_rows(|row| {
            let mut combo = row.to_vec();
            combo.sort();
            combo
        })
    }

    /// Frequency of each distinct ordered outcome sequence, keyed on each
    /// roll's outcomes in die order.
    pub fn permutation_count(&self) -> Result<OutcomeCounts> {
        self.count_rows(|row| row.to_vec())
    }

    fn count_rows(&self, key: impl Fn(&[Face]) -> Vec<Face>) -> Result<OutcomeCounts> {
        let table = self.table()?;
        let mut counts: BTreeMap<Vec<Face>, usize> = BTreeMap::new();
        for row in table.rows() {
            *counts.entry(key(row)).or_insert(0) += 1;
        }
        Ok(OutcomeCounts {
            entries: counts.into_iter().collect(),
        })
    }
}

/// One row per roll, one column per face in [`FaceCounts::faces`] order; each
/// cell counts the dice showing that face in that roll. Every row sums to the
/// number of dice in the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceCounts {
    pub faces: Vec<Face>,
    pub rows: Vec<Vec<usize>>,
}

/// A frequency table keyed on outcome tuples, sorted by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoIterator)]
#[serde(transparent)]
pub struct OutcomeCounts {
    entries: Vec<(Vec<Face>, usize)>,
}

impl OutcomeCounts {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Vec<Face>, usize)] {
        &self.entries
    }

    pub fn get(&self, key: &[Face]) -> Option<usize> {
        self.entries
            .binary_search_by(|(k, _)| k.as_slice().cmp(key))
            .ok()
            .map(|index| self.entries[index].1)
    }

    /// The total number of rolls accounted for.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
