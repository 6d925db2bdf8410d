use std::str::FromStr;

use derive_more::IntoIterator;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    rules::face::Face,
};

/// How [`Game::show_results`](crate::simulation::game::Game::show_results)
/// lays out the stored trial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// One row per roll, one column per die.
    Wide,
    /// One row per (roll, die) pair, in row-major order of the wide table.
    Narrow,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Layout::Wide),
            "narrow" => Ok(Layout::Narrow),
            other => Err(Error::InvalidLayout(other.to_string())),
        }
    }
}

/// The wide trial table: rows are rolls in execution order, columns are dice
/// in game order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoIterator)]
#[serde(transparent)]
pub struct TrialTable {
    rows: Vec<Vec<Face>>,
}

impl TrialTable {
    pub(crate) fn new(rows: Vec<Vec<Face>>) -> Self {
        Self { rows }
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Face>] {
        &self.rows
    }

    /// Column labels in die order: `Die_1` through `Die_k`.
    pub fn die_labels(&self) -> Vec<String> {
        (1..=self.num_dice()).map(|i| format!("Die_{i}")).collect()
    }

    /// Reshapes to one [`NarrowRow`] per (roll, die) pair: all dice of roll 0,
    /// then all dice of roll 1, and so on.
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(die, outcome)| NarrowRow {
                    roll,
                    die,
                    outcome: outcome.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }

    pub fn save_json(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// One (roll, die) observation in the narrow layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrowRow {
    pub roll: usize,
    pub die: usize,
    pub outcome: Face,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoIterator)]
#[serde(transparent)]
pub struct NarrowTable {
    rows: Vec<NarrowRow>,
}

impl NarrowTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[NarrowRow] {
        &self.rows
    }

    /// Regroups into the wide layout. Expects the row-major ordering produced
    /// by [`TrialTable::to_narrow`].
    pub fn to_wide(&self) -> TrialTable {
        let mut rows: Vec<Vec<Face>> = Vec::new();
        for row in &self.rows {
            if row.roll == rows.len() {
                rows.push(Vec::new());
            }
            rows[row.roll].push(row.outcome.clone());
        }
        TrialTable { rows }
    }

    pub fn save_json(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
