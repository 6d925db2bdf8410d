use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    rules::die::Die,
    simulation::table::{Layout, NarrowTable, TrialTable},
    statistics::roller::Roller,
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Summary of one completed [`Game::play`].
#[derive(Debug, Clone)]
pub struct PlayReport {
    pub rolls_run: usize,
    pub elapsed: chrono::Duration,
}

impl PlayReport {
    pub fn rolls_per_second(&self) -> f64 {
        let elapsed = self.elapsed.num_milliseconds() as f64 / 1000.0;
        if elapsed > 0.0 {
            self.rolls_run as f64 / elapsed
        } else {
            0.0
        }
    }
}

/// A copy of the stored trial table in the requested layout. Mutating it has
/// no effect on the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultsTable {
    Wide(TrialTable),
    Narrow(NarrowTable),
}

/// An ordered set of dice that are rolled together, one draw per die per
/// roll, plus the table of outcomes from the most recent play.
///
/// The dice need not share a face set; a game of a d6 and a coin is legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    dice: Vec<Die>,
    results: Option<TrialTable>,
}

impl Game {
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::EmptyDiceList);
        }
        Ok(Self {
            dice,
            results: None,
        })
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Mutable access to one die, for retuning weights between plays.
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die> {
        self.dice.get_mut(index)
    }

    /// Rolls every die once per roll index, in die order, and stores the
    /// resulting trial table.
    ///
    /// The stored table is replaced wholesale once all rolls complete; if any
    /// draw fails, the previously stored table is left intact.
    pub fn play(&mut self, num_rolls: usize, roller: &mut Roller) -> Result<PlayReport> {
        if num_rolls == 0 {
            return Err(Error::InvalidPlayCount);
        }
        let start: Timestamp = chrono::Utc::now();
        let mut rows = Vec::with_capacity(num_rolls);
        for roll in 0..num_rolls {
            let mut row = Vec::with_capacity(self.dice.len());
            for die in &self.dice {
                row.push(die.roll_once(roller)?);
            }
            log::trace!("roll {roll}: {row:?}");
            rows.push(row);
        }
        self.results = Some(TrialTable::new(rows));
        let elapsed = chrono::Utc::now() - start;
        log::debug!(
            "played {num_rolls} rolls of {} dice in {elapsed}",
            self.dice.len()
        );
        Ok(PlayReport {
            rolls_run: num_rolls,
            elapsed,
        })
    }

    /// The stored wide table from the most recent play, if any.
    pub fn results(&self) -> Option<&TrialTable> {
        self.results.as_ref()
    }

    /// A copy of the stored table in the requested layout.
    pub fn show_results(&self, layout: Layout) -> Result<ResultsTable> {
        let table = self.results.as_ref().ok_or(Error::NoGamePlayed)?;
        Ok(match layout {
            Layout::Wide => ResultsTable::Wide(table.clone()),
            Layout::Narrow => ResultsTable::Narrow(table.to_narrow()),
        })
    }

    #[cfg(test)]
    pub(crate) fn force_results(&mut self, rows: Vec<Vec<crate::rules::face::Face>>) {
        self.results = Some(TrialTable::new(rows));
    }
}
