pub use crate::{
    error::{Error, Result},
    rules::{
        die::Die,
        face::{Face, FaceKind},
    },
    simulation::{
        game::{Game, PlayReport, ResultsTable},
        table::{Layout, NarrowRow, NarrowTable, TrialTable},
    },
    statistics::{
        analyzer::{Analyzer, FaceCounts, OutcomeCounts},
        roller::Roller,
    },
};
