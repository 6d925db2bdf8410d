pub mod game;
pub mod table;
