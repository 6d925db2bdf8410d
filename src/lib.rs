pub mod error;
pub mod prelude;
pub mod rules;
pub mod simulation;
pub mod statistics;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_demo() -> anyhow::Result<()> {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .try_init();

        let mut loaded = Die::new(1i64..=6)?;
        loaded.set_weight(&Face::Int(6), 5.0)?;

        let fair_a = Die::new(1i64..=6)?;
        let fair_b = Die::new(1i64..=6)?;

        let mut game = Game::new(vec![loaded, fair_a, fair_b])?;
        let mut roller = Roller::from_seed(0xA57A);
        let report = game.play(1000, &mut roller)?;
        println!(
            "played {} rolls at {:.0} rolls/sec",
            report.rolls_run,
            report.rolls_per_second()
        );

        let ResultsTable::Wide(table) = game.show_results(Layout::Wide)? else {
            anyhow::bail!("expected wide results");
        };
        assert_eq!(table.num_rolls(), 1000);
        assert_eq!(table.num_dice(), 3);
        println!("columns: {:?}", table.die_labels());

        let analyzer = Analyzer::new(&game);
        let jackpots = analyzer.jackpot()?;
        println!("jackpots: {jackpots} / {}", table.num_rolls());
        assert!(jackpots < table.num_rolls());

        let face_counts = analyzer.face_counts_per_roll()?;
        for row in &face_counts.rows {
            assert_eq!(row.iter().sum::<usize>(), game.num_dice());
        }

        let combos = analyzer.combo_count()?;
        let perms = analyzer.permutation_count()?;
        assert_eq!(combos.total(), 1000);
        assert_eq!(perms.total(), 1000);
        // ordered sequences can only split combinations further
        assert!(perms.len() >= combos.len());

        for (combo, count) in combos.entries().iter().take(5) {
            let combo: Vec<String> = combo.iter().map(Face::to_string).collect();
            println!("[{}] x{count}", combo.join(", "));
        }

        Ok(())
    }
}
