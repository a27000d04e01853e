use super::*;

/// Odds of dropping the goal on each eligible cell, one in this many.
const GOAL_ODDS: u32 = 7;

/// Generation strategy that scans the field once, dropping the goal somewhere past the midpoint and scattering hazards
/// at the configured density. Candidates are not checked for solvability.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomFieldGenerator {
    seed: u64,
}

impl RandomFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldGenerator for RandomFieldGenerator {
    fn generate(self, config: GameConfig) -> Field {
        use rand::prelude::*;

        let (rows, columns) = config.size;
        let mut terrain: Array2<Terrain> = Array2::default(config.size.to_nd_index());
        let mut goal_placed = false;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for row in 0..rows {
            for column in 0..columns {
                let coords = (row, column);
                if coords == START {
                    continue;
                }

                // keep the goal out of the first row, first column, and the start quadrant
                let past_midpoint = row > rows / 2 || column > columns / 2;
                let eligible = !goal_placed && past_midpoint && row != 0 && column != 0;
                if eligible && rng.random_range(0..GOAL_ODDS) == 0 {
                    terrain[coords.to_nd_index()] = Terrain::Goal;
                    goal_placed = true;
                    continue;
                }

                if rng.random_range(0..100u8) < config.hazard_chance {
                    terrain[coords.to_nd_index()] = Terrain::Hazard;
                }
            }
        }

        if !goal_placed {
            let corner = (rows - 1, columns - 1);
            if corner == START {
                log::debug!("No room for a goal on a 1x1 field");
            } else {
                terrain[corner.to_nd_index()] = Terrain::Goal;
            }
        }

        let field = Field::from_terrain_unchecked(terrain);
        log::trace!(
            "Generated candidate field with {} hazards, goal at {:?}, not yet validated",
            field.hazard_count(),
            field.goal()
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, size: Coord2, hazard_chance: u8) -> Field {
        RandomFieldGenerator::new(seed).generate(GameConfig::new(size, hazard_chance))
    }

    #[test]
    fn candidates_hold_exactly_one_goal_and_a_clear_start() {
        for seed in 0..200 {
            for &(size, chance) in &[((10, 10), 45), ((2, 2), 100), ((1, 5), 0), ((7, 3), 80)] {
                let field = generate(seed, size, chance);
                assert_eq!(field.goal_count(), 1, "seed {seed} size {size:?}");
                assert_eq!(field[START], Terrain::Empty);
                assert_eq!(field.cell_at(START), Cell::Visited);
                field.validate().unwrap();
            }
        }
    }

    #[test]
    fn goal_stays_past_the_midpoint_and_off_the_first_row_and_column() {
        for seed in 0..200 {
            let field = generate(seed, (10, 10), 45);
            let (row, column) = field.goal().unwrap();
            assert!(row > 5 || column > 5);
            assert!(row != 0 && column != 0);
        }
    }

    #[test]
    fn hazard_chance_extremes() {
        let clear = generate(3, (6, 6), 0);
        assert_eq!(clear.hazard_count(), 0);

        let full = generate(3, (6, 6), 100);
        assert_eq!(full.hazard_count(), full.total_cells() - 2);
    }

    #[test]
    fn fallback_goal_lands_in_the_corner() {
        // a single row has no cell outside row 0, so the scan never drops the goal
        let field = generate(11, (1, 4), 30);
        assert_eq!(field.goal(), Some((0, 3)));
    }

    #[test]
    fn single_cell_field_has_no_goal() {
        let field = generate(0, (1, 1), 45);
        assert_eq!(field.goal(), None);
        assert_eq!(field.cell_at(START), Cell::Visited);
    }

    #[test]
    fn same_seed_same_field() {
        assert_eq!(generate(42, (10, 10), 45), generate(42, (10, 10), 45));
    }
}
