use crate::*;
pub use random::*;

mod random;

/// Attempts made by [`generate_valid_field`] before giving up, unless told otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

pub trait FieldGenerator {
    fn generate(self, config: GameConfig) -> Field;
}

/// Draws candidates until one passes [`is_reachable`].
///
/// Attempt `i` uses `seed + i`, every attempt is independent of the ones before it.
pub fn generate_valid_field(config: GameConfig, seed: u64, max_attempts: u32) -> Result<Field> {
    for attempt in 0..max_attempts {
        let field = RandomFieldGenerator::new(seed.wrapping_add(attempt.into())).generate(config);
        if is_reachable(&field) {
            log::debug!(
                "Accepted field after {} attempts, goal at {:?}",
                attempt + 1,
                field.goal()
            );
            return Ok(field);
        }
        if log::log_enabled!(log::Level::Trace) {
            let reached = reachable_cells(&field).iter().filter(|&&seen| seen).count();
            log::trace!(
                "Rejected unsolvable candidate {}, search reached {} of {} cells",
                attempt,
                reached,
                field.total_cells()
            );
        }
    }

    log::warn!(
        "Gave up on a {}x{} field at {}% hazards after {} attempts",
        config.size.0,
        config.size.1,
        config.hazard_chance,
        max_attempts
    );
    Err(GameError::GenerationExhausted {
        attempts: max_attempts,
    })
}
