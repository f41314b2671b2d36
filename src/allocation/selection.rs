use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use super::types::ROSTER_SIZE;
use crate::domain::PlayerId;
use crate::errors::InvalidRosterError;

/// Pick a full roster uniformly at random from `pool`
pub fn random_roster<R: Rng + ?Sized>(
    pool: &[PlayerId],
    rng: &mut R,
) -> Result<Vec<PlayerId>, InvalidRosterError> {
    if pool.len() < ROSTER_SIZE {
        return Err(InvalidRosterError::WrongSize {
            expected: ROSTER_SIZE,
            actual: pool.len(),
        });
    }

    let mut candidates = pool.to_vec();
    candidates.shuffle(rng);
    candidates.truncate(ROSTER_SIZE);

    info!("Randomly selected {} of {} players", candidates.len(), pool.len());
    Ok(candidates)
}
