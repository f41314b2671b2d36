use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use super::draft::Draft;
use super::roster::{RatedPlayer, TieBreak, order_roster, validate_roster, validate_synergy_weight};
use super::types::{AllocationOptions, Squad};
use crate::domain::PlayerId;
use crate::errors::InvalidRosterError;
use crate::stats::{PerformanceMap, SynergyMatrix};

/// Split ten players into two squads of five.
///
/// Players are sorted by rating (highest first, ties by identifier) and
/// placed one at a time under `options.policy`. The result only depends on
/// the inputs, so repeated calls give the same squads.
pub fn allocate(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    synergy: &SynergyMatrix,
    options: &AllocationOptions,
) -> Result<(Squad, Squad), InvalidRosterError> {
    allocate_with(roster, performance, synergy, options, TieBreak::PlayerId)
}

/// Like [`allocate`], but players with equal ratings keep their roster order
pub fn allocate_in_order(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    synergy: &SynergyMatrix,
    options: &AllocationOptions,
) -> Result<(Squad, Squad), InvalidRosterError> {
    allocate_with(roster, performance, synergy, options, TieBreak::InputOrder)
}

/// Shuffle the roster with `rng` before allocating, so equally rated
/// players can land on different squads from call to call
pub fn reroll<R: Rng + ?Sized>(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    synergy: &SynergyMatrix,
    options: &AllocationOptions,
    rng: &mut R,
) -> Result<(Squad, Squad), InvalidRosterError> {
    check_inputs(roster, performance, options)?;

    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);
    info!("Re-rolling squads from shuffled roster");

    allocate_in_order(&shuffled, performance, synergy, options)
}

fn allocate_with(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    synergy: &SynergyMatrix,
    options: &AllocationOptions,
    tie_break: TieBreak,
) -> Result<(Squad, Squad), InvalidRosterError> {
    check_inputs(roster, performance, options)?;

    let ordered = order_roster(roster, performance, options.rating, tie_break);
    info!(
        "Allocating {} players with {} policy (synergy weight {:.2})",
        ordered.len(),
        options.policy.as_str(),
        options.synergy_weight
    );

    Ok(draft_squads(&ordered, synergy, options))
}

fn check_inputs(
    roster: &[PlayerId],
    performance: &PerformanceMap,
    options: &AllocationOptions,
) -> Result<(), InvalidRosterError> {
    validate_roster(roster, performance)?;
    validate_synergy_weight(options.synergy_weight)
}

fn draft_squads(
    ordered: &[RatedPlayer],
    synergy: &SynergyMatrix,
    options: &AllocationOptions,
) -> (Squad, Squad) {
    Draft::new(synergy).run(ordered, options.policy, options.synergy_weight)
}
