use log::{debug, info};

use super::performance::{PerformanceMap, PerformanceRecord};
use super::synergy::SynergyMatrix;
use crate::domain::{HistoryMap, Side};

/// Walk every match slot once, building performance records and synergy counts
pub fn aggregate(histories: &HistoryMap) -> (PerformanceMap, SynergyMatrix) {
    let mut performance = initialize_records(histories);
    let mut synergy = SynergyMatrix::new(histories.keys().cloned().collect());

    let num_slots = count_slots(histories);
    info!(
        "Aggregating {} match slots for {} players",
        num_slots,
        histories.len()
    );

    for slot in 0..num_slots {
        let (red, white) = process_slot(histories, slot, &mut performance, &synergy);
        debug!("  Slot {}: {} red, {} white", slot, red.len(), white.len());

        synergy.record_group(&red);
        synergy.record_group(&white);
    }

    (performance, synergy)
}

fn initialize_records(histories: &HistoryMap) -> PerformanceMap {
    histories
        .keys()
        .map(|player| (player.clone(), PerformanceRecord::default()))
        .collect()
}

fn count_slots(histories: &HistoryMap) -> usize {
    histories.values().map(|h| h.len()).max().unwrap_or(0)
}

/// Update records for one slot and return the dense indices of each side
fn process_slot(
    histories: &HistoryMap,
    slot: usize,
    performance: &mut PerformanceMap,
    synergy: &SynergyMatrix,
) -> (Vec<usize>, Vec<usize>) {
    let mut red = Vec::new();
    let mut white = Vec::new();

    for (player, history) in histories {
        let Some(event) = history.get(slot) else {
            continue;
        };

        if !event.counts() {
            continue;
        }

        if let Some(record) = performance.get_mut(player) {
            record.record(event.outcome);
        }

        let Some(idx) = synergy.index_of(player) else {
            continue;
        };

        match event.side {
            Side::Red => red.push(idx),
            Side::White => white.push(idx),
            Side::None => {}
        }
    }

    (red, white)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{RawTable, load};

    fn aggregate_csv(input: &str) -> (PerformanceMap, SynergyMatrix) {
        let table = RawTable::from_reader(input.as_bytes()).unwrap();
        aggregate(&load(&table).unwrap())
    }

    #[test]
    fn test_empty_history() {
        let (performance, synergy) = aggregate(&HistoryMap::new());
        assert!(performance.is_empty());
        assert!(synergy.is_empty());
    }

    #[test]
    fn test_performance_counts() {
        let (performance, _) = aggregate_csv(
            "Player,1,2,3,4\n\
             Alice,R:W,R:D,W:L,R:W\n\
             Bob,W:L,,B:W,x\n",
        );

        let alice = performance["Alice"];
        assert_eq!((alice.games, alice.wins, alice.draws, alice.losses), (4, 2, 1, 1));
        assert_eq!(alice.score, 1);

        let bob = performance["Bob"];
        assert_eq!(bob.games, 1);
        assert_eq!(bob.score, -1);
    }

    #[test]
    fn test_zero_game_player_gets_record() {
        let (performance, _) = aggregate_csv("Player,1\nAlice,R:W\nGhost,\n");
        assert_eq!(performance["Ghost"], PerformanceRecord::default());
    }

    #[test]
    fn test_synergy_counts_named_sides_only() {
        let (_, synergy) = aggregate_csv(
            "Player,1,2,3\n\
             Alice,R:W,W:L,B:W\n\
             Bob,R:W,W:L,B:W\n\
             Carol,W:L,R:W,B:W\n\
             Dan,W:L,R:X,\n",
        );

        assert_eq!(synergy.get("Alice", "Bob"), 2);
        assert_eq!(synergy.get("Carol", "Dan"), 1);
        assert_eq!(synergy.get("Alice", "Carol"), 0);
        assert_eq!(synergy.get("Bob", "Dan"), 0);
    }

    #[test]
    fn test_invariants_hold_for_every_player() {
        let (performance, synergy) = aggregate_csv(
            "Player,1,2,3,4,5\n\
             A,R:W,l,d,B:L,W:W\n\
             B,W:L,R:L,,R:D\n\
             C,r:w,w,W:D,R:D,R:L\n\
             D,,,,,\n",
        );

        for record in performance.values() {
            assert_eq!(record.games, record.wins + record.draws + record.losses);
            assert_eq!(record.score, record.wins as i32 - record.losses as i32);
        }

        let players: Vec<&String> = performance.keys().collect();
        for a in &players {
            for b in &players {
                assert_eq!(synergy.get(a, b), synergy.get(b, a));
            }
        }
    }
}
