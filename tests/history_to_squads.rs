use std::collections::BTreeSet;
use std::fs;

use squad_balancer::allocation::{AllocationOptions, BalancePolicy};
use squad_balancer::domain::{MatchEvent, Outcome, PlayerId, Side};
use squad_balancer::errors::{DataLoadError, InvalidRosterError};
use squad_balancer::{aggregate, allocate, load_file, rate};

const HISTORY: &str = "\
Name,03/01,10/01,17/01,24/01,31/01
Ania,R:W,R:W,W:L,R:D,w:w
Bartek,R:W,R:W,W:L,R:D,W:W
Celina,W:L,W:L,R:W,W:D,R:L
Darek,W:L,R:W,R:W,W:D,
Ewa,R:W,W:L,R:W,R:D,W:W
Filip,W:L,W:L,W:L,W:D,R:L
Gosia,R:W,,R:W,,W:W
Henryk,W:L,R:W,W:L,R:D,
Iza,,W:L,R:W,W:D,R:L
Jan,B:D,B:W
,R:W,R:W,R:W,R:W,R:W
";

fn write_history(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("history.csv");
    fs::write(&path, HISTORY).unwrap();
    path
}

#[test]
fn test_file_to_squads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_history(&dir);

    let histories = load_file(&path).unwrap();
    assert_eq!(histories.len(), 10);
    assert_eq!(
        histories["Jan"].get(0),
        Some(&MatchEvent::new(Side::None, Outcome::Draw))
    );

    let (performance, synergy) = aggregate(&histories);
    assert_eq!(performance["Jan"].games, 0);
    assert_eq!(rate(&performance["Jan"]), 0.0);
    assert_eq!(synergy.get("Ania", "Bartek"), 5);

    let roster: Vec<PlayerId> = histories.keys().cloned().collect();
    for policy in [BalancePolicy::Penalty, BalancePolicy::SizeFirst, BalancePolicy::Snake] {
        let options = AllocationOptions {
            policy,
            ..AllocationOptions::default()
        };
        let (first, second) = allocate(&roster, &performance, &synergy, &options).unwrap();

        let all: BTreeSet<&PlayerId> = first.iter().chain(second.iter()).collect();
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
        assert_eq!(all.len(), 10);
    }
}

#[test]
fn test_missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_file(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(DataLoadError::NotFound(_))));
}

#[test]
fn test_unknown_player_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_history(&dir);

    let histories = load_file(&path).unwrap();
    let (performance, synergy) = aggregate(&histories);

    let mut roster: Vec<PlayerId> = histories.keys().cloned().collect();
    roster[0] = "Zbigniew".to_string();

    let result = allocate(&roster, &performance, &synergy, &AllocationOptions::default());
    assert_eq!(
        result,
        Err(InvalidRosterError::UnknownPlayer("Zbigniew".to_string()))
    );
}
