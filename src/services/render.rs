use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use super::teams::{MatchupReport, PlayerStats, SynergyPair};
use crate::allocation::{BalanceVerdict, MatchupSummary, SquadSummary};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn print_report(report: &MatchupReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }

    let summary = &report.summary;
    print_squad("Red", &summary.first, |name| name.red());
    println!();
    print_squad("White", &summary.second, |name| name.bright_white());
    println!();
    println!("{}", verdict_line(summary));
    println!(
        "{}",
        format!(
            "policy: {}, rating: {}, synergy weight: {:.1}{}",
            report.policy.as_str(),
            report.rating.as_str(),
            report.synergy_weight,
            if report.rerolled { ", re-rolled" } else { "" }
        )
        .as_str()
        .dimmed()
    );
    Ok(())
}

fn print_squad(label: &str, squad: &SquadSummary, paint: impl Fn(&str) -> ColoredString) {
    println!("{}", paint(label).bold());
    for player in &squad.members {
        println!("  {}", paint(player.as_str()));
    }
    println!(
        "  total {:.2}, average {:.2}",
        squad.total_rating, squad.average_rating
    );
}

pub fn verdict_line(summary: &MatchupSummary) -> String {
    let text = match summary.verdict {
        BalanceVerdict::Excellent => "Excellent Balance",
        BalanceVerdict::Good => "Good Balance",
        BalanceVerdict::Imbalanced => "Some Imbalance",
    };
    let line = format!("{} (Difference: {:.2})", text, summary.difference);

    match summary.verdict {
        BalanceVerdict::Excellent => line.as_str().green().to_string(),
        BalanceVerdict::Good => line.as_str().cyan().to_string(),
        BalanceVerdict::Imbalanced => line.as_str().yellow().to_string(),
    }
}

pub fn print_stats(rows: &[PlayerStats], pairs: &[SynergyPair]) {
    println!(
        "{}",
        format!(
            "{:<20} {:>5} {:>4} {:>4} {:>4} {:>6} {:>8} {:>7}  {}",
            "Player", "Games", "W", "D", "L", "Score", "Win rate", "Rating", "Form"
        )
        .as_str()
        .bold()
    );

    for row in rows {
        println!(
            "{:<20} {:>5} {:>4} {:>4} {:>4} {:>6} {:>7.1}% {:>7.2}  {}",
            row.player,
            row.games,
            row.wins,
            row.draws,
            row.losses,
            row.score,
            row.win_rate * 100.0,
            row.rating,
            row.form.as_str()
        );
    }

    if pairs.is_empty() {
        return;
    }

    println!();
    println!("{}", "Most frequent team-mates".bold());
    for pair in pairs {
        println!(
            "  {} + {}: {}",
            pair.first, pair.second, pair.matches_together
        );
    }
}
