use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::allocation::BalancePolicy;
use crate::rating::RatingPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about = "five-a-side squad balancer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show per-player statistics and the strongest synergy pairs
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        /// Rating function used for the rating column
        #[arg(short, long, value_enum)]
        rating: Option<RatingArg>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Split ten named players into two balanced squads
    Teams {
        #[command(flatten)]
        source: SourceArgs,
        /// Exactly ten player names as they appear in the history file
        #[arg(required = true, num_args = 1..)]
        players: Vec<String>,
        /// Shuffle the roster first so equally rated players can swap squads
        #[arg(long)]
        reroll: bool,
        #[command(flatten)]
        balance: BalanceArgs,
    },
    /// Pick ten random players from the history file and split them
    Sample {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        balance: BalanceArgs,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SourceArgs {
    /// Match history CSV (defaults to $SQUAD_DATA_FILE, then thursday_football.csv)
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct BalanceArgs {
    /// How strongly to keep regular team-mates apart (0 disables)
    #[arg(short = 'w', long)]
    pub synergy_weight: Option<f64>,
    /// Placement rule
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Rating function
    #[arg(short, long, value_enum)]
    pub rating: Option<RatingArg>,
    /// Print JSON instead of coloured squads
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Penalty,
    SizeFirst,
    Snake,
}

impl From<PolicyArg> for BalancePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Penalty => BalancePolicy::Penalty,
            PolicyArg::SizeFirst => BalancePolicy::SizeFirst,
            PolicyArg::Snake => BalancePolicy::Snake,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingArg {
    Average,
    Composite,
}

impl From<RatingArg> for RatingPolicy {
    fn from(arg: RatingArg) -> Self {
        match arg {
            RatingArg::Average => RatingPolicy::AverageScore,
            RatingArg::Composite => RatingPolicy::composite(),
        }
    }
}
