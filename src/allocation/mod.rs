pub mod allocator;
mod draft;
pub mod roster;
pub mod selection;
pub mod summary;
pub mod types;

pub use allocator::{allocate, allocate_in_order, reroll};
pub use roster::validate_roster;
pub use selection::random_roster;
pub use summary::{BalanceVerdict, MatchupSummary, SquadSummary, summarize};
pub use types::{AllocationOptions, BalancePolicy, ROSTER_SIZE, SQUAD_SIZE, Squad};
