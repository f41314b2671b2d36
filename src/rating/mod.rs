pub mod function;
pub mod types;

pub use function::{rate, rate_with, win_rate};
pub use types::{FormLevel, RatingPolicy};
