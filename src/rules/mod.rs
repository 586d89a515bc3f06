//! Game rules: line scanning and win detection

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_in_row, longest_run, DIRECTIONS};
