//! Command implementations

pub mod simple;
pub mod solve;

pub use simple::run_simple;
pub use solve::{
    DEFAULT_DISPLAY_LIMIT, MIN_TARGET_LENGTH, SolveConfig, parse_attempts, run_solve,
    settle_target_length,
};
