pub mod gains;
pub mod holding;
pub mod journal;
