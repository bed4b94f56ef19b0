pub mod classify;
pub mod report;
pub mod score;
