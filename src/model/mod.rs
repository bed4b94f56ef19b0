pub mod dimension;
pub mod levels;
pub mod scores;
