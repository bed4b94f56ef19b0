use crate::model::dimension::Dimension;
use crate::model::levels::{Level, LevelThresholds};
use crate::model::scores::DimensionScores;

/// One classified dimension score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub dimension: Dimension,
    pub score: f32,
    pub level: Level,
}

/// Total over the real line; buckets are closed on their lower bound.
pub fn classify(score: f32, thresholds: &LevelThresholds) -> Level {
    if score >= thresholds.very_high {
        Level::VeryHigh
    } else if score >= thresholds.high {
        Level::High
    } else if score >= thresholds.average {
        Level::Average
    } else if score >= thresholds.low {
        Level::Low
    } else {
        Level::VeryLow
    }
}

pub fn run_classify(scores: &DimensionScores, thresholds: &LevelThresholds) -> Vec<Assessment> {
    scores
        .iter()
        .map(|(dimension, score)| Assessment {
            dimension,
            score,
            level: classify(score, thresholds),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/classify.rs"]
mod tests;
