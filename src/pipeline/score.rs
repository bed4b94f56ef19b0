use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::input::AnswerSet;
use crate::model::dimension::{DIMENSION_COUNT, Dimension};
use crate::model::scores::DimensionScores;

pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;
pub const LIKERT_NEUTRAL: i64 = 3;

/// Handling of answers outside the 1-5 Likert range. Missing answers always
/// default to the neutral midpoint regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfRangePolicy {
    #[default]
    Reject,
    Clamp,
    Neutral,
}

impl OutOfRangePolicy {
    pub fn name(self) -> &'static str {
        match self {
            OutOfRangePolicy::Reject => "reject",
            OutOfRangePolicy::Clamp => "clamp",
            OutOfRangePolicy::Neutral => "neutral",
        }
    }
}

/// Counts of how the input answers were consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreAudit {
    pub answered: usize,
    pub defaulted: usize,
    pub adjusted: usize,
    pub ignored: usize,
}

#[derive(Debug)]
pub struct ScoreOutput {
    pub scores: DimensionScores,
    pub audit: ScoreAudit,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("answer for {id} is out of range: {value} (expected 1-5)")]
    OutOfRange { id: String, value: i64 },
}

/// Maps direct/reverse-keyed 1-5 answers onto 0-100 per-dimension scores.
///
/// Each catalog item contributes one value: the given answer, or the neutral
/// midpoint when unanswered. Reverse-keyed items are mirrored with `6 - v`.
/// Per dimension the values are averaged and the [1,5] mean is rescaled
/// linearly to [0,100], rounded to one decimal.
pub fn compute_scores(
    catalog: &Catalog,
    answers: &AnswerSet,
    policy: OutOfRangePolicy,
) -> Result<ScoreOutput, ScoreError> {
    let mut sums = [0.0f32; DIMENSION_COUNT];
    let mut counts = [0usize; DIMENSION_COUNT];
    let mut audit = ScoreAudit::default();

    for item in catalog.items() {
        let value = match answers.get(&item.id) {
            Some(v) if (LIKERT_MIN..=LIKERT_MAX).contains(&v) => {
                audit.answered += 1;
                v
            }
            Some(v) => match policy {
                OutOfRangePolicy::Reject => {
                    return Err(ScoreError::OutOfRange {
                        id: item.id.clone(),
                        value: v,
                    });
                }
                OutOfRangePolicy::Clamp => {
                    tracing::warn!(id = %item.id, value = v, "clamping out-of-range answer");
                    audit.adjusted += 1;
                    v.clamp(LIKERT_MIN, LIKERT_MAX)
                }
                OutOfRangePolicy::Neutral => {
                    tracing::warn!(id = %item.id, value = v, "neutralizing out-of-range answer");
                    audit.adjusted += 1;
                    LIKERT_NEUTRAL
                }
            },
            None => {
                audit.defaulted += 1;
                LIKERT_NEUTRAL
            }
        };

        let keyed = if item.reverse {
            reverse_value(value)
        } else {
            value
        };
        sums[item.dimension.index()] += keyed as f32;
        counts[item.dimension.index()] += 1;
    }

    for id in answers.ids() {
        if !catalog.contains(id) {
            tracing::warn!(id, "answer id not in catalog; ignoring");
            audit.ignored += 1;
        }
    }

    let mut values = [0.0f32; DIMENSION_COUNT];
    for dim in Dimension::ALL {
        let idx = dim.index();
        // Catalog validation guarantees counts[idx] > 0.
        let mean = sums[idx] / counts[idx] as f32;
        values[idx] = round1(rescale(mean));
    }

    Ok(ScoreOutput {
        scores: DimensionScores::new(values),
        audit,
    })
}

/// Mirrors a Likert value around the midpoint: 1<->5, 2<->4, 3 fixed.
pub fn reverse_value(v: i64) -> i64 {
    6 - v
}

/// Linear [1,5] -> [0,100].
fn rescale(mean: f32) -> f32 {
    (mean - 1.0) / 4.0 * 100.0
}

fn round1(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
