pub mod blocks;
pub mod text;

use serde::Serialize;

use crate::catalog::CatalogAudit;
use crate::model::dimension::Dimension;
use crate::pipeline::classify::Assessment;
use crate::pipeline::score::ScoreAudit;

/// Profile-level KPIs over the five dimension scores.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileStats {
    pub mean: f32,
    pub sd: f32,
    pub range: f32,
    pub strongest: &'static str,
    pub weakest: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub score: f32,
    pub level: &'static str,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub policy: &'static str,
    pub catalog: CatalogAudit,
    pub input: ScoreAudit,
    pub scores: Vec<ScoreEntry>,
    pub profile: ProfileStats,
}

/// Mean, sample standard deviation (n-1), range, and the strongest/weakest
/// dimension. Ties resolve to the earlier dimension in canonical order.
/// An empty slice yields zeroed stats with "-" placeholders instead of
/// naming a dimension that was never scored.
pub fn profile_stats(assessments: &[Assessment]) -> ProfileStats {
    if assessments.is_empty() {
        return ProfileStats {
            mean: 0.0,
            sd: 0.0,
            range: 0.0,
            strongest: "-",
            weakest: "-",
        };
    }
    let n = assessments.len();
    let mut sum = 0.0f32;
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut strongest = Dimension::Openness;
    let mut weakest = Dimension::Openness;
    for a in assessments {
        sum += a.score;
        if a.score > max {
            max = a.score;
            strongest = a.dimension;
        }
        if a.score < min {
            min = a.score;
            weakest = a.dimension;
        }
    }
    let mean = sum / n as f32;

    let sd = if n > 1 {
        let mut ss = 0.0f32;
        for a in assessments {
            let d = a.score - mean;
            ss += d * d;
        }
        (ss / (n - 1) as f32).sqrt()
    } else {
        0.0
    };
    let range = if n > 1 { max - min } else { 0.0 };

    ProfileStats {
        mean,
        sd,
        range,
        strongest: strongest.name(),
        weakest: weakest.name(),
    }
}

pub fn score_entries(assessments: &[Assessment]) -> Vec<ScoreEntry> {
    assessments
        .iter()
        .map(|a| ScoreEntry {
            code: a.dimension.code(),
            name: a.dimension.name(),
            score: a.score,
            level: a.level.label(),
            tag: a.level.tag(),
        })
        .collect()
}

pub fn format_score(v: f32) -> String {
    format!("{:.1}", v)
}
