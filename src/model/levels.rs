/// Qualitative level for a 0-100 dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    VeryHigh,
    High,
    Average,
    Low,
    VeryLow,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::VeryHigh => "Very High",
            Level::High => "High",
            Level::Average => "Average",
            Level::Low => "Low",
            Level::VeryLow => "Very Low",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Level::VeryHigh => "Dominant",
            Level::High => "Marked",
            Level::Average => "Moderate",
            Level::Low => "Mild",
            Level::VeryLow => "Minimal",
        }
    }
}

/// Score breakpoints for the five-bucket level table. Buckets are closed on
/// their lower bound: a score equal to a breakpoint lands in the upper bucket.
#[derive(Debug, Clone)]
pub struct LevelThresholds {
    pub very_high: f32,
    pub high: f32,
    pub average: f32,
    pub low: f32,
}

impl LevelThresholds {
    pub fn default_v1() -> Self {
        Self {
            very_high: 75.0,
            high: 60.0,
            average: 40.0,
            low: 25.0,
        }
    }
}
