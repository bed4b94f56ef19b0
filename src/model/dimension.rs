use serde::{Deserialize, Serialize};

/// The five OCEAN dimensions, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    EmotionalStability,
}

pub const DIMENSION_COUNT: usize = 5;

impl Dimension {
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Openness,
        Dimension::Conscientiousness,
        Dimension::Extraversion,
        Dimension::Agreeableness,
        Dimension::EmotionalStability,
    ];

    pub fn index(self) -> usize {
        match self {
            Dimension::Openness => 0,
            Dimension::Conscientiousness => 1,
            Dimension::Extraversion => 2,
            Dimension::Agreeableness => 3,
            Dimension::EmotionalStability => 4,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Dimension::Openness => "O",
            Dimension::Conscientiousness => "C",
            Dimension::Extraversion => "E",
            Dimension::Agreeableness => "A",
            Dimension::EmotionalStability => "N",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Openness => "Openness",
            Dimension::Conscientiousness => "Conscientiousness",
            Dimension::Extraversion => "Extraversion",
            Dimension::Agreeableness => "Agreeableness",
            Dimension::EmotionalStability => "Emotional Stability",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::Openness => "Imagination, curiosity, creativity and appetite for the new.",
            Dimension::Conscientiousness => {
                "Organization, discipline, goal orientation and reliability."
            }
            Dimension::Extraversion => {
                "Sociability, assertiveness, energy and taste for interaction."
            }
            Dimension::Agreeableness => "Cooperation, empathy, trust and respect for others.",
            Dimension::EmotionalStability => {
                "Stress handling, calm and resilience (opposite of neuroticism)."
            }
        }
    }
}
