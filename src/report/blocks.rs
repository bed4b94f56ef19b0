use crate::model::dimension::Dimension;

/// Score band used to select interpretation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    High,
    Balanced,
    Low,
}

pub fn band_for(score: f32) -> Band {
    if score >= 60.0 {
        Band::High
    } else if score <= 40.0 {
        Band::Low
    } else {
        Band::Balanced
    }
}

/// Static interpretation content for one dimension.
#[derive(Debug, Clone, Copy)]
pub struct DimensionBlocks {
    pub strengths_high: &'static [&'static str],
    pub strengths_low: &'static [&'static str],
    pub risks_low: &'static [&'static str],
    pub roles_high: &'static [&'static str],
    pub roles_low: &'static [&'static str],
    pub not_apt_low: &'static [&'static str],
    /// Second caution appended in the high band.
    pub caution_high: &'static str,
    pub note: &'static str,
}

/// Band-selected interpretation for a scored dimension.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub strengths: Vec<&'static str>,
    pub cautions: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub roles: Vec<&'static str>,
    pub not_apt: Vec<&'static str>,
    pub note: &'static str,
}

const RECS_HIGH: &[&str] = &[
    "Define measurable goals and celebrate milestones.",
    "Share good practices with the team.",
    "Balance output with recovery time.",
];

const RECS_LOW: &[&str] = &[
    "Establish routines and checklists.",
    "Use reminders and visual work management.",
    "Mentoring or pairing to sustain key habits.",
];

const RECS_BALANCED: &[&str] = &[
    "Clarify expectations and limits per project.",
    "Ask for regular feedback from peers and clients.",
];

pub fn interpret(dim: Dimension, score: f32) -> Interpretation {
    let blocks = blocks_for(dim);
    match band_for(score) {
        Band::High => Interpretation {
            strengths: blocks.strengths_high.to_vec(),
            cautions: vec![blocks.risks_low[0], blocks.caution_high],
            recommendations: RECS_HIGH.to_vec(),
            roles: blocks.roles_high.to_vec(),
            not_apt: Vec::new(),
            note: blocks.note,
        },
        Band::Low => Interpretation {
            strengths: blocks.strengths_low.to_vec(),
            cautions: blocks.risks_low.to_vec(),
            recommendations: RECS_LOW.to_vec(),
            roles: blocks.roles_low.to_vec(),
            not_apt: blocks.not_apt_low.to_vec(),
            note: blocks.note,
        },
        Band::Balanced => Interpretation {
            strengths: vec!["Balanced expression; adapts style to context."],
            cautions: vec!["Plan ahead for peaks of demand."],
            recommendations: RECS_BALANCED.to_vec(),
            roles: vec![
                "Mixed roles (individual and collaborative)",
                "Projects with moderate interaction",
            ],
            not_apt: Vec::new(),
            note: blocks.note,
        },
    }
}

pub fn blocks_for(dim: Dimension) -> &'static DimensionBlocks {
    match dim {
        Dimension::Openness => &OPENNESS,
        Dimension::Conscientiousness => &CONSCIENTIOUSNESS,
        Dimension::Extraversion => &EXTRAVERSION,
        Dimension::Agreeableness => &AGREEABLENESS,
        Dimension::EmotionalStability => &EMOTIONAL_STABILITY,
    }
}

const OPENNESS: DimensionBlocks = DimensionBlocks {
    strengths_high: &[
        "Generates original ideas and improves processes.",
        "Learns quickly and adapts to change.",
        "Explores alternatives before deciding.",
    ],
    strengths_low: &[
        "Capacity for deep focus and consistency when structure exists.",
        "Brings a realistic, practical outlook.",
    ],
    risks_low: &[
        "May cling to the familiar.",
        "Less interest in exploring new approaches.",
        "Risk of stagnation in dynamic contexts.",
    ],
    roles_high: &["R&D", "Innovation", "Strategy", "Consulting", "Product"],
    roles_low: &["Traditional operations", "Strict compliance roles"],
    not_apt_low: &["Positions demanding high disruptive creativity"],
    caution_high: "Avoid taking on too much and failing to delegate.",
    note: "Indicates preference for the new versus the conventional.",
};

const CONSCIENTIOUSNESS: DimensionBlocks = DimensionBlocks {
    strengths_high: &[
        "Reliable, execution and detail oriented.",
        "Consistent planning and discipline.",
        "Strong follow-through on deadlines and standards.",
    ],
    strengths_low: &["Capacity for deep focus and consistency when structure exists."],
    risks_low: &[
        "Risk of procrastination or losing focus.",
        "Needs external supervision and reminders.",
        "Difficulty sustaining control routines.",
    ],
    roles_high: &["Project management", "Quality", "Finance", "PMO"],
    roles_low: &["Unstructured creative work", "Chaotic environments"],
    not_apt_low: &["Critical regulatory-control positions without support"],
    caution_high: "Avoid taking on too much and failing to delegate.",
    note: "Reflects order, discipline and reliability.",
};

const EXTRAVERSION: DimensionBlocks = DimensionBlocks {
    strengths_high: &[
        "Ability to influence and build networks.",
        "Energy in collaborative settings.",
        "Fluid communication with clients and teams.",
    ],
    strengths_low: &["Greater autonomy in individual, high-concentration tasks."],
    risks_low: &[
        "Prefers individual, concentrated work.",
        "Less spontaneity in large groups.",
        "Risk of under-exposure in visible settings.",
    ],
    roles_high: &["Sales", "Public relations", "Team leadership"],
    roles_low: &["Deep individual analysis", "Isolated technical R&D"],
    not_apt_low: &["Roles with constant public exposure"],
    caution_high: "Avoid overload from taking on too many interactions.",
    note: "Measures social energy and assertiveness.",
};

const AGREEABLENESS: DimensionBlocks = DimensionBlocks {
    strengths_high: &[
        "Facilitates collaboration and trust.",
        "Listening and negotiation capacity.",
        "Handles conflict with tact.",
    ],
    strengths_low: &["Capacity for deep focus and consistency when structure exists."],
    risks_low: &[
        "More direct, competitive communication.",
        "Risk of friction in sensitive teams.",
        "May put results above relationships.",
    ],
    roles_high: &["Human resources", "Customer service", "Mediation"],
    roles_low: &["Hard negotiation", "Highly competitive environments"],
    not_apt_low: &["Positions requiring strong diplomacy with high social sensitivity"],
    caution_high: "Avoid taking on too much and failing to delegate.",
    note: "Describes cooperation and empathy versus competitive candor.",
};

const EMOTIONAL_STABILITY: DimensionBlocks = DimensionBlocks {
    strengths_high: &[
        "Keeps calm under pressure.",
        "Makes composed decisions in a crisis.",
        "High resilience to setbacks.",
    ],
    strengths_low: &["Capacity for deep focus and consistency when structure exists."],
    risks_low: &[
        "Vulnerable to stress and reactivity.",
        "Needs support during demand peaks.",
        "Risk of burnout on critical deadlines.",
    ],
    roles_high: &["Crisis management", "High-stress operations", "Leadership"],
    roles_low: &["Unpredictable environments without support"],
    not_apt_low: &["Positions with constant exposure to conflict or severe crisis"],
    caution_high: "Avoid taking on too much and failing to delegate.",
    note: "Assesses stress handling and emotional regulation.",
};
