use crate::model::dimension::Dimension;

/// One statically defined questionnaire item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub dimension: Dimension,
    pub reverse: bool,
    pub text: &'static str,
}

const fn item(id: &'static str, dimension: Dimension, reverse: bool, text: &'static str) -> ItemDef {
    ItemDef {
        id,
        dimension,
        reverse,
        text,
    }
}

/// Canonical 50-item catalog: 10 items per dimension, 5 direct-keyed followed
/// by 5 reverse-keyed.
const BUILTIN_ITEMS: &[ItemDef] = &[
    // Openness
    item("O1", Dimension::Openness, false, "I enjoy learning new concepts."),
    item("O2", Dimension::Openness, false, "I have a very active imagination."),
    item("O3", Dimension::Openness, false, "I am interested in art and culture."),
    item("O4", Dimension::Openness, false, "Intellectual challenges attract me."),
    item("O5", Dimension::Openness, false, "I value creativity and originality."),
    item("O6", Dimension::Openness, true, "I prefer routine over trying new things."),
    item("O7", Dimension::Openness, true, "I rarely reflect on abstract ideas."),
    item("O8", Dimension::Openness, true, "Debates about ideas do not interest me."),
    item("O9", Dimension::Openness, true, "I find it hard to accept changes in methods."),
    item("O10", Dimension::Openness, true, "I avoid unfamiliar experiences."),
    // Conscientiousness
    item("C1", Dimension::Conscientiousness, false, "I meet deadlines and commitments."),
    item("C2", Dimension::Conscientiousness, false, "I am organized in my tasks."),
    item("C3", Dimension::Conscientiousness, false, "I plan before executing."),
    item("C4", Dimension::Conscientiousness, false, "I am consistent and disciplined."),
    item("C5", Dimension::Conscientiousness, false, "I strive for excellence."),
    item("C6", Dimension::Conscientiousness, true, "I procrastinate on important activities."),
    item("C7", Dimension::Conscientiousness, true, "I get distracted easily."),
    item("C8", Dimension::Conscientiousness, true, "I avoid responsibilities when I can."),
    item("C9", Dimension::Conscientiousness, true, "I leave my work area in disorder."),
    item("C10", Dimension::Conscientiousness, true, "I struggle to follow procedures."),
    // Extraversion
    item("E1", Dimension::Extraversion, false, "I enjoy speaking in public."),
    item("E2", Dimension::Extraversion, false, "I take the initiative in groups."),
    item("E3", Dimension::Extraversion, false, "Working with other people energizes me."),
    item("E4", Dimension::Extraversion, false, "I feel comfortable with strangers."),
    item("E5", Dimension::Extraversion, false, "I like to lead conversations."),
    item("E6", Dimension::Extraversion, true, "I prefer to work quietly and alone."),
    item("E7", Dimension::Extraversion, true, "I avoid prolonged social interaction."),
    item("E8", Dimension::Extraversion, true, "I am a rather reserved person."),
    item("E9", Dimension::Extraversion, true, "I find it hard to make my points in groups."),
    item("E10", Dimension::Extraversion, true, "I prefer observing over participating."),
    // Agreeableness
    item("A1", Dimension::Agreeableness, false, "I empathize easily."),
    item("A2", Dimension::Agreeableness, false, "I care about the well-being of others."),
    item("A3", Dimension::Agreeableness, false, "I collaborate and look for consensus."),
    item("A4", Dimension::Agreeableness, false, "I trust the good intentions of others."),
    item("A5", Dimension::Agreeableness, false, "I stay respectful in disagreements."),
    item("A6", Dimension::Agreeableness, true, "I am cynical about other people's motives."),
    item("A7", Dimension::Agreeableness, true, "I can be direct to the point of bluntness."),
    item("A8", Dimension::Agreeableness, true, "I find it hard to put myself in others' shoes."),
    item("A9", Dimension::Agreeableness, true, "I tend to put my interests above the team's."),
    item("A10", Dimension::Agreeableness, true, "Cooperation is not a priority for me."),
    // Emotional Stability
    item("N1", Dimension::EmotionalStability, false, "I stay calm under pressure."),
    item("N2", Dimension::EmotionalStability, false, "I recover quickly from setbacks."),
    item("N3", Dimension::EmotionalStability, false, "I manage stress in a healthy way."),
    item("N4", Dimension::EmotionalStability, false, "I keep my focus even under pressure."),
    item("N5", Dimension::EmotionalStability, false, "I feel confident in my abilities."),
    item("N6", Dimension::EmotionalStability, true, "I worry excessively about small things."),
    item("N7", Dimension::EmotionalStability, true, "I get irritated easily."),
    item("N8", Dimension::EmotionalStability, true, "My mood fluctuates frequently."),
    item("N9", Dimension::EmotionalStability, true, "Stress usually overwhelms me."),
    item("N10", Dimension::EmotionalStability, true, "It takes me long to regain my calm."),
];

pub fn builtin_items() -> &'static [ItemDef] {
    BUILTIN_ITEMS
}
