use crate::pipeline::classify::Assessment;
use crate::pipeline::score::ScoreAudit;
use crate::report::blocks::interpret;
use crate::report::{ProfileStats, format_score};

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub assessments: &'a [Assessment],
    pub profile: &'a ProfileStats,
    pub audit: &'a ScoreAudit,
    pub policy: &'static str,
}

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();

    out.push_str("Big Five (OCEAN) Profile Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Overall profile\n");
    out.push_str(&format!("Out-of-range policy: {}\n", ctx.policy));
    out.push_str(&format!(
        "Answers: {} given, {} defaulted, {} adjusted, {} ignored\n",
        ctx.audit.answered, ctx.audit.defaulted, ctx.audit.adjusted, ctx.audit.ignored
    ));
    out.push_str(&format!(
        "Profile mean: {}  sd: {:.2}  range: {:.2}\n",
        format_score(ctx.profile.mean),
        ctx.profile.sd,
        ctx.profile.range
    ));
    out.push_str(&format!(
        "Strongest dimension: {}\nWeakest dimension: {}\n",
        ctx.profile.strongest, ctx.profile.weakest
    ));
    out.push_str(&format!("Overall: {}\n\n", overall_statement(ctx.profile.mean)));

    out.push_str("2. Dimension scores\n");
    for a in ctx.assessments {
        out.push_str(&format!(
            "{}  {:<22} {:>6}  {} ({})\n",
            a.dimension.code(),
            a.dimension.name(),
            format_score(a.score),
            a.level.label(),
            a.level.tag()
        ));
    }
    out.push('\n');

    out.push_str("3. Interpretation\n");
    for a in ctx.assessments {
        let interp = interpret(a.dimension, a.score);
        out.push_str(&format!(
            "\n{} - {}: {} ({}) at {}\n",
            a.dimension.code(),
            a.dimension.name(),
            a.level.label(),
            a.level.tag(),
            format_score(a.score)
        ));
        out.push_str(&format!("{}\n", a.dimension.description()));
        out.push_str(&format!("{}\n", interp.note));
        out.push_str("Strengths:\n");
        for s in &interp.strengths {
            out.push_str(&format!("- {}\n", s));
        }
        out.push_str("Watch for:\n");
        for c in &interp.cautions {
            out.push_str(&format!("- {}\n", c));
        }
        out.push_str("Recommendations:\n");
        for r in &interp.recommendations {
            out.push_str(&format!("- {}\n", r));
        }
        out.push_str(&format!("Suggested roles: {}\n", interp.roles.join(", ")));
        if !interp.not_apt.is_empty() {
            out.push_str(&format!("Not recommended for: {}\n", interp.not_apt.join(", ")));
        }
    }

    out
}

fn overall_statement(mean: f32) -> &'static str {
    if mean > 60.0 {
        "high-leaning profile, suited to demanding environments"
    } else if mean < 40.0 {
        "conservative profile, suited to stable and rule-bound environments"
    } else {
        "balanced overall profile"
    }
}
