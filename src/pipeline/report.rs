use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::CatalogAudit;
use crate::pipeline::classify::Assessment;
use crate::pipeline::score::{OutOfRangePolicy, ScoreAudit};
use crate::report::text::{ReportContext, render_report_text};
use crate::report::{SummaryData, ToolMeta, format_score, profile_stats, score_entries};

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub assessments: &'a [Assessment],
    pub catalog_audit: &'a CatalogAudit,
    pub audit: &'a ScoreAudit,
    pub policy: OutOfRangePolicy,
    pub tool_name: String,
    pub tool_version: String,
}

/// Writes scores.tsv, summary.json and report.txt into `out_dir`.
pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let scores_path = out_dir.join("scores.tsv");
    write_scores_tsv(input, &scores_path)?;

    let profile = profile_stats(input.assessments);

    let summary = SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        policy: input.policy.name(),
        catalog: input.catalog_audit.clone(),
        input: input.audit.clone(),
        scores: score_entries(input.assessments),
        profile: profile.clone(),
    };
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&ReportContext {
        assessments: input.assessments,
        profile: &profile,
        audit: input.audit,
        policy: input.policy.name(),
    });
    write_text(&out_dir.join("report.txt"), &report)?;

    Ok(())
}

fn write_scores_tsv(input: &ReportInput<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "code\tdimension\tscore\tlevel\ttag")?;
    for a in input.assessments {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            a.dimension.code(),
            a.dimension.name(),
            format_score(a.score),
            a.level.label(),
            a.level.tag()
        )?;
    }
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/report.rs"]
mod tests;
