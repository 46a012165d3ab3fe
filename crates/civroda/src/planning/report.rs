use std::fmt;

use chrono::NaiveDate;

use super::insights::RiskProfile;
use super::service::DaDetail;

const RULE: &str = "------------------------------------------------------------";

/// Render the determination report handed to applicants and planners.
pub fn render_determination_report(
    detail: &DaDetail,
    profile: &RiskProfile,
    generated_on: NaiveDate,
) -> String {
    DeterminationReport {
        detail,
        profile,
        generated_on,
    }
    .to_string()
}

struct DeterminationReport<'a> {
    detail: &'a DaDetail,
    profile: &'a RiskProfile,
    generated_on: NaiveDate,
}

impl fmt::Display for DeterminationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.detail.record;

        writeln!(f, "DEVELOPMENT APPLICATION DETERMINATION REPORT")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Report generated: {}", self.generated_on.format("%d %B %Y"))?;
        writeln!(f, "DA ID: {}", record.id)?;
        writeln!(f, "Council: {}", record.council)?;

        writeln!(f, "\nAPPLICATION DETAILS")?;
        writeln!(f, "- Property address: {}", or_na(&record.address))?;
        writeln!(f, "- Zoning: {}", or_na(&record.zoning))?;
        writeln!(f, "- Land size: {}", or_na(&record.land_size))?;
        writeln!(f, "- Maximum height: {}", or_na(&record.height))?;
        writeln!(f, "- Floor space ratio: {}", or_na(&record.fsr))?;

        writeln!(f, "\nDETERMINATION")?;
        writeln!(f, "- Outcome: {}", record.outcome)?;
        if record.key_conditions.is_empty() {
            writeln!(f, "- Key conditions: none recorded")?;
        } else {
            writeln!(f, "- Key conditions:")?;
            for (index, condition) in record.key_conditions.iter().enumerate() {
                writeln!(f, "  {}. {}", index + 1, condition)?;
            }
        }

        writeln!(f, "\nAPPROVAL LIKELIHOOD")?;
        writeln!(
            f,
            "- Score: {}/100 ({} risk)",
            self.profile.score,
            self.profile.level.label()
        )?;
        for driver in &self.profile.drivers {
            writeln!(f, "- {}: {}", driver.factor, driver.detail)?;
        }

        writeln!(f, "\nCOMPARABLE APPLICATIONS")?;
        if self.detail.similar_projects.is_empty() {
            writeln!(f, "No comparable applications in this council area.")?;
        } else {
            for project in &self.detail.similar_projects {
                writeln!(
                    f,
                    "- {} | {} | {:.0}% similar",
                    project.address,
                    project.outcome,
                    project.similarity_score * 100.0
                )?;
            }
        }

        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Indicative assessment derived from comparable determinations; not legal advice."
        )
    }
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
