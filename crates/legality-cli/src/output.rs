//! Report rendering for the terminal and for JSON consumers.

use legality::{CheckCategory, LegalityReport, Outcome, RuleCatalog, Verdict};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::input::Entry;

/// Renders one line per entry.
pub fn render_text(entries: &[Entry], reports: &[LegalityReport], color: bool) -> String {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for (entry, report) in entries.iter().zip(reports) {
        let status = if report.is_legal() { "legal" } else { "illegal" };
        let status = match (color, report.is_legal()) {
            (false, _) => format!("{:<7}", status),
            (true, true) => format!("{:<7}", status.green().bold()),
            (true, false) => format!("{:<7}", status.red().bold()),
        };

        let details: Vec<String> = report
            .verdicts()
            .iter()
            .map(|v| verdict_text(v, color))
            .collect();
        let details = if details.is_empty() {
            "no applicable checks".to_string()
        } else {
            details.join("; ")
        };

        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            status,
            entry.name,
            details,
            width = width
        ));
    }

    let illegal = reports.iter().filter(|r| !r.is_legal()).count();
    out.push_str(&format!(
        "{} checked, {} legal, {} illegal\n",
        reports.len(),
        reports.len() - illegal,
        illegal
    ));
    out
}

fn verdict_text(verdict: &Verdict, color: bool) -> String {
    let outcome = match verdict.outcome {
        Outcome::Valid => "valid",
        Outcome::Invalid => "invalid",
        Outcome::Unchecked => "unchecked",
    };
    let outcome = match (color, verdict.outcome) {
        (false, _) => outcome.to_string(),
        (true, Outcome::Valid) => outcome.green().to_string(),
        (true, Outcome::Invalid) => outcome.red().to_string(),
        (true, Outcome::Unchecked) => outcome.yellow().to_string(),
    };
    format!(
        "{} {} {} {}",
        verdict.category,
        outcome,
        verdict.code,
        verdict.code.message()
    )
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub catalog_revision: u32,
    pub legal: bool,
    pub entries: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub name: &'a str,
    pub generation: u8,
    pub legal: bool,
    pub verdicts: Vec<JsonVerdict>,
}

#[derive(Debug, Serialize)]
pub struct JsonVerdict {
    pub category: CheckCategory,
    pub outcome: Outcome,
    pub code: u16,
    pub message: &'static str,
}

impl From<&Verdict> for JsonVerdict {
    fn from(verdict: &Verdict) -> Self {
        Self {
            category: verdict.category,
            outcome: verdict.outcome,
            code: verdict.code.code(),
            message: verdict.code.message(),
        }
    }
}

impl<'a> JsonReport<'a> {
    pub fn new(catalog_revision: u32, entries: &'a [Entry], reports: &[LegalityReport]) -> Self {
        let entries: Vec<JsonEntry<'a>> = entries
            .iter()
            .zip(reports)
            .map(|(entry, report)| JsonEntry {
                name: &entry.name,
                generation: entry.generation().get(),
                legal: report.is_legal(),
                verdicts: report.verdicts().iter().map(JsonVerdict::from).collect(),
            })
            .collect();

        Self {
            catalog_revision,
            legal: entries.iter().all(|e| e.legal),
            entries,
        }
    }
}

pub fn render_json(report: &JsonReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Sizes of every list in the catalog, in display order.
pub fn catalog_summary(catalog: &RuleCatalog) -> Vec<(&'static str, usize)> {
    let quirks = &catalog.quirks;
    let gen6 = &catalog.gen6;
    let gen7 = &catalog.gen7;
    vec![
        ("wild rows", catalog.wild.entries().len()),
        ("evolution chains", catalog.evolution.len()),
        ("heavy ball banned", quirks.heavy_ball_banned.len()),
        ("gen6 breeds male only", gen6.breeds_male_only.len()),
        ("gen6 safari", gen6.safari.inheritable.len()),
        ("gen6 apricorn", gen6.apricorn.inheritable.len()),
        ("gen6 sport", gen6.sport.inheritable.len()),
        ("gen6 dream", gen6.dream.inheritable.len()),
        ("gen6 quick/heal/dusk banned", gen6.quick_heal_dusk.banned.len()),
        ("gen6 gen3 banned", gen6.gen3.banned.len()),
        ("gen7 safari", gen7.safari.inheritable.len()),
        ("gen7 apricorn", gen7.apricorn.inheritable.len()),
        ("gen7 sport", gen7.sport.inheritable.len()),
        ("gen7 dream", gen7.dream.inheritable.len()),
        ("gen7 quick/heal/dusk banned", gen7.quick_heal_dusk.banned.len()),
        ("gen7 gen3 banned", gen7.gen3.banned.len()),
        ("gen7 beast natives", gen7.beast.past_gen_natives.len()),
        ("gen7 beast uncapturable", gen7.beast.past_gen_uncapturable.len()),
        ("gen7 beast scans", gen7.beast.past_gen_scans.len()),
        ("gen7 beast hidden banned", gen7.beast.hidden_banned.len()),
    ]
}

pub fn render_catalog(catalog: &RuleCatalog) -> String {
    let summary = catalog_summary(catalog);
    let width = summary.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = format!("catalog revision {}\n", catalog.revision);
    for (label, size) in summary {
        out.push_str(&format!("  {:<width$}  {}\n", label, size, width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use legality::{BallVerifier, Pipeline};

    use super::*;
    use crate::input::parse_entries;

    const BATCH: &str = r#"
        [[entry]]
        name = "eevee"
        record = { species = 133, ball = 25, format = 6, origin_game = "x", gender = "female" }
        origin = { kind = "egg", species = 133 }

        [[entry]]
        name = "pichu"
        record = { species = 172, ball = 1, format = 6, origin_game = "x" }
        origin = { kind = "egg", species = 172 }

        [[entry]]
        name = "old"
        record = { species = 25, ball = 4, format = 2, origin_game = "gold" }
        origin = { kind = "wild_slot", species = 25, generation = 2, location = 1 }
    "#;

    fn analyzed() -> (Vec<Entry>, Vec<LegalityReport>) {
        let entries = parse_entries(BATCH).unwrap();
        let pipeline = Pipeline::new((BallVerifier::builtin(),));
        let reports = entries.iter().map(|e| pipeline.analyze(&e.context())).collect();
        (entries, reports)
    }

    #[test]
    fn test_text_has_one_line_per_entry() {
        let (entries, reports) = analyzed();
        let text = render_text(&entries, &reports, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("legal   eevee"));
        assert!(lines[0].contains("L123"));
        assert!(lines[1].starts_with("illegal pichu"));
        assert!(lines[1].contains("L117"));
        assert!(lines[2].contains("no applicable checks"));
        assert_eq!(lines[3], "3 checked, 2 legal, 1 illegal");
    }

    #[test]
    fn test_colored_text_keeps_content() {
        let (entries, reports) = analyzed();
        let text = render_text(&entries, &reports, true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("pichu"));
    }

    #[test]
    fn test_json_document() {
        let (entries, reports) = analyzed();
        let report = JsonReport::new(3, &entries, &reports);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["catalog_revision"], 3);
        assert_eq!(json["legal"], false);
        assert_eq!(json["entries"][0]["name"], "eevee");
        assert_eq!(json["entries"][0]["generation"], 6);
        assert_eq!(json["entries"][1]["verdicts"][0]["code"], 117);
        assert_eq!(json["entries"][1]["verdicts"][0]["outcome"], "invalid");
        assert_eq!(json["entries"][1]["verdicts"][0]["category"], "ball");
        assert!(json["entries"][2]["verdicts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_summary() {
        let catalog = RuleCatalog::builtin();
        let summary = catalog_summary(catalog);
        let sport = summary.iter().find(|(label, _)| *label == "gen6 sport").unwrap();
        assert_eq!(sport.1, catalog.gen6.sport.inheritable.len());

        let text = render_catalog(catalog);
        assert!(text.starts_with(&format!("catalog revision {}", catalog.revision)));
        assert_eq!(text.lines().count(), summary.len() + 1);
    }
}
