//! Prompt construction for the time report analysis.
//!
//! The output language is fixed to Swedish. Projects are resolved through the
//! catalog only to put display names into the text; no structured project data
//! is sent.

use bygg_core::catalog::Catalog;
use bygg_core::entities::TimeEntry;

/// Instruction block preceding the report lines.
pub const INSTRUCTION: &str = "Analysera följande tidrapporter för ett byggföretag och ge en \
sammanfattning på SVENSKA. Fokusera på projektframdrift, eventuella avvikelser (t.ex. mycket \
ÄTA-arbete eller övertid) och hur många sådana avvikelser som förekommer, och ge konkreta \
rekommendationer för projektledningen.";

/// One line describing a single report.
#[must_use]
pub fn report_line(entry: &TimeEntry, catalog: &Catalog) -> String {
    format!(
        "Projekt: {}, Timmar: {}, Typ: {}, Beskrivning: {}",
        catalog.project_name(&entry.project_id),
        entry.hours,
        entry.work_type.label(),
        entry.description
    )
}

/// Full prompt: instruction, blank line, then one line per report.
#[must_use]
pub fn build_prompt(entries: &[TimeEntry], catalog: &Catalog) -> String {
    let reports = entries
        .iter()
        .map(|entry| report_line(entry, catalog))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{INSTRUCTION}\n\nRapporter:\n{reports}")
}

#[cfg(test)]
mod tests {
    use bygg_core::sample::sample_entries;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn report_line_uses_names_and_swedish_labels() {
        let entries = sample_entries();
        let line = report_line(&entries[2], &Catalog::builtin());
        assert_eq!(
            line,
            "Projekt: Brf Ekbacken, Timmar: 2, Typ: ÄTA-arbete, \
             Beskrivning: Extra rördragning efter ändringsbeslut kunden."
        );
    }

    #[test]
    fn report_line_resolves_dangling_project_to_placeholder() {
        let mut entry = sample_entries().remove(0);
        entry.project_id = String::from("404");
        entry.hours = 7.5;
        let line = report_line(&entry, &Catalog::builtin());
        assert!(line.starts_with("Projekt: Okänt, Timmar: 7.5, Typ: Normaltid"));
    }

    #[test]
    fn prompt_has_one_line_per_entry_in_order() {
        let entries = sample_entries();
        let prompt = build_prompt(&entries, &Catalog::builtin());

        assert!(prompt.starts_with(INSTRUCTION));
        let lines: Vec<&str> = prompt
            .lines()
            .skip_while(|line| *line != "Rapporter:")
            .skip(1)
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Montering av köksinredning"));
        assert!(lines[1].starts_with("Projekt: Villa Granhult, Timmar: 4"));
        assert!(lines[2].contains("ÄTA-arbete"));
    }

    #[test]
    fn empty_collection_still_builds_prompt() {
        let prompt = build_prompt(&[], &Catalog::builtin());
        assert!(prompt.ends_with("Rapporter:\n"));
    }
}
