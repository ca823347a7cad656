use crate::apply::FileOutcome;
use std::fmt::Write;

/// Totals for a run that finished without a fatal error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub files_skipped: usize,
    pub total_replacements: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Replaced { replacements, .. } => {
                self.files_modified += 1;
                self.total_replacements += replacements;
            },
            FileOutcome::Skipped { .. } => self.files_skipped += 1,
            FileOutcome::Unchanged { .. } => {},
        }
    }

    pub fn format_summary(&self) -> String {
        let mut output = String::new();

        write!(
            output,
            "✓ Replaced {} {} across {} {}",
            self.total_replacements,
            plural(self.total_replacements, "occurrence", "occurrences"),
            self.files_modified,
            plural(self.files_modified, "file", "files"),
        )
        .unwrap();

        if self.files_skipped > 0 {
            write!(output, " ({} skipped)", self.files_skipped).unwrap();
        }

        output
    }
}

/// Progress line for an outcome, or `None` when nothing should be printed
pub fn format_outcome_line(outcome: &FileOutcome) -> Option<String> {
    let label = match outcome {
        FileOutcome::Replaced { .. } => "Replaced in",
        FileOutcome::Skipped { .. } => "Skipped (decode error)",
        FileOutcome::Unchanged { .. } => return None,
    };
    Some(format!("{}: {}", label, outcome.path().display()))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
