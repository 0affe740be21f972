//! Fuzzy scoring of an extracted answer set against the planted needles.

use crate::parse::ExtractionResult;
use crate::prompt::NeedleFact;

/// Score for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub matches_count: u32,
    /// Extracted entries minus matches. One extracted entry may satisfy
    /// several needles, so this can go negative; kept signed for continuity
    /// with historical results.
    pub false_positives_count: i64,
}

/// Bounded-edit-distance equivalence, case-insensitive.
fn close(a: &str, b: &str) -> bool {
    strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase()) < 3
}

/// Counts how many needles the extraction retrieved.
///
/// Record mode compares name and fruit; identifier mode compares the name
/// against bare identifiers. Matching is existential per needle, so the
/// result is invariant under reordering of the extracted list.
pub fn score(needles: &[NeedleFact], extraction: &ExtractionResult) -> TrialOutcome {
    let mut matches_count = 0u32;
    for needle in needles {
        let hit = match extraction {
            ExtractionResult::Records(records) => records
                .iter()
                .any(|r| close(&r.name, &needle.name) && close(&r.fruit, &needle.fruit)),
            ExtractionResult::Identifiers(identifiers) => {
                identifiers.iter().any(|id| close(id, &needle.name))
            }
        };
        if hit {
            matches_count += 1;
        }
    }
    TrialOutcome {
        matches_count,
        false_positives_count: extraction.len() as i64 - i64::from(matches_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ExtractedRecord;

    fn needle(name: &str, fruit: &str) -> NeedleFact {
        NeedleFact {
            name: name.into(),
            fruit: fruit.into(),
        }
    }

    fn record(name: &str, fruit: &str) -> ExtractedRecord {
        ExtractedRecord {
            name: name.into(),
            fruit: fruit.into(),
        }
    }

    #[test]
    fn edit_distance_boundary() {
        let needles = [needle("Ann", "kiwi")];

        let near = ExtractionResult::Records(vec![record("Anne", "kiwi")]);
        assert_eq!(score(&needles, &near).matches_count, 1);

        let far = ExtractionResult::Records(vec![record("Anthony", "kiwi")]);
        assert_eq!(score(&needles, &far).matches_count, 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let needles = [needle("Oliver", "Mango")];
        let extraction = ExtractionResult::Records(vec![record("OLIVER", "mango")]);
        assert_eq!(score(&needles, &extraction).matches_count, 1);
    }

    #[test]
    fn invariant_under_reordering() {
        let needles = [needle("Ann", "kiwi"), needle("Bob", "mango")];
        let forward = ExtractionResult::Records(vec![
            record("Ann", "kiwi"),
            record("Zed", "rock"),
            record("Bob", "mango"),
        ]);
        let reversed = ExtractionResult::Records(vec![
            record("Bob", "mango"),
            record("Zed", "rock"),
            record("Ann", "kiwi"),
        ]);
        assert_eq!(score(&needles, &forward), score(&needles, &reversed));
        assert_eq!(score(&needles, &forward).matches_count, 2);
        assert_eq!(score(&needles, &forward).false_positives_count, 1);
    }

    #[test]
    fn identifier_mode_scores_names_only() {
        let needles = [needle("Minnow", "orange")];
        let extraction =
            ExtractionResult::Identifiers(vec!["Minnow".into(), "Laslo".into()]);
        let outcome = score(&needles, &extraction);
        assert_eq!(outcome.matches_count, 1);
        assert_eq!(outcome.false_positives_count, 1);
    }

    #[test]
    fn one_entry_satisfying_two_needles_goes_negative() {
        // "Anna" is within distance 2 of both "Ann" and "Hanna"; the single
        // extracted entry counts for both needles and the false-positive
        // count dips below zero.
        let needles = [needle("Ann", "kiwi"), needle("Hanna", "kiwi")];
        let extraction = ExtractionResult::Records(vec![record("Anna", "kiwi")]);
        let outcome = score(&needles, &extraction);
        assert_eq!(outcome.matches_count, 2);
        assert_eq!(outcome.false_positives_count, -1);
    }

    #[test]
    fn empty_extraction_scores_zero() {
        let needles = [needle("Ann", "kiwi")];
        let outcome = score(&needles, &ExtractionResult::Identifiers(vec![]));
        assert_eq!(outcome.matches_count, 0);
        assert_eq!(outcome.false_positives_count, 0);
    }
}
