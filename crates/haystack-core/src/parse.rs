//! Extraction of a structured answer set from free-form response text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::EvalError;
use crate::provider::Presentation;

/// One claimed retrieval in record mode.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtractedRecord {
    pub name: String,
    pub fruit: String,
}

/// The provider's claimed answer set, shaped by the presentation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Records(Vec<ExtractedRecord>),
    Identifiers(Vec<String>),
}

impl ExtractionResult {
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Identifiers(identifiers) => identifiers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static CALL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*\)").expect("static pattern"));

/// Pulls the answer set out of `text`.
///
/// Record mode slices from the first `[` to the last `]` inclusive, strips
/// embedded newlines, and decodes the JSON array; any missing bracket or
/// decode failure is [`EvalError::Parse`]. Identifier mode collects every
/// `name()` call in order of appearance; an empty result is a valid claim of
/// zero matches, not an error.
pub fn parse_completion(
    text: &str,
    presentation: Presentation,
) -> Result<ExtractionResult, EvalError> {
    match presentation {
        Presentation::Record => {
            let start = text
                .find('[')
                .ok_or_else(|| EvalError::Parse("no '[' in response".into()))?;
            let end = text
                .rfind(']')
                .ok_or_else(|| EvalError::Parse("no ']' in response".into()))?;
            if end < start {
                return Err(EvalError::Parse("bracket pair out of order".into()));
            }
            let json: String = text[start..=end].chars().filter(|c| *c != '\n').collect();
            let records: Vec<ExtractedRecord> =
                serde_json::from_str(&json).map_err(|e| EvalError::Parse(e.to_string()))?;
            Ok(ExtractionResult::Records(records))
        }
        Presentation::Identifier => {
            let identifiers = CALL_PATTERN
                .captures_iter(text)
                .map(|capture| capture[1].to_string())
                .collect();
            Ok(ExtractionResult::Identifiers(identifiers))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_mode_ignores_surrounding_prose() {
        let text = "Sure! Here are the matches:\n[{\"name\":\"Ann\",\"fruit\":\"kiwi\"},\n {\"name\":\"Bob\",\"fruit\":\"mango\"}]\nLet me know if you need more.";
        let result = parse_completion(text, Presentation::Record).unwrap();
        assert_eq!(
            result,
            ExtractionResult::Records(vec![
                ExtractedRecord {
                    name: "Ann".into(),
                    fruit: "kiwi".into()
                },
                ExtractedRecord {
                    name: "Bob".into(),
                    fruit: "mango".into()
                },
            ])
        );
    }

    #[test]
    fn record_mode_without_opening_bracket_is_a_parse_error() {
        let err = parse_completion("no structured answer here", Presentation::Record).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }

    #[test]
    fn record_mode_with_undecodable_body_is_a_parse_error() {
        let err = parse_completion("[{not json}]", Presentation::Record).unwrap_err();
        assert!(matches!(err, EvalError::Parse(_)));
    }

    #[test]
    fn identifier_mode_collects_calls_in_order() {
        let result =
            parse_completion("Minnow() Laslo() and also Vera ()", Presentation::Identifier)
                .unwrap();
        assert_eq!(
            result,
            ExtractionResult::Identifiers(vec![
                "Minnow".into(),
                "Laslo".into(),
                "Vera".into()
            ])
        );
    }

    #[test]
    fn identifier_mode_with_no_calls_is_a_valid_empty_claim() {
        let result = parse_completion("none of the functions match", Presentation::Identifier)
            .unwrap();
        assert_eq!(result, ExtractionResult::Identifiers(vec![]));
        assert!(result.is_empty());
    }
}
