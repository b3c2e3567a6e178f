//! Aggregation of classified rows into an overall verdict

use super::classifier::{classify_result, ClassifyOptions};
use crate::models::{CheckKind, CheckResult, ClassifiedRow, Indicator};

/// Output of one classification pass: one row per check kind plus the
/// overall indicator
#[derive(Debug, Clone)]
pub struct Classification {
    /// Most severe indicator across the rows
    pub overall: Indicator,
    /// Rows in [`CheckKind::ALL`] order
    pub rows: Vec<ClassifiedRow>,
}

/// Classify every check result for one target.
///
/// Total over [`CheckKind`]: a kind with no result still produces a row (a
/// "not evaluated" placeholder carrying [`Indicator::Unknown`]), so a
/// partial provider failure never shrinks the table. Row order follows
/// [`CheckKind::ALL`] regardless of input order, duplicates beyond the
/// first result per kind are ignored, and the function never fails.
pub fn classify(
    target: &str,
    results: &[CheckResult],
    options: &ClassifyOptions,
) -> Classification {
    let rows: Vec<ClassifiedRow> = CheckKind::ALL
        .iter()
        .map(|kind| match results.iter().find(|result| result.kind == *kind) {
            Some(result) => ClassifiedRow {
                target: result.target.clone(),
                kind: *kind,
                outcome: result.outcome.clone(),
                indicator: classify_result(result, options),
            },
            None => ClassifiedRow::not_evaluated(target, *kind),
        })
        .collect();

    let overall = rows
        .iter()
        .map(|row| row.indicator)
        .max()
        .unwrap_or(Indicator::Unknown);

    Classification { overall, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckData, FormatFindings, ReputationVerdict};

    fn clean_format(target: &str) -> CheckResult {
        CheckResult::success(
            target,
            CheckKind::Format,
            "URL structure looks normal.",
            CheckData::Format(FormatFindings::default()),
        )
    }

    fn clear_reputation(target: &str) -> CheckResult {
        CheckResult::success(
            target,
            CheckKind::Reputation,
            "Not present on any threat list.",
            CheckData::Reputation(ReputationVerdict {
                listed: false,
                threats: vec![],
            }),
        )
    }

    #[test]
    fn test_empty_input_yields_four_unknown_rows() {
        let classification = classify("https://example.com/", &[], &ClassifyOptions::default());
        assert_eq!(classification.rows.len(), 4);
        for row in &classification.rows {
            assert_eq!(row.indicator, Indicator::Unknown);
            assert_eq!(row.outcome, "Check not evaluated.");
        }
        assert_eq!(classification.overall, Indicator::Unknown);
    }

    #[test]
    fn test_rows_follow_display_order() {
        // Feed results in reverse order; rows must still come out fixed
        let results = vec![
            clear_reputation("https://example.com/"),
            clean_format("https://example.com/"),
        ];
        let classification =
            classify("https://example.com/", &results, &ClassifyOptions::default());
        let kinds: Vec<CheckKind> = classification.rows.iter().map(|row| row.kind).collect();
        assert_eq!(kinds, CheckKind::ALL.to_vec());
    }

    #[test]
    fn test_missing_kind_gets_placeholder() {
        let results = vec![clean_format("https://example.com/")];
        let classification =
            classify("https://example.com/", &results, &ClassifyOptions::default());
        assert_eq!(classification.rows[0].indicator, Indicator::Safe);
        assert_eq!(classification.rows[1].outcome, "Check not evaluated.");
        assert_eq!(classification.rows[1].indicator, Indicator::Unknown);
    }

    #[test]
    fn test_overall_is_most_severe_row() {
        let mut listed = clear_reputation("https://example.com/");
        listed.data = Some(CheckData::Reputation(ReputationVerdict {
            listed: true,
            threats: vec!["MALWARE".to_string()],
        }));
        let results = vec![clean_format("https://example.com/"), listed];
        let classification =
            classify("https://example.com/", &results, &ClassifyOptions::default());
        assert_eq!(classification.overall, Indicator::Danger);
    }

    #[test]
    fn test_single_unknown_prevents_safe_overall() {
        let results = vec![
            clean_format("https://example.com/"),
            CheckResult::failure(
                "https://example.com/",
                CheckKind::Reputation,
                "Reputation lookup failed: request timed out.",
            ),
        ];
        let classification =
            classify("https://example.com/", &results, &ClassifyOptions::default());
        assert_ne!(classification.overall, Indicator::Safe);
        assert_eq!(classification.overall, Indicator::Unknown);
    }

    #[test]
    fn test_duplicate_kind_uses_first_result() {
        let first = clean_format("https://example.com/");
        let mut second = clean_format("https://example.com/");
        second.outcome = "Second result, should be ignored.".to_string();
        let classification = classify(
            "https://example.com/",
            &[first, second],
            &ClassifyOptions::default(),
        );
        assert_eq!(classification.rows[0].outcome, "URL structure looks normal.");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let results = vec![clean_format("https://example.com/")];
        let options = ClassifyOptions::default();
        let first = classify("https://example.com/", &results, &options);
        let second = classify("https://example.com/", &results, &options);
        assert_eq!(first.overall, second.overall);
        assert_eq!(first.rows.len(), second.rows.len());
        for (a, b) in first.rows.iter().zip(second.rows.iter()) {
            assert_eq!(a.indicator, b.indicator);
            assert_eq!(a.outcome, b.outcome);
        }
    }
}
