//! # Mistag Reporting

use compact_str::CompactString;

use crate::{
    corpus::{Tagging, Vocabulary},
    errors::TCResult,
    tags::TagId,
};

/// A position where a working tagging disagrees with ground truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistag {
    /// The corpus position.
    pub position: usize,

    /// The word at the position.
    pub word: CompactString,

    /// The working tag.
    pub working: TagId,

    /// The ground-truth tag.
    pub truth: TagId,
}

/// All disagreements between a working tagging and ground truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistagReport {
    /// The number of compared tokens.
    pub total: usize,

    /// The disagreements, in corpus order.
    pub mistags: Vec<Mistag>,
}

impl MistagReport {
    /// Compare `working` to `truth`, position by position.
    ///
    /// ## Returns
    /// The report, or an error if the taggings are not aligned.
    pub fn compare(
        working: &Tagging,
        truth: &Tagging,
    ) -> TCResult<Self> {
        working.check_aligned(truth)?;
        Ok(Self {
            total: working.len(),
            mistags: find_mistags(working, truth),
        })
    }

    /// The number of mistagged tokens.
    pub fn count(&self) -> usize {
        self.mistags.len()
    }

    /// The fraction of tokens mistagged; 0 for an empty corpus.
    pub fn error_rate(&self) -> f64 {
        error_rate(self.count(), self.total)
    }
}

/// Scan for disagreements; the taggings are assumed aligned.
///
/// Positions beyond the shorter tagging are ignored.
pub fn find_mistags(
    working: &Tagging,
    truth: &Tagging,
) -> Vec<Mistag> {
    working
        .iter()
        .zip(truth.tags())
        .enumerate()
        .filter(|(_, ((_, w), t))| w != *t)
        .map(|(position, ((word, w), t))| Mistag {
            position,
            word: word.into(),
            working: w,
            truth: *t,
        })
        .collect()
}

/// Count disagreements without building a report.
pub fn count_mistags(
    working: &Tagging,
    truth: &Tagging,
) -> usize {
    working
        .tags()
        .iter()
        .zip(truth.tags())
        .filter(|(w, t)| w != t)
        .count()
}

fn error_rate(
    errors: usize,
    total: usize,
) -> f64 {
    if total == 0 {
        0.0
    } else {
        errors as f64 / total as f64
    }
}

/// Error counts split between known and unknown words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorRates {
    /// Total tokens.
    pub total: usize,

    /// Total mistagged tokens.
    pub errors: usize,

    /// Tokens whose word is in the training vocabulary.
    pub known_total: usize,

    /// Mistagged known tokens.
    pub known_errors: usize,

    /// Tokens whose word is not in the training vocabulary.
    pub unknown_total: usize,

    /// Mistagged unknown tokens.
    pub unknown_errors: usize,
}

impl ErrorRates {
    /// Split a report by training vocabulary membership.
    ///
    /// ## Arguments
    /// * `report` - the mistag report over `tagging`.
    /// * `tagging` - the compared tagging; only its words are read.
    /// * `vocab` - the training vocabulary.
    pub fn split_by_vocabulary(
        report: &MistagReport,
        tagging: &Tagging,
        vocab: &Vocabulary,
    ) -> Self {
        let unknown_total = tagging
            .words()
            .iter()
            .filter(|w| !vocab.contains(w))
            .count();
        let unknown_errors = report
            .mistags
            .iter()
            .filter(|m| !vocab.contains(&m.word))
            .count();

        Self {
            total: report.total,
            errors: report.count(),
            known_total: report.total - unknown_total,
            known_errors: report.count() - unknown_errors,
            unknown_total,
            unknown_errors,
        }
    }

    /// The overall error rate.
    pub fn error_rate(&self) -> f64 {
        error_rate(self.errors, self.total)
    }

    /// The error rate on known words.
    pub fn known_error_rate(&self) -> f64 {
        error_rate(self.known_errors, self.known_total)
    }

    /// The error rate on unknown words.
    pub fn unknown_error_rate(&self) -> f64 {
        error_rate(self.unknown_errors, self.unknown_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{corpus::SentenceContext, tags::Tagset};

    fn fixture() -> (Tagging, Tagging, Tagset) {
        let mut tagset = Tagset::default();
        let truth = Tagging::intern_sentences(
            &[vec![("the", "DET"), ("dog", "NN"), ("barks", "VB"), ("loudly", "RB")]],
            &mut tagset,
            SentenceContext::Flat,
        )
        .unwrap();
        let nn = tagset.require("NN").unwrap();
        let det = tagset.require("DET").unwrap();
        let working = truth.with_tags(vec![det, nn, nn, nn]).unwrap();
        (working, truth, tagset)
    }

    #[test]
    fn test_find_mistags() {
        let (working, truth, tagset) = fixture();
        let mistags = find_mistags(&working, &truth);

        assert_eq!(
            mistags,
            vec![
                Mistag {
                    position: 2,
                    word: "barks".into(),
                    working: tagset.require("NN").unwrap(),
                    truth: tagset.require("VB").unwrap(),
                },
                Mistag {
                    position: 3,
                    word: "loudly".into(),
                    working: tagset.require("NN").unwrap(),
                    truth: tagset.require("RB").unwrap(),
                },
            ]
        );
        assert_eq!(count_mistags(&working, &truth), 2);
        assert_eq!(count_mistags(&truth, &truth), 0);
    }

    #[test]
    fn test_report() {
        let (working, truth, _) = fixture();
        let report = MistagReport::compare(&working, &truth).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.count(), 2);
        assert_eq!(report.error_rate(), 0.5);

        let empty = MistagReport::compare(&Tagging::empty(), &Tagging::empty()).unwrap();
        assert_eq!(empty.error_rate(), 0.0);

        assert!(MistagReport::compare(&working, &Tagging::empty()).is_err());
    }

    #[test]
    fn test_split_by_vocabulary() {
        let (working, truth, _) = fixture();
        let report = MistagReport::compare(&working, &truth).unwrap();
        let vocab = Vocabulary::from_words(["the", "dog", "barks"]);

        let rates = ErrorRates::split_by_vocabulary(&report, &truth, &vocab);
        assert_eq!(
            rates,
            ErrorRates {
                total: 4,
                errors: 2,
                known_total: 3,
                known_errors: 1,
                unknown_total: 1,
                unknown_errors: 1,
            }
        );
        assert_eq!(rates.error_rate(), 0.5);
        assert_eq!(rates.unknown_error_rate(), 1.0);
        assert!((rates.known_error_rate() - 1.0 / 3.0).abs() < 1e-12);
    }
}
