use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{DataQualityIssue, QuestionRecord};
use crate::services::answer_resolver::{
    compact_options, index_of_text, index_to_letter, resolve_correct_index,
};

/// Option list after the optional 4 to 3 reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedOptions {
    pub options: Vec<String>,
    pub correct_index: usize,
    pub correct_letter: String,
    pub reduced: bool,
    pub issues: Vec<DataQualityIssue>,
}

/// Cuts a record down to three options: the correct one plus two randomly
/// chosen distractors, in random order. The correct option is matched by text,
/// so its index is recomputed after every shuffle.
///
/// Records with fewer than three valid options are returned compacted but
/// otherwise untouched, with an `UnderfilledOptions` issue.
pub fn reduce_to_three_options<R: Rng + ?Sized>(
    record: &QuestionRecord,
    rng: &mut R,
) -> ReducedOptions {
    let slots = record.slots();
    let options = compact_options(&slots);
    let resolution = resolve_correct_index(&slots, &record.correct_letter);
    let mut issues: Vec<DataQualityIssue> = resolution
        .issue(&record.id, &record.correct_letter)
        .into_iter()
        .collect();
    let correct_index = resolution.index();

    if options.len() < 3 {
        log::warn!(
            "Question {} has {} valid options, skipping reduction",
            record.id,
            options.len()
        );
        issues.push(DataQualityIssue::UnderfilledOptions {
            question_id: record.id.clone(),
            valid_options: options.len(),
        });
        return ReducedOptions {
            correct_letter: letter_for(correct_index),
            options,
            correct_index,
            reduced: false,
            issues,
        };
    }

    let correct_text = options[correct_index].clone();
    let mut incorrect: Vec<String> = options
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct_index)
        .map(|(_, text)| text.clone())
        .collect();
    incorrect.shuffle(rng);

    let mut reduced = Vec::with_capacity(3);
    reduced.push(correct_text.clone());
    reduced.extend(incorrect.into_iter().take(2));
    reduced.shuffle(rng);

    let correct_index = index_of_text(&reduced, &correct_text).unwrap_or(0);

    ReducedOptions {
        correct_letter: letter_for(correct_index),
        options: reduced,
        correct_index,
        reduced: true,
        issues,
    }
}

fn letter_for(index: usize) -> String {
    index_to_letter(index).map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::record_with_options;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reduction_always_keeps_the_correct_text() {
        let record = record_with_options("q-1", &["Paris", "Lyon", "Marseille", "Lille"], "C");

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = reduce_to_three_options(&record, &mut rng);

            assert!(out.reduced);
            assert_eq!(out.options.len(), 3);
            assert_eq!(out.options[out.correct_index], "Marseille");
            assert!(out
                .options
                .iter()
                .all(|o| ["Paris", "Lyon", "Marseille", "Lille"].contains(&o.as_str())));
            assert_eq!(
                out.correct_letter,
                ["A", "B", "C"][out.correct_index].to_string()
            );
        }
    }

    #[test]
    fn reduction_varies_the_dropped_distractor() {
        let record = record_with_options("q-1", &["a", "b", "c", "d"], "A");
        let mut dropped = std::collections::HashSet::new();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = reduce_to_three_options(&record, &mut rng);
            let missing = ["b", "c", "d"]
                .iter()
                .find(|o| !out.options.iter().any(|x| x.as_str() == **o))
                .copied();
            dropped.insert(missing);
        }

        assert!(dropped.len() > 1);
    }

    #[test]
    fn three_valid_options_are_reordered_but_kept() {
        let record = record_with_options("q-1", &["any", "some", "few", "null"], "B");
        let mut rng = StdRng::seed_from_u64(3);

        let out = reduce_to_three_options(&record, &mut rng);

        assert!(out.reduced);
        let mut sorted = out.options.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["any", "few", "some"]);
        assert_eq!(out.options[out.correct_index], "some");
        assert!(out.issues.is_empty());
    }

    #[test]
    fn underfilled_record_passes_through_unreduced() {
        let record = record_with_options("q-7", &["Vrai", "Faux", "", "null"], "B");
        let mut rng = StdRng::seed_from_u64(1);

        let out = reduce_to_three_options(&record, &mut rng);

        assert!(!out.reduced);
        assert_eq!(out.options, vec!["Vrai", "Faux"]);
        assert_eq!(out.correct_index, 1);
        assert_eq!(out.correct_letter, "B");
        assert_eq!(
            out.issues,
            vec![DataQualityIssue::UnderfilledOptions {
                question_id: "q-7".to_string(),
                valid_options: 2,
            }]
        );
    }

    #[test]
    fn unresolvable_letter_is_reported_and_reduction_still_runs() {
        let record = record_with_options("q-8", &["a", "b", "c", "d"], "?");
        let mut rng = StdRng::seed_from_u64(5);

        let out = reduce_to_three_options(&record, &mut rng);

        assert!(out.reduced);
        assert_eq!(out.options[out.correct_index], "a");
        assert!(matches!(
            out.issues.as_slice(),
            [DataQualityIssue::UnresolvableCorrectLetter { .. }]
        ));
    }
}
