use rand::Rng;

use crate::models::domain::{
    DataQualityIssue, NormalizedQuestion, QuestionKind, QuestionRecord,
};
use crate::services::answer_resolver::{classify, compact_options, resolve_correct_index};
use crate::services::option_reducer::reduce_to_three_options;

/// Questions built for one session, plus whatever was wrong with the source rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub questions: Vec<NormalizedQuestion>,
    pub diagnostics: Vec<DataQualityIssue>,
}

pub fn default_explanation(correct_text: &str) -> String {
    format!("La bonne réponse est : « {} ».", correct_text)
}

/// Turns one stored record into a displayable question.
///
/// `reduce` asks for the 3-option presentation; it only applies to
/// multiple-choice records. Records with fewer than two usable options cannot
/// be asked and come back as `None`.
pub fn normalize_question<R: Rng + ?Sized>(
    record: &QuestionRecord,
    reduce: bool,
    rng: &mut R,
) -> (Option<NormalizedQuestion>, Vec<DataQualityIssue>) {
    let slots = record.slots();
    let kind = classify(&slots);
    let compacted = compact_options(&slots);

    if compacted.len() < 2 {
        let issue = DataQualityIssue::TooFewOptions {
            question_id: record.id.clone(),
            valid_options: compacted.len(),
        };
        return (None, vec![issue]);
    }

    let (options, correct_index, reduced, issues) = if reduce && kind != QuestionKind::TwoOption {
        let out = reduce_to_three_options(record, rng);
        (out.options, out.correct_index, out.reduced, out.issues)
    } else {
        let resolution = resolve_correct_index(&slots, &record.correct_letter);
        let issues: Vec<DataQualityIssue> = resolution
            .issue(&record.id, &record.correct_letter)
            .into_iter()
            .collect();
        (compacted, resolution.index(), false, issues)
    };

    let explanation = record
        .explanation
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default_explanation(&options[correct_index]));

    let question = NormalizedQuestion {
        id: record.id.clone(),
        question_type: kind.question_type(),
        kind,
        category: record.category,
        difficulty: record.difficulty,
        question_text: record.question_text.clone(),
        options,
        correct_index,
        explanation,
        reduced,
    };

    (Some(question), issues)
}

pub fn normalize_all<R: Rng + ?Sized>(
    records: &[QuestionRecord],
    reduce: bool,
    rng: &mut R,
) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for record in records {
        let (question, issues) = normalize_question(record, reduce, rng);
        for issue in &issues {
            log::warn!("Data quality: {}", issue);
        }
        batch.diagnostics.extend(issues);
        if let Some(question) = question {
            batch.questions.push(question);
        }
    }

    log::debug!(
        "Normalized {} of {} records ({} issues)",
        batch.questions.len(),
        records.len(),
        batch.diagnostics.len()
    );
    batch
}
