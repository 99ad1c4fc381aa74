use std::collections::HashMap;

use crate::models::domain::{
    AnsweredQuestion, NormalizedQuestion, PenaltyScore, QuestionType, ScoreReport, ScoringMode,
    SessionScore,
};

fn submitted_answer<'a>(answers: &'a HashMap<String, String>, id: &str) -> Option<&'a str> {
    answers
        .get(id)
        .map(String::as_str)
        .filter(|answer| !answer.trim().is_empty())
}

/// Binary check of one submitted answer. The UI sends back option text, not an index.
pub fn is_correct(question: &NormalizedQuestion, submitted: Option<&str>) -> bool {
    let (Some(submitted), Some(expected)) = (submitted, question.correct_option()) else {
        return false;
    };

    match question.question_type {
        QuestionType::MultipleChoice => submitted == expected,
        QuestionType::TrueFalse => submitted.to_lowercase() == expected.to_lowercase(),
        QuestionType::Unknown => submitted == expected,
    }
}

/// Percentage of correct answers; unanswered questions count as wrong.
pub fn score_session(
    questions: &[NormalizedQuestion],
    answers: &HashMap<String, String>,
) -> SessionScore {
    let total_count = questions.len() as u32;
    let correct_count = questions
        .iter()
        .filter(|q| is_correct(q, submitted_answer(answers, &q.id)))
        .count() as u32;

    let percentage = if total_count == 0 {
        0
    } else {
        (correct_count as f64 / total_count as f64 * 100.0).round() as u32
    };

    SessionScore {
        correct_count,
        total_count,
        percentage,
    }
}

/// Mock-exam scoring: +1 correct, 0 unanswered, -1 incorrect.
pub fn score_with_penalty(
    questions: &[NormalizedQuestion],
    answers: &HashMap<String, String>,
) -> PenaltyScore {
    let mut score = PenaltyScore {
        correct: 0,
        incorrect: 0,
        unanswered: 0,
        total: 0,
    };

    for question in questions {
        match submitted_answer(answers, &question.id) {
            None => score.unanswered += 1,
            Some(answer) if is_correct(question, Some(answer)) => score.correct += 1,
            Some(_) => score.incorrect += 1,
        }
    }

    score.total = score.correct as i32 - score.incorrect as i32;
    score
}

pub fn score(
    questions: &[NormalizedQuestion],
    answers: &HashMap<String, String>,
    mode: ScoringMode,
) -> ScoreReport {
    match mode {
        ScoringMode::Percentage => ScoreReport::Percentage(score_session(questions, answers)),
        ScoringMode::Penalty => ScoreReport::Penalty(score_with_penalty(questions, answers)),
    }
}

/// Per-question breakdown kept with a result for review.
pub fn review_answers(
    questions: &[NormalizedQuestion],
    answers: &HashMap<String, String>,
) -> Vec<AnsweredQuestion> {
    questions
        .iter()
        .map(|question| {
            let submitted = submitted_answer(answers, &question.id);
            AnsweredQuestion {
                question_id: question.id.clone(),
                question_text: question.question_text.clone(),
                options: question.options.clone(),
                correct_index: question.correct_index,
                submitted: submitted.map(str::to_string),
                is_correct: is_correct(question, submitted),
                explanation: question.explanation.clone(),
            }
        })
        .collect()
}
