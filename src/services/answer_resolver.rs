//! Conversions between the three shapes a correct answer shows up in:
//! a slot letter (`A`..`D`), the option text, and a zero-based index into
//! the compacted option list.

use crate::models::domain::question::{NULL_SENTINEL, OPTION_SLOTS};
use crate::models::domain::{DataQualityIssue, QuestionKind};

const LETTERS: [char; OPTION_SLOTS] = ['A', 'B', 'C', 'D'];

/// Outcome of mapping a stored letter onto the compacted options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The letter's slot holds a real option.
    Exact(usize),
    /// The letter's slot is empty; the nearest populated slot was used.
    Realigned(usize),
    /// Nothing usable; index 0 is returned for compatibility.
    Fallback,
}

impl Resolution {
    pub fn index(&self) -> usize {
        match self {
            Resolution::Exact(index) | Resolution::Realigned(index) => *index,
            Resolution::Fallback => 0,
        }
    }

    pub fn issue(&self, question_id: &str, letter: &str) -> Option<DataQualityIssue> {
        match self {
            Resolution::Exact(_) => None,
            Resolution::Realigned(index) => Some(DataQualityIssue::CorrectLetterRealigned {
                question_id: question_id.to_string(),
                letter: letter.to_string(),
                resolved_index: *index,
            }),
            Resolution::Fallback => Some(DataQualityIssue::UnresolvableCorrectLetter {
                question_id: question_id.to_string(),
                letter: letter.to_string(),
            }),
        }
    }
}

/// True when the slot text is a real option (not blank, not the `"null"` placeholder).
pub fn is_valid_option(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(NULL_SENTINEL)
}

fn slot_is_valid(slot: Option<&str>) -> bool {
    slot.is_some_and(is_valid_option)
}

pub fn letter_to_index(letter: &str) -> Option<usize> {
    let mut chars = letter.trim().chars();
    let first = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    LETTERS.iter().position(|&l| l == first)
}

pub fn index_to_letter(index: usize) -> Option<char> {
    LETTERS.get(index).copied()
}

/// Valid options in slot order, trimmed.
pub fn compact_options(slots: &[Option<&str>]) -> Vec<String> {
    slots
        .iter()
        .filter_map(|slot| slot.filter(|text| is_valid_option(text)))
        .map(|text| text.trim().to_string())
        .collect()
}

pub fn classify(slots: &[Option<&str>]) -> QuestionKind {
    match slots.iter().filter(|slot| slot_is_valid(**slot)).count() {
        4 => QuestionKind::FourOption,
        2 => QuestionKind::TwoOption,
        _ => QuestionKind::SparseOption,
    }
}

pub fn index_of_text(options: &[String], text: &str) -> Option<usize> {
    options.iter().position(|option| option == text)
}

/// Maps `correct_letter` onto the compacted option list built from `slots`.
///
/// Rows with sparsely populated slots are tolerated: when the letter lands on
/// an empty slot the closest populated slot wins, looking left before right.
pub fn resolve_correct_index(slots: &[Option<&str>], correct_letter: &str) -> Resolution {
    let Some(raw) = letter_to_index(correct_letter) else {
        return Resolution::Fallback;
    };

    let valid_at = |i: usize| slots.get(i).copied().flatten().is_some_and(is_valid_option);
    let compacted = |i: usize| (0..i).filter(|&j| valid_at(j)).count();

    if valid_at(raw) {
        return Resolution::Exact(compacted(raw));
    }

    let width = slots.len().max(OPTION_SLOTS);
    for distance in 1..width {
        if let Some(left) = raw.checked_sub(distance) {
            if valid_at(left) {
                return Resolution::Realigned(compacted(left));
            }
        }
        let right = raw + distance;
        if valid_at(right) {
            return Resolution::Realigned(compacted(right));
        }
    }

    Resolution::Fallback
}
