#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        Category, Difficulty, NormalizedQuestion, QuestionKind, QuestionRecord, QuestionType,
    };

    /// A record whose slots are given positionally; `"null"` and `""` stay as stored.
    pub fn record_with_options(id: &str, options: &[&str], correct_letter: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            category: Category::Francais,
            question_text: format!("Question {}", id),
            options: options.iter().map(|o| Some(o.to_string())).collect(),
            correct_letter: correct_letter.to_string(),
            difficulty: Difficulty::Medium,
            exam_type: None,
            test_type: None,
            test_number: None,
            explanation: None,
            created_at: None,
        }
    }

    pub fn record_with_difficulty(id: &str, difficulty: Difficulty) -> QuestionRecord {
        let mut record = record_with_options(id, &["a", "b", "c", "d"], "A");
        record.difficulty = difficulty;
        record
    }

    /// `count` records `q-0..`, cycling through the difficulty tiers.
    pub fn numbered_records(count: usize, test_number: Option<u32>) -> Vec<QuestionRecord> {
        let tiers = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        (0..count)
            .map(|i| {
                let mut record = record_with_difficulty(&format!("q-{i}"), tiers[i % 3]);
                record.test_number = test_number;
                record
            })
            .collect()
    }

    pub fn normalized_question(id: &str, options: &[&str], correct_index: usize) -> NormalizedQuestion {
        NormalizedQuestion {
            id: id.to_string(),
            question_type: QuestionType::MultipleChoice,
            kind: QuestionKind::SparseOption,
            category: Category::Francais,
            difficulty: Difficulty::Medium,
            question_text: format!("Question {}", id),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            explanation: String::new(),
            reduced: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Difficulty;

    #[test]
    fn test_fixtures_record_with_options() {
        let record = record_with_options("q-1", &["a", "null"], "A");
        assert_eq!(record.slots(), [Some("a"), Some("null"), None, None]);
    }

    #[test]
    fn test_fixtures_numbered_records() {
        let records = numbered_records(4, Some(2));
        assert_eq!(records.len(), 4);
        assert_eq!(records[3].id, "q-3");
        assert_eq!(records[1].difficulty, Difficulty::Medium);
        assert!(records.iter().all(|r| r.test_number == Some(2)));
    }
}
