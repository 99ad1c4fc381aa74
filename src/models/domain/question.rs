use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder some content rows store in unused option slots.
pub const NULL_SENTINEL: &str = "null";

/// Number of positional option slots (A to D) a record can carry.
pub const OPTION_SLOTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Francais,
    Anglais,
    CultureGenerale,
    Logique,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Francais => "francais",
            Category::Anglais => "anglais",
            Category::CultureGenerale => "culture-generale",
            Category::Logique => "logique",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A question row as stored by the content store. Never mutated here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub id: String,
    pub category: Category,
    pub question_text: String,
    /// Positional slots A..D. A slot may be missing, blank or `"null"`.
    #[serde(default)]
    pub options: Vec<Option<String>>,
    pub correct_letter: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuestionRecord {
    /// The raw text of slot `index`, if the slot exists at all.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.options
            .get(index)
            .and_then(|opt| opt.as_deref())
    }

    /// All four slots, padded with `None` when the row stores fewer.
    pub fn slots(&self) -> [Option<&str>; OPTION_SLOTS] {
        [self.slot(0), self.slot(1), self.slot(2), self.slot(3)]
    }
}
