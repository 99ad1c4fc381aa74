//! Question selection.
//!
//! Fixed tests (a `test_number` is given) return their assigned records in
//! store order so every load and every review shows the same content. Daily
//! practice shuffles the pool with a linear-congruential generator seeded from
//! the calendar date and the category, so the order is stable for a day and
//! changes the next day without any server-side state.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::domain::{Category, Difficulty, QuestionRecord};

pub const LCG_MULTIPLIER: u64 = 9301;
pub const LCG_INCREMENT: u64 = 49297;
pub const LCG_MODULUS: u64 = 233280;

/// One step of the generator. Always returns a value below `LCG_MODULUS`.
pub fn next_seed(seed: u64) -> u64 {
    ((seed % LCG_MODULUS) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS
}

/// Sum of the character codes of the category tag.
pub fn category_offset(category: Category) -> u64 {
    category.as_str().chars().map(|c| c as u64).sum()
}

pub fn daily_seed(date: NaiveDate, category: Category) -> u64 {
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + date.month() as u64 * 100 + date.day() as u64 + category_offset(category)
}

/// Fisher-Yates shuffle driven by `next_seed`.
pub fn seeded_shuffle<T>(items: &mut [T], seed: u64) {
    let mut state = seed;
    for i in (1..items.len()).rev() {
        state = next_seed(state);
        let j = (state * (i as u64 + 1) / LCG_MODULUS) as usize;
        items.swap(i, j);
    }
}

/// Picks up to `limit` records for one quiz instance.
///
/// With `test_number` the records tagged with that number come back in the
/// order they were given. Without it the pool is shuffled with the daily seed
/// for `(date, category)`. A pool smaller than `limit` is returned whole.
pub fn sample_for_test(
    records: &[QuestionRecord],
    limit: usize,
    test_number: Option<u32>,
    category: Category,
    date: NaiveDate,
) -> Vec<QuestionRecord> {
    match test_number {
        Some(number) => records
            .iter()
            .filter(|r| r.test_number == Some(number))
            .take(limit)
            .cloned()
            .collect(),
        None => {
            let mut pool = records.to_vec();
            seeded_shuffle(&mut pool, daily_seed(date, category));
            pool.truncate(limit);
            pool
        }
    }
}

/// Share of each difficulty tier in a mock exam, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DifficultyMix {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for DifficultyMix {
    fn default() -> Self {
        Self {
            easy: 30,
            medium: 50,
            hard: 20,
        }
    }
}

impl DifficultyMix {
    pub fn total(&self) -> u32 {
        self.easy as u32 + self.medium as u32 + self.hard as u32
    }

    /// Per-tier counts for `limit` questions; the rounding remainder goes to medium.
    pub fn quotas(&self, limit: usize) -> [usize; 3] {
        let easy = limit * self.easy as usize / 100;
        let hard = limit * self.hard as usize / 100;
        let medium = limit.saturating_sub(easy + hard);
        [easy, medium, hard]
    }
}

impl FromStr for DifficultyMix {
    type Err = AppError;

    /// Parses `"easy,medium,hard"`, e.g. `"30,50,20"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::ValidationError(format!("Invalid difficulty mix '{}': {}", s, e)))?;

        let &[easy, medium, hard] = parts.as_slice() else {
            return Err(AppError::ValidationError(format!(
                "Difficulty mix '{}' must have three values",
                s
            )));
        };

        let mix = DifficultyMix { easy, medium, hard };
        if mix.total() != 100 {
            return Err(AppError::ValidationError(format!(
                "Difficulty mix '{}' must add up to 100",
                s
            )));
        }
        Ok(mix)
    }
}

fn tier(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

/// Builds a mock exam: each tier is shuffled with `seed`, filled up to its
/// quota, and any shortfall is backfilled from the other tiers (medium, then
/// easy, then hard). The result runs from easy to hard.
pub fn distribute_by_difficulty(
    records: &[QuestionRecord],
    limit: usize,
    mix: DifficultyMix,
    seed: u64,
) -> Vec<QuestionRecord> {
    let mut tiers: [Vec<QuestionRecord>; 3] = Default::default();
    for record in records {
        tiers[tier(record.difficulty)].push(record.clone());
    }
    for pool in tiers.iter_mut() {
        seeded_shuffle(pool, seed);
    }

    let target = limit.min(records.len());
    let quotas = mix.quotas(target);

    let mut selected: [Vec<QuestionRecord>; 3] = Default::default();
    for (i, pool) in tiers.iter_mut().enumerate() {
        let take = quotas[i].min(pool.len());
        selected[i].extend(pool.drain(..take));
    }

    let mut missing = target - selected.iter().map(Vec::len).sum::<usize>();
    for i in [1, 0, 2] {
        if missing == 0 {
            break;
        }
        let take = missing.min(tiers[i].len());
        selected[i].extend(tiers[i].drain(..take));
        missing -= take;
    }

    selected.into_iter().flatten().collect()
}
