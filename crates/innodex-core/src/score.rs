//! Aggregation of submitted responses into overall and per-category scores.
//!
//! The aggregation is a pure fold: it performs no I/O and keeps no state between calls, so it can be used
//! from any number of concurrent requests.

use crate::error::ScoreError;
use innodex_model::question::Question;
use innodex_model::score::{CategoryScore, MaturityLevel, Response, ScoreResult};
use num_traits::ToPrimitive;
use std::collections::{BTreeMap, HashMap};

/// Lowest average that is classified as [`MaturityLevel::Intermediate`].
pub const INTERMEDIATE_THRESHOLD: f64 = 2.0;
/// Lowest average that is classified as [`MaturityLevel::Advanced`].
pub const ADVANCED_THRESHOLD: f64 = 3.5;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    total: u64,
    count: u64,
}

impl Tally {
    fn add(&mut self, value: u32) {
        self.total += u64::from(value);
        self.count += 1;
    }

    fn average(self) -> Result<f64, ScoreError> {
        if self.count == 0 {
            return Ok(0.0);
        }
        let total = self.total.to_f64().ok_or(ScoreError::NumConversion)?;
        let count = self.count.to_f64().ok_or(ScoreError::NumConversion)?;
        Ok(round2(total / count))
    }
}

/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps an overall average to its maturity band.
///
/// Bands are inclusive at the lower and exclusive at the upper bound, the top band is unbounded.
#[must_use]
pub fn classify(average: f64) -> MaturityLevel {
    if average < INTERMEDIATE_THRESHOLD {
        MaturityLevel::Beginner
    } else if average < ADVANCED_THRESHOLD {
        MaturityLevel::Intermediate
    } else {
        MaturityLevel::Advanced
    }
}

/// Folds `responses` into total, average, maturity band and per-category scores.
///
/// Every response must reference a question of `questions`; the first response that does not fails the whole
/// aggregation with [`ScoreError::UnknownQuestion`]. Values are taken as they are, without clamping them to the
/// question's maximum. An empty response set yields an average of 0.
pub fn aggregate(responses: &[Response], questions: &[Question]) -> Result<ScoreResult, ScoreError> {
    let questions: HashMap<i32, &Question> = questions.iter().map(|question| (question.id, question)).collect();

    let mut overall = Tally::default();
    let mut categories: BTreeMap<&str, Tally> = BTreeMap::new();
    for response in responses {
        let question = questions
            .get(&response.question_id)
            .ok_or(ScoreError::UnknownQuestion(response.question_id))?;
        categories.entry(question.category.as_str()).or_default().add(response.value);
        overall.add(response.value);
    }

    let average_score = overall.average()?;
    let category_scores = categories
        .into_iter()
        .map(|(category, tally)| {
            let score = CategoryScore {
                score: tally.total,
                average: tally.average()?,
            };
            Ok((category.to_owned(), score))
        })
        .collect::<Result<BTreeMap<_, _>, ScoreError>>()?;

    tracing::trace!(
        total_score = overall.total,
        average_score,
        categories = category_scores.len(),
        "aggregated responses"
    );

    Ok(ScoreResult {
        total_score: overall.total,
        average_score,
        category: classify(average_score),
        category_scores,
    })
}
