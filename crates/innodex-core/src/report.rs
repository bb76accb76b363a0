use crate::error::ScoreError;
use crate::score::round2;
use innodex_model::assessment::AssessmentDetails;
use innodex_model::report::{CategoryReport, Report};
use innodex_model::score::MaturityLevel;
use num_traits::ToPrimitive;
use std::collections::BTreeMap;

/// Categories below this share of their attainable points get a dedicated recommendation.
const WEAK_CATEGORY_PERCENTAGE: f64 = 50.0;

fn summary(overall_score: f64) -> &'static str {
    if overall_score >= 8.0 {
        "Excellent! Your organization demonstrates strong innovation capabilities across multiple dimensions."
    } else if overall_score >= 6.0 {
        "Good performance. Your organization has solid innovation foundations but has opportunities to strengthen specific areas."
    } else if overall_score >= 4.0 {
        "Your organization shows some innovation capability but has significant room for improvement."
    } else {
        "Your organization is at an early stage of innovation maturity with substantial opportunity for development."
    }
}

fn level_recommendations(level: MaturityLevel) -> &'static [&'static str] {
    match level {
        MaturityLevel::Beginner => &[
            "Establish a shared, repeatable way of framing problems before discussing solutions.",
            "Start collecting customer and user feedback systematically and review it regularly.",
        ],
        MaturityLevel::Intermediate => &[
            "Make cross-functional problem framing a standard step when projects are kicked off.",
            "Complement qualitative research with data analytics to spot emerging issues earlier.",
        ],
        MaturityLevel::Advanced => &[
            "Share your problem-identification practices across teams to keep them consistent.",
            "Experiment with new research methods to keep your innovation pipeline ahead of change.",
        ],
    }
}

fn percentage(score: u64, max_score: u64) -> Result<f64, ScoreError> {
    if max_score == 0 {
        return Ok(0.0);
    }
    let score = score.to_f64().ok_or(ScoreError::NumConversion)?;
    let max_score = max_score.to_f64().ok_or(ScoreError::NumConversion)?;
    Ok(score / max_score * 100.0)
}

/// Builds the presentation view of a stored assessment.
///
/// The attainable points of a category are the summed maximum scores of the questions answered in it.
pub fn build_report(details: &AssessmentDetails) -> Result<Report, ScoreError> {
    let mut attainable: BTreeMap<&str, u64> = BTreeMap::new();
    for answer in &details.answers {
        *attainable.entry(answer.question.category.as_str()).or_default() += u64::from(answer.question.max_score);
    }

    let assessment = &details.assessment;
    let mut category_scores = assessment
        .category_scores
        .iter()
        .map(|(name, score)| {
            let max_score = attainable.get(name.as_str()).copied().unwrap_or_default();
            Ok(CategoryReport {
                name: name.clone(),
                score: score.score,
                max_score,
                average: score.average,
                percentage: round2(percentage(score.score, max_score)?),
            })
        })
        .collect::<Result<Vec<_>, ScoreError>>()?;

    let total_attainable = attainable.values().sum();
    let overall_score = round2(percentage(assessment.total_score, total_attainable)? / 10.0);

    let mut recommendations: Vec<String> = level_recommendations(assessment.category)
        .iter()
        .map(ToString::to_string)
        .collect();
    category_scores.sort_by(|a, b| a.percentage.total_cmp(&b.percentage).then_with(|| a.name.cmp(&b.name)));
    recommendations.extend(
        category_scores
            .iter()
            .filter(|category| category.percentage < WEAK_CATEGORY_PERCENTAGE)
            .map(|category| {
                format!(
                    "Prioritise {}: it reached {}% of the attainable points.",
                    category.name, category.percentage
                )
            }),
    );
    category_scores.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Report {
        assessment_id: assessment.id,
        overall_score,
        category: assessment.category,
        summary: summary(overall_score).to_owned(),
        category_scores,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use innodex_model::assessment::{Answer, Assessment};
    use innodex_model::question::Question;
    use innodex_model::score::CategoryScore;
    use innodex_model::user::User;
    use uuid::Uuid;

    fn answer(id: i32, category: &str, value: u32) -> Answer {
        Answer {
            id,
            value,
            question: Question {
                id,
                text: format!("Question {id}"),
                category: category.to_owned(),
                max_score: 5,
            },
        }
    }

    fn details(level: MaturityLevel, answers: Vec<Answer>) -> AssessmentDetails {
        let mut category_scores: BTreeMap<String, CategoryScore> = BTreeMap::new();
        for answer in &answers {
            let entry = category_scores
                .entry(answer.question.category.clone())
                .or_insert(CategoryScore { score: 0, average: 0.0 });
            entry.score += u64::from(answer.value);
        }
        let created_at = DateTime::from_timestamp(0, 0).unwrap();
        let user_id = Uuid::new_v4();
        AssessmentDetails {
            assessment: Assessment {
                id: Uuid::new_v4(),
                user_id,
                total_score: answers.iter().map(|answer| u64::from(answer.value)).sum(),
                average_score: 0.0,
                category: level,
                category_scores,
                created_at,
            },
            user: User {
                id: user_id,
                name: "Jo".to_owned(),
                email: "jo@example.com".to_owned(),
                company: None,
                industry: None,
                company_size: None,
                created_at,
            },
            answers,
        }
    }

    #[test]
    fn test_report_scales_and_percentages() {
        let details = details(
            MaturityLevel::Advanced,
            vec![
                answer(1, "Problem Identification", 4),
                answer(2, "Problem Identification", 5),
                answer(3, "Collaboration", 5),
                answer(4, "Collaboration", 4),
            ],
        );
        let report = build_report(&details).unwrap();

        assert!((report.overall_score - 9.0).abs() < f64::EPSILON);
        assert_eq!(report.category, MaturityLevel::Advanced);
        assert!(report.summary.starts_with("Excellent!"));
        let names: Vec<_> = report.category_scores.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Collaboration", "Problem Identification"]);
        assert_eq!(report.category_scores[0].max_score, 10);
        assert!((report.category_scores[0].percentage - 90.0).abs() < f64::EPSILON);
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_weak_categories_are_recommended_weakest_first() {
        let details = details(
            MaturityLevel::Beginner,
            vec![
                answer(1, "Research", 2),
                answer(2, "Data Analytics", 1),
                answer(3, "Customer Focus", 5),
            ],
        );
        let report = build_report(&details).unwrap();

        assert!((report.overall_score - 5.33).abs() < f64::EPSILON);
        assert!(report.summary.starts_with("Your organization shows some"));
        assert_eq!(
            &report.recommendations[2..],
            [
                "Prioritise Data Analytics: it reached 20% of the attainable points.",
                "Prioritise Research: it reached 40% of the attainable points.",
            ]
        );
    }

    #[test]
    fn test_empty_assessment() {
        let report = build_report(&details(MaturityLevel::Beginner, vec![])).unwrap();
        assert!(report.overall_score.abs() < f64::EPSILON);
        assert!(report.category_scores.is_empty());
        assert!(report.summary.starts_with("Your organization is at an early stage"));
    }
}
