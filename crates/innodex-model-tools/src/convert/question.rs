use crate::convert::TryFromDbModel;
use crate::error::Error;
use innodex_entity::question::Model as QuestionModel;
use innodex_model::question::Question;
use num_traits::ToPrimitive;

impl TryFromDbModel<QuestionModel> for Question {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            text: model.text,
            category: model.category,
            max_score: model.max_score.to_u32().ok_or(Error::NumConversion)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TryIntoModel;

    fn model(max_score: i32) -> QuestionModel {
        QuestionModel {
            id: 3,
            text: "How well do teams collaborate?".to_owned(),
            category: "Collaboration".to_owned(),
            max_score,
        }
    }

    #[test]
    fn test_question_from_db_model() {
        let question: Question = model(5).try_into_model().unwrap();
        assert_eq!(question.id, 3);
        assert_eq!(question.max_score, 5);
    }

    #[test]
    fn test_negative_max_score() {
        let result: Result<Question, _> = model(-1).try_into_model();
        assert!(matches!(result, Err(Error::NumConversion)));
    }
}
