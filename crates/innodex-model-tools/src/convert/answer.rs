use crate::convert::{TryFromDbModel, TryFromModel, TryIntoModel};
use crate::error::Error;
use innodex_db::answer::NewAnswer;
use innodex_entity::answer::Model as AnswerModel;
use innodex_entity::question::Model as QuestionModel;
use innodex_model::assessment::Answer;
use innodex_model::score::Response;
use num_traits::ToPrimitive;

impl TryFromDbModel<(AnswerModel, QuestionModel)> for Answer {
    type Error = Error;

    fn try_from_db_model((answer, question): (AnswerModel, QuestionModel)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: answer.id,
            value: answer.value.to_u32().ok_or(Error::NumConversion)?,
            question: question.try_into_model()?,
        })
    }
}

impl TryFromModel<Response> for NewAnswer {
    type Error = Error;

    fn try_from_model(response: Response) -> Result<Self, Self::Error> {
        Ok(Self {
            question_id: response.question_id,
            value: response.value.to_i32().ok_or(Error::NumConversion)?,
        })
    }
}
