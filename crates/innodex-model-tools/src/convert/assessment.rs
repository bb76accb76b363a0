use crate::convert::{FromDbModel, IntoDbModel, IntoModel, TryFromDbModel, TryFromModel, TryIntoModel};
use crate::error::Error;
use innodex_db::assessment::NewAssessment;
use innodex_entity::answer::Model as AnswerModel;
use innodex_entity::assessment::{MaturityLevel as MaturityLevelModel, Model as AssessmentModel};
use innodex_entity::question::Model as QuestionModel;
use innodex_entity::user::Model as UserModel;
use innodex_model::assessment::{Answer, Assessment, AssessmentDetails};
use innodex_model::score::{MaturityLevel, ScoreResult};
use num_traits::ToPrimitive;

impl FromDbModel<MaturityLevelModel> for MaturityLevel {
    fn from_db_model(model: MaturityLevelModel) -> Self {
        match model {
            MaturityLevelModel::Beginner => Self::Beginner,
            MaturityLevelModel::Intermediate => Self::Intermediate,
            MaturityLevelModel::Advanced => Self::Advanced,
        }
    }
}

impl IntoDbModel<MaturityLevelModel> for MaturityLevel {
    fn into_db_model(self) -> MaturityLevelModel {
        match self {
            Self::Beginner => MaturityLevelModel::Beginner,
            Self::Intermediate => MaturityLevelModel::Intermediate,
            Self::Advanced => MaturityLevelModel::Advanced,
        }
    }
}

impl TryFromDbModel<AssessmentModel> for Assessment {
    type Error = Error;

    fn try_from_db_model(model: AssessmentModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            total_score: model.total_score.to_u64().ok_or(Error::NumConversion)?,
            average_score: model.average_score,
            category: model.category.into_model(),
            category_scores: serde_json::from_value(model.category_scores)?,
            created_at: model.created_at.and_utc(),
        })
    }
}

impl TryFromDbModel<(AssessmentModel, UserModel, Vec<(AnswerModel, QuestionModel)>)> for AssessmentDetails {
    type Error = Error;

    fn try_from_db_model(
        (assessment, user, answers): (AssessmentModel, UserModel, Vec<(AnswerModel, QuestionModel)>),
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            assessment: assessment.try_into_model()?,
            user: user.into_model(),
            answers: answers
                .into_iter()
                .map(TryIntoModel::try_into_model)
                .collect::<Result<Vec<Answer>, Error>>()?,
        })
    }
}

impl TryFromModel<ScoreResult> for NewAssessment {
    type Error = Error;

    fn try_from_model(result: ScoreResult) -> Result<Self, Self::Error> {
        Ok(Self {
            total_score: result.total_score.to_i64().ok_or(Error::NumConversion)?,
            average_score: result.average_score,
            category: result.category.into_db_model(),
            category_scores: serde_json::to_value(result.category_scores)?,
        })
    }
}
