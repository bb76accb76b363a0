//! Validation of submissions. Everything here runs before anything is written.

use super::error::Error;
use innodex_db::user::NewUser;
use innodex_model::question::Question;
use innodex_model::score::Response;
use innodex_model::submission::SubmissionRequest;
use innodex_model_tools::convert::IntoDbModel;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Submission {
    pub(crate) user: NewUser,
    /// Ordered by question id
    pub(crate) responses: Vec<Response>,
}

impl Submission {
    pub(crate) fn question_ids(&self) -> Vec<i32> {
        self.responses.iter().map(|response| response.question_id).collect()
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() > 1
        && domain.split('.').all(|label| !label.is_empty())
}

/// Checks the profile and parses the response keys.
pub(crate) fn validate(request: SubmissionRequest) -> Result<Submission, Error> {
    let SubmissionRequest { user_data, responses } = request;
    let user: NewUser = user_data.into_db_model();

    if user.email.is_empty() {
        return Err(Error::Validation("email is required".to_owned()));
    }
    if !looks_like_email(&user.email) {
        return Err(Error::Validation(format!("\"{}\" is not an email address", user.email)));
    }
    if user.name.is_empty() {
        return Err(Error::Validation("name is required".to_owned()));
    }
    if responses.is_empty() {
        return Err(Error::Validation("at least one response is required".to_owned()));
    }

    let mut parsed: BTreeMap<i32, u32> = BTreeMap::new();
    for (key, value) in responses {
        let question_id: i32 = key
            .trim()
            .parse()
            .map_err(|_| Error::Validation(format!("response key \"{key}\" is not a question id")))?;
        if parsed.insert(question_id, value).is_some() {
            return Err(Error::Validation(format!(
                "question {question_id} was answered more than once"
            )));
        }
    }

    Ok(Submission {
        user,
        responses: parsed
            .into_iter()
            .map(|(question_id, value)| Response::new(question_id, value))
            .collect(),
    })
}

/// Checks the responses against the stored questions: every question has to exist and no value may exceed the
/// maximum score of its question.
pub(crate) fn check_questions(responses: &[Response], questions: &[Question]) -> Result<(), Error> {
    let questions: HashMap<i32, &Question> = questions.iter().map(|question| (question.id, question)).collect();

    let unknown: Vec<i32> = responses
        .iter()
        .map(|response| response.question_id)
        .filter(|id| !questions.contains_key(id))
        .collect();
    if !unknown.is_empty() {
        return Err(Error::UnknownQuestions(unknown));
    }

    let exceeding = responses.iter().find_map(|response| {
        let question = questions.get(&response.question_id)?;
        (response.value > question.max_score).then_some((response, question))
    });
    if let Some((response, question)) = exceeding {
        return Err(Error::Validation(format!(
            "value {} of question {} exceeds its maximum of {}",
            response.value, question.id, question.max_score
        )));
    }
    Ok(())
}
