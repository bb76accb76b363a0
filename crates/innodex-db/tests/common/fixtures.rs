use innodex_db::assessment::NewAssessment;
use innodex_db::question::{self, NewQuestion};
use innodex_db::user::NewUser;
use innodex_entity::assessment::MaturityLevel;
use innodex_entity::question::Model as Question;
use sea_orm::DbConn;

#[allow(dead_code)]
pub fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Robin".to_owned(),
        email: email.to_owned(),
        company: Some("Acme".to_owned()),
        industry: None,
        company_size: Some("10-50".to_owned()),
    }
}

#[allow(dead_code)]
pub fn new_assessment() -> NewAssessment {
    NewAssessment {
        total_score: 9,
        average_score: 4.5,
        category: MaturityLevel::Advanced,
        category_scores: serde_json::json!({"Problem Identification": {"score": 9, "average": 4.5}}),
    }
}

#[allow(dead_code)]
pub async fn seed_questions(db: &DbConn) -> Vec<Question> {
    let questions = vec![
        NewQuestion {
            text: "How clearly are problems defined?".to_owned(),
            category: "Problem Identification".to_owned(),
            max_score: 5,
        },
        NewQuestion {
            text: "How often are root causes analysed?".to_owned(),
            category: "Problem Identification".to_owned(),
            max_score: 5,
        },
        NewQuestion {
            text: "How well do teams collaborate?".to_owned(),
            category: "Collaboration".to_owned(),
            max_score: 5,
        },
    ];
    question::Mutation::insert_many(db, questions).await.unwrap();
    question::Query::all(db).await.unwrap()
}
