use innodex_config::questions::{QuestionConfig, QuestionSeed};
use innodex_db::question::{self, NewQuestion};
use innodex_utils::loader::loader;
use sea_orm::DatabaseConnection;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SeedError {
    #[error(transparent)]
    Config(#[from] innodex_config::questions::error::ConfigError),
    #[error(transparent)]
    Loading(#[from] innodex_utils::loader::error::LoadingError),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
    #[error("max score {0} is out of range")]
    MaxScore(u32),
}

/// Loads the questions from `location`, or the built-in questionnaire when none is given.
pub(crate) async fn load_questions(location: Option<&str>) -> Result<QuestionConfig, SeedError> {
    let Some(location) = location else {
        tracing::info!("using built-in questions");
        return Ok(QuestionConfig::builtin()?);
    };
    tracing::info!(%location, "loading questions");
    Ok(innodex_config::questions::load(&loader(location)?).await?)
}

fn new_questions(config: QuestionConfig) -> Result<Vec<NewQuestion>, SeedError> {
    config
        .questions
        .into_iter()
        .map(|QuestionSeed { text, category, max_score }| {
            Ok(NewQuestion {
                text,
                category,
                max_score: i32::try_from(max_score).map_err(|_| SeedError::MaxScore(max_score))?,
            })
        })
        .collect()
}

/// Inserts the questions unless the question table already has rows. Returns the number of inserted questions.
pub(crate) async fn seed_if_empty(conn: &DatabaseConnection, config: QuestionConfig) -> Result<usize, SeedError> {
    let existing = question::Query::count(conn).await?;
    if existing > 0 {
        tracing::debug!(existing, "questions already seeded");
        return Ok(0);
    }
    let inserted = question::Mutation::insert_many(conn, new_questions(config)?).await?;
    tracing::info!(inserted, "seeded questions");
    Ok(inserted)
}

/// Seeds explicitly. With `force` the current questions are replaced, which the database refuses once they have
/// been answered.
pub(crate) async fn seed(conn: &DatabaseConnection, config: QuestionConfig, force: bool) -> Result<usize, SeedError> {
    if !force {
        return seed_if_empty(conn, config).await;
    }
    let replaced = question::Mutation::replace_all(conn, new_questions(config)?).await?;
    tracing::info!(replaced, "replaced questions");
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use innodex_test_helpers::{SqliteDb, TestDb};
    use sea_orm::Database;
    use test_log::test;
    use url::Url;

    async fn connect(db: &SqliteDb) -> DatabaseConnection {
        db::migration(&Url::parse(&db.db_uri()).unwrap()).unwrap();
        Database::connect(db.db_uri().as_ref()).await.unwrap()
    }

    fn single_question() -> QuestionConfig {
        QuestionConfig {
            questions: vec![QuestionSeed {
                text: "How is data used?".to_owned(),
                category: "Data Analytics".to_owned(),
                max_score: 5,
            }],
        }
    }

    #[test(tokio::test)]
    async fn test_seed_only_once() {
        let db = SqliteDb::new().unwrap();
        let conn = connect(&db).await;

        let config = load_questions(None).await.unwrap();
        assert_eq!(seed_if_empty(&conn, config.clone()).await.unwrap(), 8);
        assert_eq!(seed_if_empty(&conn, config).await.unwrap(), 0);
        assert_eq!(question::Query::count(&conn).await.unwrap(), 8);
    }

    #[test(tokio::test)]
    async fn test_forced_seed_replaces_questions() {
        let db = SqliteDb::new().unwrap();
        let conn = connect(&db).await;

        seed_if_empty(&conn, load_questions(None).await.unwrap()).await.unwrap();
        assert_eq!(seed(&conn, single_question(), false).await.unwrap(), 0);
        assert_eq!(seed(&conn, single_question(), true).await.unwrap(), 1);

        let questions = question::Query::all(&conn).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "Data Analytics");
    }

    #[test]
    fn test_max_score_out_of_range() {
        let mut config = single_question();
        config.questions[0].max_score = u32::MAX;
        assert!(matches!(new_questions(config), Err(SeedError::MaxScore(u32::MAX))));
    }
}
