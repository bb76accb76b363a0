use serde::Deserialize;

fn default_max_score() -> u32 {
    5
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestionV01 {
    pub text: String,
    pub category: String,
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}
