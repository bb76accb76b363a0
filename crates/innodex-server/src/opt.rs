use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "innodex", about = "Collect and score innovation-maturity assessments", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Migrate the database, seed the questions if there are none and serve the API
    Run(Run),
    /// Migrate the database and load the question set
    Seed(Seed),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Db {
    #[arg(long, env = "DATABASE_URL", help = "Database url, e.g. sqlite://innodex.db?mode=rwc")]
    pub(crate) database_url: Url,

    #[arg(long, env = "INNODEX_DB_MIN_CONNECTIONS", help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, env = "INNODEX_DB_MAX_CONNECTIONS", help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "INNODEX_HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "INNODEX_PORT")]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "INNODEX_ORIGINS", value_delimiter = ',', help = "Allowed CORS origins, any if empty")]
    pub(crate) origins: Vec<String>,

    #[arg(long, env = "INNODEX_QUESTIONS", help = "File or directory the questions are seeded from")]
    pub(crate) questions: Option<String>,

    #[arg(long = "sentry-dsn", env = "SENTRY_DSN", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        env = "INNODEX_ENV",
        default_value = "dev",
        help = "Set the environment used by sentry, error details are hidden in production"
    )]
    pub(crate) env: String,

    #[command(flatten)]
    pub(crate) db: Db,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Seed {
    #[arg(long, env = "INNODEX_QUESTIONS", help = "File or directory the questions are seeded from")]
    pub(crate) questions: Option<String>,

    #[arg(long, help = "Replace existing questions. Refused once answers exist")]
    pub(crate) force: bool,

    #[command(flatten)]
    pub(crate) db: Db,
}
