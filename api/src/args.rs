use clap::Parser;
use piatto_core::domain::common::{DatabaseConfig, LlmConfig, MenuLabels, PiattoConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "piatto-api", about = "Menu variant resolution and assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub labels: LabelArgs,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "piatto")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "piatto")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "DEEPSEEK_API_KEY")]
    pub llm_api_key: String,

    #[arg(long, env = "DEEPSEEK_BASE_URL", default_value = "https://api.deepseek.com")]
    pub llm_base_url: String,

    #[arg(long, env = "DEEPSEEK_MODEL", default_value = "deepseek-chat")]
    pub llm_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LabelArgs {
    #[arg(long, env = "MENU_LABEL_OTHER_ID", default_value = "other")]
    pub other_id: String,

    #[arg(long, env = "MENU_LABEL_OTHER_NAME", default_value = "Altro")]
    pub other_name: String,

    #[arg(long, env = "MENU_LABEL_MENU_ID", default_value = "menu")]
    pub menu_id: String,

    #[arg(long, env = "MENU_LABEL_MENU_NAME", default_value = "Menu")]
    pub menu_name: String,
}

impl From<Args> for PiattoConfig {
    fn from(args: Args) -> Self {
        PiattoConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            llm: LlmConfig {
                api_key: args.llm.llm_api_key,
                base_url: args.llm.llm_base_url,
                model: args.llm.llm_model,
            },
            labels: MenuLabels {
                other_id: args.labels.other_id,
                other_name: args.labels.other_name,
                menu_id: args.labels.menu_id,
                menu_name: args.labels.menu_name,
            },
        }
    }
}
