use crate::{
    domain::common::{PiattoConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::DeepSeekLlmClient,
        menu_store::PostgresMenuStore,
    },
};

pub type PiattoService = Service<PostgresMenuStore, DeepSeekLlmClient>;

/// Builds the concrete service once at process start.
pub async fn create_service(config: PiattoConfig) -> Result<PiattoService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let menu_store = PostgresMenuStore::new(postgres.get_pool());
    let llm_client = DeepSeekLlmClient::new(config.llm.clone())?;

    Ok(Service::new(menu_store, llm_client, config.labels))
}
