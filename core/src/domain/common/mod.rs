pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PiattoConfig {
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub labels: MenuLabels,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Display identities of the synthesized menu views. The defaults match the
/// labels the product ships with; deployments override them per locale.
#[derive(Clone, Debug)]
pub struct MenuLabels {
    pub other_id: String,
    pub other_name: String,
    pub menu_id: String,
    pub menu_name: String,
}

impl Default for MenuLabels {
    fn default() -> Self {
        Self {
            other_id: "other".to_string(),
            other_name: "Altro".to_string(),
            menu_id: "menu".to_string(),
            menu_name: "Menu".to_string(),
        }
    }
}
