#[derive(Debug, Clone)]
pub struct GetMenuViewsInput {
    pub merchant_id: String,
}

#[derive(Debug, Clone)]
pub struct GetMenuViewInput {
    pub merchant_id: String,
    pub menu_id: Option<String>,
}
