use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        builder::{build, select},
        entities::MenuView,
        ports::{MenuService, MenuStoreRepository},
        resolver::resolve,
        value_objects::{GetMenuViewInput, GetMenuViewsInput},
    },
};

impl<MS, LLM> MenuService for Service<MS, LLM>
where
    MS: MenuStoreRepository,
    LLM: Send + Sync,
{
    async fn get_menu_views(&self, input: GetMenuViewsInput) -> Result<Vec<MenuView>, CoreError> {
        let category_ids = self
            .menu_store
            .get_merchant_category_ids(input.merchant_id.clone())
            .await?;
        if category_ids.is_empty() {
            // Unknown merchant and merchant without categories are the same
            // condition at this layer.
            return Ok(Vec::new());
        }

        let categories = self.menu_store.get_categories(category_ids).await?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let declared = self
            .menu_store
            .get_declared_variants(input.merchant_id)
            .await?;

        let targets = resolve(&categories, &declared, &self.labels);
        Ok(targets.iter().map(|t| build(&categories, t)).collect())
    }

    async fn get_menu_view(&self, input: GetMenuViewInput) -> Result<MenuView, CoreError> {
        let views = self
            .get_menu_views(GetMenuViewsInput {
                merchant_id: input.merchant_id,
            })
            .await?;

        // An empty menu_id from the wire means "no selection".
        let menu_id = input.menu_id.as_deref().filter(|id| !id.is_empty());
        let view = select(&views, menu_id)?;
        Ok(view.clone())
    }
}
