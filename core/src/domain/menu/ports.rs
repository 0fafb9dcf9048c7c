use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Category, MenuView, Variant},
        value_objects::{GetMenuViewInput, GetMenuViewsInput},
    },
};

/// Read-only gateway to the document store. A merchant that does not exist
/// yields empty results, never an error.
#[cfg_attr(test, mockall::automock)]
pub trait MenuStoreRepository: Send + Sync {
    fn get_merchant_category_ids(
        &self,
        merchant_id: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_categories(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn get_declared_variants(
        &self,
        merchant_id: String,
    ) -> impl Future<Output = Result<Vec<Variant>, CoreError>> + Send;
}

/// Service trait for menu resolution
#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn get_menu_views(
        &self,
        input: GetMenuViewsInput,
    ) -> impl Future<Output = Result<Vec<MenuView>, CoreError>> + Send;

    fn get_menu_view(
        &self,
        input: GetMenuViewInput,
    ) -> impl Future<Output = Result<MenuView, CoreError>> + Send;
}
