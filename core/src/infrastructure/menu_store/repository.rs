use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        menu::{
            entities::{Category, Variant},
            ports::MenuStoreRepository,
        },
    },
    infrastructure::menu_store::mappers::{
        category_from_row, category_ids_from_doc, variant_from_doc,
    },
};

/// Document-store gateway backed by JSONB rows. Merchant, category and
/// variant documents keep their original shapes inside the `doc` column.
#[derive(Debug, Clone)]
pub struct PostgresMenuStore {
    pool: PgPool,
}

impl PostgresMenuStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MenuStoreRepository for PostgresMenuStore {
    async fn get_merchant_category_ids(
        &self,
        merchant_id: String,
    ) -> Result<Vec<String>, CoreError> {
        let row: Option<(Option<serde_json::Value>,)> =
            sqlx::query_as("SELECT doc #> '{merchantInfo,categories}' FROM merchants WHERE id = $1")
                .bind(&merchant_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("failed to load merchant {}: {}", merchant_id, e);
                    CoreError::Internal(format!("merchant lookup failed: {e}"))
                })?;

        Ok(row
            .and_then(|(doc,)| doc)
            .map(category_ids_from_doc)
            .unwrap_or_default())
    }

    async fn get_categories(&self, ids: Vec<String>) -> Result<Vec<Category>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(String, serde_json::Value)> =
            sqlx::query_as("SELECT id, doc FROM categories WHERE id = ANY($1)")
                .bind(&ids)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("failed to load categories: {}", e);
                    CoreError::Internal(format!("category lookup failed: {e}"))
                })?;

        let mut by_id: HashMap<String, Category> = rows
            .into_iter()
            .filter_map(|(id, doc)| category_from_row(id.clone(), doc).map(|c| (id, c)))
            .collect();

        // Preserve the merchant's declared category ordering.
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_declared_variants(&self, merchant_id: String) -> Result<Vec<Variant>, CoreError> {
        let rows: Vec<(serde_json::Value,)> = sqlx::query_as(
            "SELECT doc FROM menu_variants WHERE merchant_id = $1 ORDER BY position",
        )
        .bind(&merchant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("failed to load variants for merchant {}: {}", merchant_id, e);
            CoreError::Internal(format!("variant lookup failed: {e}"))
        })?;

        Ok(rows
            .into_iter()
            .filter_map(|(doc,)| variant_from_doc(doc))
            .collect())
    }
}
