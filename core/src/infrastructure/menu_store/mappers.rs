use crate::domain::menu::entities::{Category, Variant};

/// Maps a category row onto the domain entity. The row id wins over whatever
/// id the document carries. Documents that do not deserialize are skipped.
pub fn category_from_row(id: String, doc: serde_json::Value) -> Option<Category> {
    match serde_json::from_value::<Category>(doc) {
        Ok(mut category) => {
            category.id = id;
            Some(category)
        }
        Err(e) => {
            tracing::warn!("skipping malformed category document {}: {}", id, e);
            None
        }
    }
}

/// Maps a variant document onto the domain entity. Variants without an id
/// cannot take part in matching and are skipped.
pub fn variant_from_doc(doc: serde_json::Value) -> Option<Variant> {
    match serde_json::from_value::<Variant>(doc) {
        Ok(variant) if !variant.id.is_empty() => Some(variant),
        Ok(_) => {
            tracing::warn!("skipping variant document without an id");
            None
        }
        Err(e) => {
            tracing::warn!("skipping malformed variant document: {}", e);
            None
        }
    }
}

/// Extracts the ordered category id list from a merchant document fragment.
pub fn category_ids_from_doc(doc: serde_json::Value) -> Vec<String> {
    serde_json::from_value(doc).unwrap_or_default()
}
