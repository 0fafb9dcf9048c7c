use crate::domain::{
    common::MenuLabels,
    menu::entities::{Category, Variant},
};

/// Identity and filtering mode of one resolved menu view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// Filter categories and items to a concrete declared variant.
    Variant(Variant),
    /// The synthesized "Other" view: only untagged categories and items.
    Other(Variant),
    /// The single whole-menu view: no filtering at all.
    Unfiltered(Variant),
}

impl MenuTarget {
    pub fn identity(&self) -> &Variant {
        match self {
            MenuTarget::Variant(v) | MenuTarget::Other(v) | MenuTarget::Unfiltered(v) => v,
        }
    }
}

/// Partitions a merchant's categories into the ordered list of menu views to
/// expose, based on which declared variants the categories and items
/// reference.
///
/// - Two or more referenced-and-declared variants: one view per variant,
///   nothing else.
/// - Exactly one: that variant plus an "Other" view holding the untagged
///   content. The "Other" identity is the first declared variant left
///   unreferenced, or the configured fallback label.
/// - None: a single unfiltered view under the default label.
///
/// References to variants the merchant never declared are dropped silently.
pub fn resolve(
    categories: &[Category],
    declared_variants: &[Variant],
    labels: &MenuLabels,
) -> Vec<MenuTarget> {
    if categories.is_empty() {
        return Vec::new();
    }

    let referenced = referenced_variant_ids(categories);
    let resolved: Vec<Variant> = referenced
        .iter()
        .filter_map(|id| declared_variants.iter().find(|v| &v.id == id).cloned())
        .collect();

    match resolved.as_slice() {
        [] => vec![MenuTarget::Unfiltered(Variant::new(
            labels.menu_id.clone(),
            labels.menu_name.clone(),
        ))],
        [variant] => {
            let variant = variant.clone();
            let other = declared_variants
                .iter()
                .find(|v| v.id != variant.id)
                .cloned()
                .unwrap_or_else(|| {
                    Variant::new(labels.other_id.clone(), labels.other_name.clone())
                });
            vec![MenuTarget::Variant(variant), MenuTarget::Other(other)]
        }
        _ => {
            if has_untagged_content(categories) {
                tracing::warn!(
                    variant_count = resolved.len(),
                    "untagged categories or items are invisible while multiple variants are active"
                );
            }
            resolved.iter().cloned().map(MenuTarget::Variant).collect()
        }
    }
}

/// Every variant id referenced by a category or one of its items, in
/// encounter order, deduplicated.
fn referenced_variant_ids(categories: &[Category]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for category in categories {
        for reference in &category.variants {
            if !ids.contains(&reference.id) {
                ids.push(reference.id.clone());
            }
        }
        for item in &category.items {
            for reference in &item.variants {
                if !ids.contains(&reference.id) {
                    ids.push(reference.id.clone());
                }
            }
        }
    }
    ids
}

fn has_untagged_content(categories: &[Category]) -> bool {
    categories
        .iter()
        .any(|c| c.is_untagged() || c.items.iter().any(|i| i.is_untagged()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::{Item, VariantRef};

    fn item(id: &str, variant_ids: &[&str]) -> Item {
        Item {
            id: id.to_string(),
            name: format!("item {id}"),
            description: String::new(),
            ingredients: Vec::new(),
            allergens: Vec::new(),
            price: None,
            variants: variant_ids.iter().map(|v| VariantRef::new(*v)).collect(),
        }
    }

    fn category(id: &str, variant_ids: &[&str], items: Vec<Item>) -> Category {
        Category {
            id: id.to_string(),
            name: format!("category {id}"),
            items,
            variants: variant_ids.iter().map(|v| VariantRef::new(*v)).collect(),
        }
    }

    fn labels() -> MenuLabels {
        MenuLabels::default()
    }

    #[test]
    fn no_categories_resolves_to_nothing() {
        let declared = vec![Variant::new("v1", "Lunch")];
        assert!(resolve(&[], &declared, &labels()).is_empty());
    }

    #[test]
    fn no_references_resolve_to_single_unfiltered_view() {
        let categories = vec![category("c1", &[], vec![item("i1", &[])])];
        let targets = resolve(&categories, &[Variant::new("v1", "Lunch")], &labels());

        assert_eq!(
            targets,
            vec![MenuTarget::Unfiltered(Variant::new("menu", "Menu"))]
        );
    }

    #[test]
    fn undeclared_references_are_dropped_silently() {
        // The only reference points at a variant the merchant never declared,
        // so resolution behaves exactly as if there were no references.
        let categories = vec![category("c1", &["ghost"], vec![item("i1", &[])])];
        let targets = resolve(&categories, &[Variant::new("v1", "Lunch")], &labels());

        assert_eq!(
            targets,
            vec![MenuTarget::Unfiltered(Variant::new("menu", "Menu"))]
        );
    }

    #[test]
    fn single_variant_gains_an_other_view_from_leftover_declared_variant() {
        let declared = vec![Variant::new("v1", "Lunch"), Variant::new("v2", "Dinner")];
        let categories = vec![category("c1", &[], vec![item("i1", &["v1"])])];

        let targets = resolve(&categories, &declared, &labels());

        assert_eq!(
            targets,
            vec![
                MenuTarget::Variant(Variant::new("v1", "Lunch")),
                MenuTarget::Other(Variant::new("v2", "Dinner")),
            ]
        );
    }

    #[test]
    fn single_variant_falls_back_to_synthesized_other_identity() {
        let declared = vec![Variant::new("v1", "Lunch")];
        let categories = vec![category("c1", &["v1"], vec![item("i1", &[])])];

        let targets = resolve(&categories, &declared, &labels());

        assert_eq!(
            targets,
            vec![
                MenuTarget::Variant(Variant::new("v1", "Lunch")),
                MenuTarget::Other(Variant::new("other", "Altro")),
            ]
        );
    }

    #[test]
    fn two_or_more_variants_produce_one_view_each_and_no_other() {
        let declared = vec![
            Variant::new("v1", "Lunch"),
            Variant::new("v2", "Dinner"),
            Variant::new("v3", "Vegan"),
        ];
        let categories = vec![
            category("c1", &["v2"], vec![item("i1", &["v1"])]),
            category("c2", &[], vec![item("i2", &[])]),
        ];

        let targets = resolve(&categories, &declared, &labels());

        // Encounter order: the category reference (v2) comes before the item
        // reference (v1); v3 is declared but never referenced.
        assert_eq!(
            targets,
            vec![
                MenuTarget::Variant(Variant::new("v2", "Dinner")),
                MenuTarget::Variant(Variant::new("v1", "Lunch")),
            ]
        );
    }

    #[test]
    fn duplicate_references_are_deduplicated_by_id() {
        let declared = vec![Variant::new("v1", "Lunch"), Variant::new("v2", "Dinner")];
        let categories = vec![
            category("c1", &["v1"], vec![item("i1", &["v1", "v2"])]),
            category("c2", &["v2", "v1"], vec![]),
        ];

        let targets = resolve(&categories, &declared, &labels());

        assert_eq!(
            targets,
            vec![
                MenuTarget::Variant(Variant::new("v1", "Lunch")),
                MenuTarget::Variant(Variant::new("v2", "Dinner")),
            ]
        );
    }

    #[test]
    fn configured_labels_drive_the_synthesized_identities() {
        let labels = MenuLabels {
            other_id: "rest".to_string(),
            other_name: "Everything else".to_string(),
            menu_id: "full".to_string(),
            menu_name: "Full menu".to_string(),
        };

        let untagged = vec![category("c1", &[], vec![item("i1", &[])])];
        assert_eq!(
            resolve(&untagged, &[], &labels),
            vec![MenuTarget::Unfiltered(Variant::new("full", "Full menu"))]
        );

        let declared = vec![Variant::new("v1", "Lunch")];
        let tagged = vec![category("c1", &["v1"], vec![])];
        assert_eq!(
            resolve(&tagged, &declared, &labels)[1],
            MenuTarget::Other(Variant::new("rest", "Everything else"))
        );
    }
}
