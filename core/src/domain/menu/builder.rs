use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Category, MenuView},
        resolver::MenuTarget,
    },
};

/// Materializes one menu view from the source categories.
///
/// A concrete variant keeps categories and items that are untagged or that
/// reference it; the "Other" view keeps only untagged content; the unfiltered
/// view passes everything through. Pure and idempotent.
pub fn build(categories: &[Category], target: &MenuTarget) -> MenuView {
    let filtered = match target {
        MenuTarget::Unfiltered(_) => categories.to_vec(),
        MenuTarget::Variant(variant) => categories
            .iter()
            .filter(|c| c.is_untagged() || c.references(&variant.id))
            .map(|c| Category {
                items: c
                    .items
                    .iter()
                    .filter(|i| i.is_untagged() || i.references(&variant.id))
                    .cloned()
                    .collect(),
                ..c.clone()
            })
            .collect(),
        MenuTarget::Other(_) => categories
            .iter()
            .filter(|c| c.is_untagged())
            .map(|c| Category {
                items: c.items.iter().filter(|i| i.is_untagged()).cloned().collect(),
                ..c.clone()
            })
            .collect(),
    };

    let identity = target.identity();
    MenuView {
        id: identity.id.clone(),
        name: identity.name.clone(),
        image: identity.image.clone(),
        description: identity.description.clone(),
        categories: filtered,
    }
}

/// Picks one view from a resolved list. A sole view always wins; with several
/// views a missing or unknown `menu_id` is an explicit error rather than a
/// silent null.
pub fn select<'a>(
    views: &'a [MenuView],
    menu_id: Option<&str>,
) -> Result<&'a MenuView, CoreError> {
    let first = views.first().ok_or(CoreError::MenuNotFound)?;
    if views.len() == 1 {
        return Ok(first);
    }
    match menu_id {
        None => Ok(first),
        Some(id) => views
            .iter()
            .find(|v| v.id == id)
            .ok_or(CoreError::MenuViewNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::MenuLabels,
        menu::{
            entities::{Item, Variant, VariantRef},
            resolver::resolve,
        },
    };

    fn item(id: &str, variant_ids: &[&str]) -> Item {
        Item {
            id: id.to_string(),
            name: format!("item {id}"),
            description: "tasty".to_string(),
            ingredients: Vec::new(),
            allergens: vec!["gluten".to_string()],
            price: Some(9.5),
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

    fn view(id: &str) -> MenuView {
        MenuView {
            id: id.to_string(),
            name: id.to_string(),
            image: None,
            description: None,
            categories: Vec::new(),
        }
    }

    #[test]
    fn unfiltered_target_passes_everything_through() {
        let categories = vec![
            category("c1", &["ghost"], vec![item("i1", &["ghost"])]),
            category("c2", &[], vec![item("i2", &[])]),
        ];

        let built = build(&categories, &MenuTarget::Unfiltered(Variant::new("menu", "Menu")));

        assert_eq!(built.id, "menu");
        assert_eq!(built.name, "Menu");
        assert_eq!(built.categories, categories);
    }

    #[test]
    fn variant_target_keeps_untagged_and_matching_content() {
        let categories = vec![
            category("c1", &[], vec![item("i1", &[]), item("i2", &["v1"]), item("i3", &["v2"])]),
            category("c2", &["v2"], vec![item("i4", &[])]),
        ];

        let built = build(&categories, &MenuTarget::Variant(Variant::new("v1", "Lunch")));

        assert_eq!(built.categories.len(), 1);
        assert_eq!(built.categories[0].id, "c1");
        let item_ids: Vec<&str> = built.categories[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(item_ids, vec!["i1", "i2"]);
    }

    #[test]
    fn item_tag_governs_even_inside_a_variant_tagged_category() {
        // Category tagged [A] containing an item tagged [B]: under target A
        // the category appears but the item does not.
        let categories = vec![category("c1", &["a"], vec![item("i1", &["b"])])];

        let built = build(&categories, &MenuTarget::Variant(Variant::new("a", "A")));

        assert_eq!(built.categories.len(), 1);
        assert!(built.categories[0].items.is_empty());
    }

    #[test]
    fn other_target_never_leaks_variant_tagged_content() {
        let categories = vec![
            category("c1", &[], vec![item("i1", &[]), item("i2", &["v1"])]),
            category("c2", &["v1"], vec![item("i3", &[])]),
        ];

        let built = build(&categories, &MenuTarget::Other(Variant::new("other", "Altro")));

        assert_eq!(built.categories.len(), 1);
        assert_eq!(built.categories[0].id, "c1");
        let item_ids: Vec<&str> = built.categories[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(item_ids, vec!["i1"]);
    }

    #[test]
    fn category_fields_survive_except_the_item_list() {
        let source = category("c1", &["v1"], vec![item("i1", &["v2"]), item("i2", &["v1"])]);

        let built = build(
            std::slice::from_ref(&source),
            &MenuTarget::Variant(Variant::new("v1", "Lunch")),
        );

        let rebuilt = &built.categories[0];
        assert_eq!(rebuilt.id, source.id);
        assert_eq!(rebuilt.name, source.name);
        assert_eq!(rebuilt.variants, source.variants);
        assert_eq!(rebuilt.items.len(), 1);
        assert_eq!(rebuilt.items[0], source.items[1]);
    }

    #[test]
    fn build_is_idempotent() {
        let categories = vec![category("c1", &[], vec![item("i1", &["v1"]), item("i2", &[])])];
        let target = MenuTarget::Variant(Variant::new("v1", "Lunch"));

        assert_eq!(build(&categories, &target), build(&categories, &target));
    }

    #[test]
    fn worked_scenario_one_declared_variant_two_views() {
        // Merchant: Category1 untagged with Item1 (untagged) and Item2 (v1);
        // Category2 tagged [v1] with Item3 (untagged). Declared = [v1].
        let categories = vec![
            category("c1", &[], vec![item("i1", &[]), item("i2", &["v1"])]),
            category("c2", &["v1"], vec![item("i3", &[])]),
        ];
        let declared = vec![Variant::new("v1", "Lunch")];

        let targets = resolve(&categories, &declared, &MenuLabels::default());
        assert_eq!(targets.len(), 2);

        let views: Vec<MenuView> = targets.iter().map(|t| build(&categories, t)).collect();

        let variant_view = &views[0];
        assert_eq!(variant_view.id, "v1");
        assert_eq!(variant_view.categories.len(), 2);
        assert_eq!(
            variant_view.categories[0].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["i1", "i2"]
        );
        assert_eq!(
            variant_view.categories[1].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["i3"]
        );

        let other_view = &views[1];
        assert_eq!(other_view.id, "other");
        assert_eq!(other_view.categories.len(), 1);
        assert_eq!(other_view.categories[0].id, "c1");
        assert_eq!(
            other_view.categories[0].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["i1"]
        );
    }

    #[test]
    fn undeclared_tagged_item_vanishes_from_both_views() {
        // One declared variant plus an item tagged with a variant the
        // merchant never declared: the reference is dropped during
        // resolution, so the item is neither untagged nor matching and
        // appears in no view.
        let categories = vec![category(
            "c1",
            &[],
            vec![item("i1", &[]), item("i2", &["v1"]), item("i3", &["ghost"])],
        )];
        let declared = vec![Variant::new("v1", "Lunch")];

        let targets = resolve(&categories, &declared, &MenuLabels::default());
        let views: Vec<MenuView> = targets.iter().map(|t| build(&categories, t)).collect();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "v1");
        assert_eq!(
            views[0].categories[0].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["i1", "i2"]
        );
        assert_eq!(views[1].id, "other");
        assert_eq!(
            views[1].categories[0].items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["i1"]
        );
    }

    #[test]
    fn multi_variant_views_have_disjoint_variant_tagged_items() {
        let categories = vec![category(
            "c1",
            &[],
            vec![item("i1", &["v1"]), item("i2", &["v2"]), item("i3", &[])],
        )];
        let declared = vec![Variant::new("v1", "Lunch"), Variant::new("v2", "Dinner")];

        let targets = resolve(&categories, &declared, &MenuLabels::default());
        let views: Vec<MenuView> = targets.iter().map(|t| build(&categories, t)).collect();

        assert_eq!(views.len(), 2);
        let ids_of = |view: &MenuView| -> Vec<String> {
            view.categories.iter().flat_map(|c| c.items.iter().map(|i| i.id.clone())).collect()
        };
        assert_eq!(ids_of(&views[0]), vec!["i1", "i3"]);
        assert_eq!(ids_of(&views[1]), vec!["i2", "i3"]);
    }

    #[test]
    fn select_on_empty_list_is_menu_not_found() {
        assert_eq!(select(&[], None), Err(CoreError::MenuNotFound));
    }

    #[test]
    fn select_single_view_ignores_the_requested_id() {
        let views = vec![view("v1")];
        assert_eq!(select(&views, Some("nope")).map(|v| v.id.as_str()), Ok("v1"));
    }

    #[test]
    fn select_without_id_takes_the_first_view() {
        let views = vec![view("v1"), view("v2")];
        assert_eq!(select(&views, None).map(|v| v.id.as_str()), Ok("v1"));
    }

    #[test]
    fn select_matches_by_id() {
        let views = vec![view("v1"), view("v2")];
        assert_eq!(select(&views, Some("v2")).map(|v| v.id.as_str()), Ok("v2"));
    }

    #[test]
    fn select_unknown_id_is_an_explicit_error() {
        let views = vec![view("v1"), view("v2")];
        assert_eq!(select(&views, Some("v9")), Err(CoreError::MenuViewNotFound));
    }
}
