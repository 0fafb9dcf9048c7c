use crate::domain::{
    assistant::{entities::SuggestedDish, value_objects::DishSummary},
    menu::entities::MenuView,
};

/// Flattens a menu view into per-dish summaries for prompt assembly, carrying
/// the category name alongside each dish.
pub fn flatten_menu(view: &MenuView) -> Vec<DishSummary> {
    let mut dishes = Vec::new();
    for category in &view.categories {
        for item in &category.items {
            dishes.push(DishSummary {
                id: item.id.clone(),
                name: item.name.clone(),
                description: item.description.clone(),
                ingredients: item.ingredients.iter().map(|i| i.name.clone()).collect(),
                allergens: item.allergens.clone(),
                price: item.price,
                category: category.name.clone(),
            });
        }
    }
    dishes
}

/// Resolves suggested dish names back to the full records of the menu view
/// they were suggested from. Names with no matching item are skipped.
pub fn match_suggested_dishes(view: &MenuView, names: &[String]) -> Vec<SuggestedDish> {
    let mut dishes = Vec::new();
    for category in &view.categories {
        for item in &category.items {
            if names.iter().any(|name| name == &item.name) {
                dishes.push(SuggestedDish {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    description: item.description.clone(),
                    ingredients: item.ingredients.clone(),
                    allergens: item.allergens.clone(),
                    price: item.price,
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                });
            }
        }
    }
    dishes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::entities::{Category, Ingredient, Item};

    fn sample_view() -> MenuView {
        MenuView {
            id: "v1".to_string(),
            name: "Lunch".to_string(),
            image: None,
            description: None,
            categories: vec![Category {
                id: "c1".to_string(),
                name: "Starters".to_string(),
                items: vec![
                    Item {
                        id: "i1".to_string(),
                        name: "Bruschetta".to_string(),
                        description: "toasted bread".to_string(),
                        ingredients: vec![Ingredient {
                            id: "g1".to_string(),
                            name: "tomato".to_string(),
                        }],
                        allergens: vec!["gluten".to_string()],
                        price: Some(6.0),
                        variants: Vec::new(),
                    },
                    Item {
                        id: "i2".to_string(),
                        name: "Caprese".to_string(),
                        description: String::new(),
                        ingredients: Vec::new(),
                        allergens: Vec::new(),
                        price: None,
                        variants: Vec::new(),
                    },
                ],
                variants: Vec::new(),
            }],
        }
    }

    #[test]
    fn flatten_carries_category_and_ingredient_names() {
        let dishes = flatten_menu(&sample_view());

        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].name, "Bruschetta");
        assert_eq!(dishes[0].category, "Starters");
        assert_eq!(dishes[0].ingredients, vec!["tomato"]);
        assert_eq!(dishes[0].allergens, vec!["gluten"]);
    }

    #[test]
    fn matching_keeps_full_records_and_skips_unknown_names() {
        let names = vec!["Caprese".to_string(), "Not On The Menu".to_string()];

        let matched = match_suggested_dishes(&sample_view(), &names);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "i2");
        assert_eq!(matched[0].category_id, "c1");
        assert_eq!(matched[0].category_name, "Starters");
    }
}
