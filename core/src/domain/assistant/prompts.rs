use std::fmt::Write as _;

use crate::domain::assistant::{
    entities::MAX_SUGGESTED_DISHES,
    value_objects::{DishSummary, UserPreferences},
};

fn push_dish_lines(prompt: &mut String, dishes: &[DishSummary]) {
    for dish in dishes {
        let _ = writeln!(prompt, "- {}: {}", dish.name, dish.description);
        let _ = writeln!(prompt, "  Ingredients: {}", dish.ingredients.join(", "));
        let _ = writeln!(prompt, "  Allergens: {}", dish.allergens.join(", "));
    }
}

/// Builds the prompt asking the model for 3 clarifying preference questions.
pub fn questions_prompt(dishes: &[DishSummary], language: &str) -> String {
    let mut prompt =
        String::from("Based on the following list of dishes, generate 3 user questions:\n");
    push_dish_lines(&mut prompt, dishes);
    prompt.push_str(
        "\nCreate 3 questions to help the user choose dishes according to their preferences.\
         \nEach question must include: 'question', 'type' (one of: single-selection (for \
         questions with a yes/no answer), multi-selection (for questions with multiple answers \
         allowed), open-text (for questions without pre-defined answers to which the client can \
         respond in an open way)), and if applicable, 'possible_answers'.\
         \nRespond only with JSON (no markdown or explanations) wrapping the questions array \
         into a 'questions' key.",
    );
    let _ = write!(
        prompt,
        "\n\nLanguage of the questions and possible answers: {language}\n"
    );
    prompt
}

/// Builds the prompt asking the model to pick dishes matching the user's
/// answers.
pub fn suggestions_prompt(
    dishes: &[DishSummary],
    preferences: &UserPreferences,
    language: Option<&str>,
) -> String {
    let mut prompt = String::from(
        "Suggest dishes based on the following menu and the user's preferences:\n\nMenu:\n",
    );
    push_dish_lines(&mut prompt, dishes);

    prompt.push_str("\nUser preferences:\n");
    for preference in &preferences.preferences {
        let _ = writeln!(prompt, "- Question: {}", preference.question);
        let _ = writeln!(prompt, "  Answer: {}", preference.answer);
    }

    let _ = write!(
        prompt,
        "\nSuggest the dish names best matching the user's preferences, using only names that \
         appear in the menu above. Return at most {MAX_SUGGESTED_DISHES} names.\
         \nRespond only with JSON (no markdown or explanations) wrapping the dish name array \
         into a 'suggested_dishes' key."
    );
    if let Some(language) = language {
        let _ = write!(prompt, "\n\nLanguage of the answer: {language}\n");
    }
    prompt
}
