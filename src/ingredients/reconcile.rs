use std::collections::HashSet;

use crate::ingredients::normalize;
use crate::model::RecipeIngredient;

/// Partition of a recipe's ingredient list against the user's pantry.
///
/// Every input ingredient lands in exactly one of the two lists, in its
/// original order and with its original record untouched.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationResult {
    /// Ingredients the user still needs to buy
    pub shopping_list: Vec<RecipeIngredient>,
    /// Ingredients already on hand
    pub have_list: Vec<RecipeIngredient>,
}

/// Split `ingredients` into a shopping list and a have list by matching each
/// ingredient's normalized name against the already-normalized `available`
/// names.
///
/// A recipe name `n` counts as on hand when some available name `h` satisfies
/// `n == h`, `n` contains `h`, or `h` contains `n`. The containment test
/// absorbs minor phrasing differences ("red onion" vs "onion", "garlic" vs
/// "garlic cloves"). A name that normalizes to the empty string never
/// matches, even though the empty string is a substring of everything.
pub fn reconcile(
    ingredients: &[RecipeIngredient],
    available: &[String],
) -> ReconciliationResult {
    let have: HashSet<&str> = available
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();

    let mut result = ReconciliationResult::default();
    for item in ingredients {
        let name = normalize(&item.name);
        let matched = !name.is_empty()
            && have
                .iter()
                .any(|h| name == *h || h.contains(name.as_str()) || name.contains(*h));
        if matched {
            result.have_list.push(item.clone());
        } else {
            result.shopping_list.push(item.clone());
        }
    }
    result
}
