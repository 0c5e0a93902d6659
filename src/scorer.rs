//! Comparacion entre el trago pedido y el entregado
use std::collections::BTreeSet;

use crate::{
    constants::{SATISFACTION_HIGH, SATISFACTION_LOW},
    order::{Consumable, Recipe},
};

pub type Rule = fn(&Recipe, &Recipe) -> i32;

/// Reglas que se promedian para obtener el puntaje final
pub const RULES: [Rule; 2] = [composition_rule, proportion_rule];

/// Puntaje entre 0 y 100. Mayor puntaje es mejor coincidencia.
pub fn score(expected: &Recipe, actual: &Recipe) -> i32 {
    let total: i32 = RULES.iter().map(|rule| rule(expected, actual)).sum();
    total / RULES.len() as i32
}

fn consumables_of<'a>(expected: &'a Recipe, actual: &'a Recipe) -> BTreeSet<&'a Consumable> {
    expected.ingredients.keys().chain(actual.ingredients.keys()).collect()
}

/// Penaliza cada unidad de mas o de menos, relativo al total servido y esperado
pub fn composition_rule(expected: &Recipe, actual: &Recipe) -> i32 {
    let total = (expected.total_units() + actual.total_units()) as i32;
    if total == 0 {
        return 100;
    }
    let mismatch: i32 = consumables_of(expected, actual)
        .into_iter()
        .map(|consumable| {
            (expected.quantity_of(consumable) as i32 - actual.quantity_of(consumable) as i32).abs()
        })
        .sum();
    100 - 100 * mismatch / total
}

/// Compara la proporcion de cada ingrediente, sin importar la cantidad total
pub fn proportion_rule(expected: &Recipe, actual: &Recipe) -> i32 {
    let expected_total = expected.total_units() as f32;
    let actual_total = actual.total_units() as f32;
    if expected_total == 0.0 && actual_total == 0.0 {
        return 100;
    }
    if expected_total == 0.0 || actual_total == 0.0 {
        return 0;
    }
    let distance: f32 = consumables_of(expected, actual)
        .into_iter()
        .map(|consumable| {
            let expected_share = expected.quantity_of(consumable) as f32 / expected_total;
            let actual_share = actual.quantity_of(consumable) as f32 / actual_total;
            (expected_share - actual_share).abs()
        })
        .sum();
    (100.0 - 50.0 * distance).round() as i32
}

pub fn is_satisfied(satisfaction: i32) -> bool {
    satisfaction > SATISFACTION_LOW
}

/// Estado de animo que muestra la capa de dibujo segun la satisfaccion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Angry,
    Neutral,
    Happy,
}

impl Mood {
    pub fn from_satisfaction(satisfaction: i32) -> Mood {
        if satisfaction > SATISFACTION_HIGH {
            Mood::Happy
        } else if satisfaction > SATISFACTION_LOW {
            Mood::Neutral
        } else {
            Mood::Angry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(ingredients: &[(Consumable, u32)]) -> Recipe {
        Recipe::new("test", ingredients, 5)
    }

    #[test]
    fn should_score_identical_recipes_higher_than_different_ones() {
        let a = recipe(&[(Consumable::Gin, 2)]);
        let b = recipe(&[(Consumable::Gin, 1), (Consumable::Soda, 1)]);
        assert_eq!(100, score(&a, &a));
        assert_eq!(50, score(&a, &b));
        assert_eq!(true, score(&a, &a) > score(&a, &b));
    }

    #[test]
    fn should_score_zero_for_a_completely_wrong_drink() {
        let expected = recipe(&[(Consumable::Gin, 2)]);
        let actual = recipe(&[(Consumable::Cola, 3)]);
        assert_eq!(0, score(&expected, &actual));
    }

    #[test]
    fn should_score_zero_for_an_empty_glass() {
        let expected = recipe(&[(Consumable::Rum, 1), (Consumable::Cola, 2)]);
        let actual = recipe(&[]);
        assert_eq!(0, score(&expected, &actual));
    }

    #[test]
    fn should_reward_right_proportions_with_wrong_amount() {
        let expected = recipe(&[(Consumable::Gin, 2), (Consumable::Tonic, 2)]);
        let doubled = recipe(&[(Consumable::Gin, 4), (Consumable::Tonic, 4)]);
        assert_eq!(100, proportion_rule(&expected, &doubled));
        assert_eq!(67, composition_rule(&expected, &doubled));
        assert_eq!(83, score(&expected, &doubled));
    }

    #[test]
    fn should_be_deterministic() {
        let expected = recipe(&[(Consumable::Tequila, 2), (Consumable::Lime, 1)]);
        let actual = recipe(&[(Consumable::Tequila, 1), (Consumable::Syrup, 1)]);
        assert_eq!(score(&expected, &actual), score(&expected, &actual));
    }

    #[test]
    fn should_map_satisfaction_to_mood() {
        assert_eq!(Mood::Angry, Mood::from_satisfaction(0));
        assert_eq!(Mood::Angry, Mood::from_satisfaction(SATISFACTION_LOW));
        assert_eq!(Mood::Neutral, Mood::from_satisfaction(SATISFACTION_LOW + 1));
        assert_eq!(Mood::Happy, Mood::from_satisfaction(100));
        assert_eq!(false, is_satisfied(SATISFACTION_LOW));
        assert_eq!(true, is_satisfied(100));
    }
}
