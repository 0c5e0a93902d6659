//! Carta de tragos del bar
use rand::Rng;

use crate::{
    errors::BarError,
    order::{Consumable, Order, Recipe},
};

#[derive(Debug, Clone)]
pub struct Menu {
    recipes: Vec<Recipe>,
    max_recipes_per_order: usize,
    house_special_chance: f64,
}

impl Menu {
    pub fn new(recipes: Vec<Recipe>, max_recipes_per_order: usize) -> Menu {
        Menu {
            recipes,
            max_recipes_per_order: max_recipes_per_order.max(1),
            house_special_chance: 0.0,
        }
    }

    /// Probabilidad de que un trago del pedido sea un invento de la casa
    pub fn with_house_specials(mut self, chance: f64) -> Menu {
        self.house_special_chance = chance.max(0.0).min(1.0);
        self
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Arma un pedido con entre uno y `max_recipes_per_order` tragos de la carta
    pub fn random_order<R: Rng>(&self, rng: &mut R) -> Result<Order, BarError> {
        if self.recipes.is_empty() {
            return Err(BarError::EmptyMenu);
        }
        let count = rng.gen_range(1, self.max_recipes_per_order.max(1) + 1);
        let recipes = (0..count)
            .map(|_| {
                if rng.gen_bool(self.house_special_chance) {
                    Recipe::random(rng)
                } else {
                    self.recipes[rng.gen_range(0, self.recipes.len())].clone()
                }
            })
            .collect();
        Ok(Order::new(recipes))
    }
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new(
            vec![
                Recipe::new("gin tonic", &[(Consumable::Gin, 2), (Consumable::Tonic, 3)], 5),
                Recipe::new("cuba libre", &[(Consumable::Rum, 2), (Consumable::Cola, 3)], 5),
                Recipe::new("screwdriver", &[(Consumable::Vodka, 2), (Consumable::Soda, 2)], 4),
                Recipe::new(
                    "margarita",
                    &[(Consumable::Tequila, 2), (Consumable::Lime, 1), (Consumable::Syrup, 1)],
                    7,
                ),
                Recipe::new("highball", &[(Consumable::Whiskey, 2), (Consumable::Soda, 3)], 6),
            ],
            1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{ rngs::StdRng, SeedableRng };

    #[test]
    fn should_fail_with_an_empty_menu() {
        let mut rng = StdRng::seed_from_u64(1);
        let menu = Menu::new(Vec::new(), 1);
        assert_eq!(Err(BarError::EmptyMenu), menu.random_order(&mut rng).map(|_| ()));
    }

    #[test]
    fn should_build_orders_from_the_menu() {
        let mut rng = StdRng::seed_from_u64(1);
        let menu = Menu::new(Menu::default().recipes().to_vec(), 3);
        for _ in 0..30 {
            let order = menu.random_order(&mut rng).unwrap();
            assert_eq!(true, order.recipe_count() >= 1 && order.recipe_count() <= 3);
            for recipe in order.pending() {
                assert_eq!(true, menu.recipes().contains(recipe));
            }
        }
    }

    #[test]
    fn should_mix_house_specials_when_asked() {
        let mut rng = StdRng::seed_from_u64(3);
        let menu = Menu::default().with_house_specials(1.0);
        let order = menu.random_order(&mut rng).unwrap();
        assert_eq!("house special", order.pending()[0].name);
        assert_eq!(order.pending()[0].cost(), order.price());
    }

    #[test]
    fn should_order_a_single_recipe_by_default() {
        let mut rng = StdRng::seed_from_u64(9);
        let order = Menu::default().random_order(&mut rng).unwrap();
        assert_eq!(1, order.recipe_count());
    }
}
