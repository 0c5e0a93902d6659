//! Tragos, ingredientes y pedidos
use std::collections::BTreeMap;

use rand::Rng;
use serde::{ Deserialize, Serialize };

use crate::scorer::score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Consumable {
    Gin,
    Vodka,
    Rum,
    Tequila,
    Whiskey,
    Soda,
    Tonic,
    Cola,
    Lime,
    Syrup,
}

impl Consumable {
    pub const ALL: [Consumable; 10] = [
        Consumable::Gin,
        Consumable::Vodka,
        Consumable::Rum,
        Consumable::Tequila,
        Consumable::Whiskey,
        Consumable::Soda,
        Consumable::Tonic,
        Consumable::Cola,
        Consumable::Lime,
        Consumable::Syrup,
    ];

    /// Precio por unidad servida
    pub fn unit_price(&self) -> u32 {
        match self {
            Consumable::Gin | Consumable::Vodka | Consumable::Rum => 2,
            Consumable::Tequila | Consumable::Whiskey => 3,
            Consumable::Soda | Consumable::Tonic | Consumable::Cola => 1,
            Consumable::Lime | Consumable::Syrup => 1,
        }
    }
}

/// Un trago: que lleva, en que cantidad y cuanto cuesta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: BTreeMap<Consumable, u32>,
    pub price: u32,
}

impl Recipe {
    pub fn new(name: &str, ingredients: &[(Consumable, u32)], price: u32) -> Recipe {
        let mut composition = BTreeMap::new();
        for (consumable, quantity) in ingredients {
            if *quantity > 0 {
                *composition.entry(*consumable).or_insert(0) += quantity;
            }
        }
        Recipe {
            name: name.to_string(),
            ingredients: composition,
            price,
        }
    }

    /// Trago inventado: entre uno y tres ingredientes distintos, cobrado por unidad
    pub fn random<R: Rng>(rng: &mut R) -> Recipe {
        let kinds = rng.gen_range(1, 4);
        let mut ingredients = Vec::new();
        for _ in 0..kinds {
            let consumable = Consumable::ALL[rng.gen_range(0, Consumable::ALL.len())];
            ingredients.push((consumable, rng.gen_range(1, 4)));
        }
        let mut recipe = Recipe::new("house special", &ingredients, 0);
        recipe.price = recipe.cost();
        recipe
    }

    /// Lo que realmente se entrego dentro del vaso. No tiene precio.
    pub fn delivered(contents: &BTreeMap<Consumable, u32>) -> Recipe {
        Recipe {
            name: "delivered".to_string(),
            ingredients: contents
                .iter()
                .filter(|(_, quantity)| **quantity > 0)
                .map(|(consumable, quantity)| (*consumable, *quantity))
                .collect(),
            price: 0,
        }
    }

    pub fn quantity_of(&self, consumable: &Consumable) -> u32 {
        self.ingredients.get(consumable).copied().unwrap_or(0)
    }

    pub fn total_units(&self) -> u32 {
        self.ingredients.values().sum()
    }

    /// Costo de los ingredientes segun su precio unitario
    pub fn cost(&self) -> u32 {
        self.ingredients
            .iter()
            .map(|(consumable, quantity)| consumable.unit_price() * quantity)
            .sum()
    }

}

/// Uno o mas tragos que espera un cliente. Cada entrega consume el trago que mejor coincide.
#[derive(Debug, Clone)]
pub struct Order {
    pending: Vec<Recipe>,
    recipe_count: usize,
    price: u32,
    score_sum: i32,
    served: usize,
}

impl Order {
    pub fn new(recipes: Vec<Recipe>) -> Order {
        Order {
            recipe_count: recipes.len(),
            price: recipes.iter().map(|recipe| recipe.price).sum(),
            pending: recipes,
            score_sum: 0,
            served: 0,
        }
    }

    pub fn single(recipe: Recipe) -> Order {
        Order::new(vec![recipe])
    }

    /// Busca el trago pendiente con mayor puntaje contra lo entregado, lo saca del pedido
    /// y acumula su puntaje. Ante empates gana el primero.
    pub fn take_best_match(&mut self, actual: &Recipe) -> Option<i32> {
        let mut best: Option<(usize, i32)> = None;
        for (index, expected) in self.pending.iter().enumerate() {
            let value = score(expected, actual);
            match best {
                Some((_, best_value)) if best_value >= value => {}
                _ => best = Some((index, value)),
            }
        }
        let (index, value) = best?;
        self.pending.remove(index);
        self.score_sum += value;
        self.served += 1;
        Some(value)
    }

    /// Promedio de los puntajes de los tragos ya entregados
    pub fn satisfaction(&self) -> i32 {
        if self.served == 0 {
            return 0;
        }
        self.score_sum / self.served as i32
    }

    pub fn pending(&self) -> &[Recipe] {
        &self.pending
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipe_count
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{ rngs::StdRng, SeedableRng };

    fn gin_tonic() -> Recipe {
        Recipe::new("gin tonic", &[(Consumable::Gin, 2), (Consumable::Tonic, 2)], 5)
    }

    fn cuba_libre() -> Recipe {
        Recipe::new("cuba libre", &[(Consumable::Rum, 2), (Consumable::Cola, 3)], 6)
    }

    #[test]
    fn should_merge_repeated_ingredients_and_drop_zeroes() {
        let recipe = Recipe::new("odd", &[(Consumable::Gin, 1), (Consumable::Gin, 2), (Consumable::Soda, 0)], 1);
        assert_eq!(3, recipe.quantity_of(&Consumable::Gin));
        assert_eq!(0, recipe.quantity_of(&Consumable::Soda));
        assert_eq!(1, recipe.ingredients.len());
    }

    #[test]
    fn should_price_random_recipes_by_their_ingredients() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let recipe = Recipe::random(&mut rng);
            assert_eq!(true, recipe.total_units() > 0);
            assert_eq!(recipe.cost(), recipe.price);
        }
    }

    #[test]
    fn should_take_the_best_matching_recipe_not_the_first() {
        let mut order = Order::new(vec![gin_tonic(), cuba_libre()]);
        let score = order.take_best_match(&cuba_libre());
        assert_eq!(Some(100), score);
        assert_eq!(1, order.pending().len());
        assert_eq!("gin tonic", order.pending()[0].name);
    }

    #[test]
    fn should_average_the_scores_of_every_served_recipe() {
        let mut order = Order::new(vec![gin_tonic(), cuba_libre()]);
        order.take_best_match(&gin_tonic());
        let empty = Recipe::delivered(&BTreeMap::new());
        order.take_best_match(&empty);
        assert_eq!(true, order.is_complete());
        assert_eq!(50, order.satisfaction());
        assert_eq!(11, order.price());
        assert_eq!(2, order.recipe_count());
    }

    #[test]
    fn should_return_none_when_nothing_is_pending() {
        let mut order = Order::single(gin_tonic());
        order.take_best_match(&gin_tonic());
        assert_eq!(None, order.take_best_match(&gin_tonic()));
        assert_eq!(100, order.satisfaction());
    }
}
