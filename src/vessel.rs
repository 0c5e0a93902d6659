//! Vaso donde se mezcla el trago y botella que lo llena
use std::collections::BTreeMap;

use log::debug;

use crate::{
    constants::TILT_RANGE,
    order::{Consumable, Recipe},
};

/// Indica si un recipiente con esta orientacion (en grados) vuelca su contenido.
/// Los bordes del rango no cuentan.
pub fn is_tilted(angle: f32) -> bool {
    let angle = angle.rem_euclid(360.0);
    angle > TILT_RANGE.0 && angle < TILT_RANGE.1
}

/// Vaso que acumula unidades de cada ingrediente. El nivel se cuenta en pasos
/// y se expone como altura (`pasos * step`).
#[derive(Debug, Clone)]
pub struct Vessel {
    contents: BTreeMap<Consumable, u32>,
    level_steps: u32,
    capacity_steps: u32,
    step: f32,
    orientation: f32,
    spilled: u32,
}

impl Vessel {
    pub fn new(capacity: f32, step: f32) -> Vessel {
        let capacity_steps = if step > 0.0 { (capacity / step).round() as u32 } else { 0 };
        Vessel {
            contents: BTreeMap::new(),
            level_steps: 0,
            capacity_steps,
            step,
            orientation: 0.0,
            spilled: 0,
        }
    }

    /// Agrega una unidad. Si el vaso esta lleno se derrama y devuelve false.
    pub fn pour(&mut self, consumable: Consumable) -> bool {
        if self.is_full() {
            self.spilled += 1;
            return false;
        }
        *self.contents.entry(consumable).or_insert(0) += 1;
        self.level_steps += 1;
        true
    }

    /// Un tick de vaciado: saca una unidad de cada ingrediente presente y baja el nivel un paso.
    pub fn drain_tick(&mut self, tilted: bool) -> bool {
        if !tilted || self.is_empty() {
            return false;
        }
        for quantity in self.contents.values_mut() {
            *quantity = quantity.saturating_sub(1);
        }
        self.contents.retain(|_, quantity| *quantity > 0);
        self.level_steps -= 1;
        true
    }

    pub fn set_orientation(&mut self, angle: f32) {
        self.orientation = angle;
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    /// Vacia el vaso si esta inclinado
    pub fn update(&mut self) -> bool {
        let drained = self.drain_tick(is_tilted(self.orientation));
        if drained {
            debug!("[VESSEL] Drained to level {:.2}", self.fill_level());
        }
        drained
    }

    pub fn contents(&self) -> &BTreeMap<Consumable, u32> {
        &self.contents
    }

    pub fn fill_level(&self) -> f32 {
        self.level_steps as f32 * self.step
    }

    pub fn level_steps(&self) -> u32 {
        self.level_steps
    }

    pub fn is_full(&self) -> bool {
        self.level_steps >= self.capacity_steps
    }

    pub fn is_empty(&self) -> bool {
        self.level_steps == 0
    }

    /// Unidades que no entraron por estar lleno
    pub fn spilled(&self) -> u32 {
        self.spilled
    }

    pub fn reset(&mut self) {
        self.contents.clear();
        self.level_steps = 0;
        self.orientation = 0.0;
    }

    pub fn to_recipe(&self) -> Recipe {
        Recipe::delivered(&self.contents)
    }
}

/// Botella de un ingrediente. Vierte una unidad por tick mientras esta inclinada.
#[derive(Debug, Clone)]
pub struct Bottle {
    pub consumable: Consumable,
    pub orientation: f32,
}

impl Bottle {
    pub fn new(consumable: Consumable) -> Bottle {
        Bottle {
            consumable,
            orientation: 0.0,
        }
    }

    pub fn is_flowing(&self) -> bool {
        is_tilted(self.orientation)
    }

    pub fn pour_into(&self, vessel: &mut Vessel) -> bool {
        self.is_flowing() && vessel.pour(self.consumable)
    }
}
