//! Lectura de la configuracion del bar desde un archivo JSON
use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::Path;

use log::{ info, warn };
use serde::Deserialize;

use crate::{
    constants::*,
    errors::BarError,
    menu::Menu,
    order::Recipe,
    roster::{CharacterKey, CharacterProfile, Roster, SpawnPolicy},
};

/// Todos los parametros de una partida. Los campos que falten toman el valor por defecto.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BarConfiguration {
    pub difficulty: u32,
    pub customer_limit: usize,
    pub spawn_interval: (f32, f32),
    pub sponsor_initial_delay: f32,
    pub sponsor_interval: f32,
    pub reputation_threshold: i32,
    pub contract_window: f32,
    pub contract_fee: u32,
    pub base_patience: f32,
    pub walk_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub vessel_capacity: f32,
    pub vessel_step: f32,
    pub seed: Option<u64>,
    pub opening_hour: u32,
    pub simulation_seconds: f32,
    pub tick_delta: f32,
    pub statistics_interval: f32,
    pub bartender_mistake_chance: f64,
    pub spawn_policy: SpawnPolicy,
    pub max_recipes_per_order: usize,
    pub house_special_chance: f64,
    pub recipes: Vec<Recipe>,
    pub characters: Vec<(CharacterKey, CharacterProfile)>,
}

impl Default for BarConfiguration {
    fn default() -> Self {
        BarConfiguration {
            difficulty: DIFFICULTY,
            customer_limit: CUSTOMER_LIMIT,
            spawn_interval: SPAWN_INTERVAL_RANGE,
            sponsor_initial_delay: SPONSOR_INITIAL_DELAY,
            sponsor_interval: SPONSOR_INTERVAL,
            reputation_threshold: REPUTATION_THRESHOLD,
            contract_window: CONTRACT_WINDOW,
            contract_fee: CONTRACT_FEE,
            base_patience: BASE_PATIENCE,
            walk_speed: WALK_SPEED,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            vessel_capacity: VESSEL_CAPACITY,
            vessel_step: VESSEL_STEP,
            seed: None,
            opening_hour: 18,
            simulation_seconds: SIMULATION_SECONDS,
            tick_delta: TICK_DELTA,
            statistics_interval: STATISTICS_INTERVAL,
            bartender_mistake_chance: BARTENDER_MISTAKE_CHANCE,
            spawn_policy: SpawnPolicy::Uniform,
            max_recipes_per_order: 1,
            house_special_chance: HOUSE_SPECIAL_CHANCE,
            recipes: Vec::new(),
            characters: Vec::new(),
        }
    }
}

impl BarConfiguration {
    /// Carta configurada, o la de la casa si no se configuro ninguna
    pub fn menu(&self) -> Menu {
        let recipes = if self.recipes.is_empty() {
            Menu::default().recipes().to_vec()
        } else {
            self.recipes.clone()
        };
        Menu::new(recipes, self.max_recipes_per_order).with_house_specials(self.house_special_chance)
    }

    pub fn roster(&self) -> Roster {
        if self.characters.is_empty() {
            return Roster::default();
        }
        let mut roster = Roster::new();
        for (key, profile) in &self.characters {
            roster.register(*key, *profile);
        }
        roster
    }
}

fn read_configuration_from_file<P: AsRef<Path>>(path: P) -> Result<BarConfiguration, BarError> {
    let file = File::open(path)?;
    parse_configuration(BufReader::new(file))
}

/// Si el archivo no existe se usan los valores por defecto. Si existe pero esta mal formado es un error.
pub fn read_configuration<P: AsRef<Path>>(path: P) -> Result<BarConfiguration, BarError> {
    if !path.as_ref().exists() {
        warn!(
            "[CONFIG] {} not found, using default configuration",
            path.as_ref().display()
        );
        return Ok(BarConfiguration::default());
    }
    let configuration = read_configuration_from_file(&path)?;
    info!("[CONFIG] Loaded {}", path.as_ref().display());
    Ok(configuration)
}

pub fn parse_configuration<R: Read>(reader: R) -> Result<BarConfiguration, BarError> {
    let configuration: BarConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration)
}
