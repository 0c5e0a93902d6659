//! Personajes que pueden entrar al bar
use std::collections::HashMap;

use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};
use serde::{ Deserialize, Serialize };

use crate::errors::BarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKey {
    Sponsor,
    Biker,
    Clerk,
    Sailor,
    Student,
    Tourist,
}

impl CharacterKey {
    pub const ALL: [CharacterKey; 6] = [
        CharacterKey::Sponsor,
        CharacterKey::Biker,
        CharacterKey::Clerk,
        CharacterKey::Sailor,
        CharacterKey::Student,
        CharacterKey::Tourist,
    ];

    /// Todos menos el sponsor
    pub fn customers() -> impl Iterator<Item = CharacterKey> {
        CharacterKey::ALL
            .into_iter()
            .filter(|key| *key != CharacterKey::Sponsor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Mitad del ancho del personaje
    pub offset: f32,
}

/// Como se elige el personaje de cada cliente nuevo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    Uniform,
    Weighted(Vec<(CharacterKey, u32)>),
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Uniform
    }
}

impl SpawnPolicy {
    pub fn choose<R: Rng>(&self, rng: &mut R) -> CharacterKey {
        match self {
            SpawnPolicy::Weighted(weights) => {
                let candidates: Vec<&(CharacterKey, u32)> = weights
                    .iter()
                    .filter(|(key, _)| *key != CharacterKey::Sponsor)
                    .collect();
                if let Ok(index) = WeightedIndex::new(candidates.iter().map(|(_, weight)| *weight)) {
                    return candidates[index.sample(rng)].0;
                }
                choose_uniform(rng)
            }
            SpawnPolicy::Uniform => choose_uniform(rng),
        }
    }
}

fn choose_uniform<R: Rng>(rng: &mut R) -> CharacterKey {
    let keys: Vec<CharacterKey> = CharacterKey::customers().collect();
    keys[rng.gen_range(0, keys.len())]
}

/// Registro de personajes disponibles
#[derive(Debug, Clone)]
pub struct Roster {
    profiles: HashMap<CharacterKey, CharacterProfile>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster {
            profiles: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: CharacterKey, profile: CharacterProfile) {
        self.profiles.insert(key, profile);
    }

    pub fn profile(&self, key: CharacterKey) -> Result<&CharacterProfile, BarError> {
        self.profiles.get(&key).ok_or(BarError::UnknownCharacter(key))
    }
}

impl Default for Roster {
    fn default() -> Self {
        let mut roster = Roster::new();
        roster.register(CharacterKey::Sponsor, CharacterProfile { offset: 0.6 });
        roster.register(CharacterKey::Biker, CharacterProfile { offset: 0.7 });
        roster.register(CharacterKey::Clerk, CharacterProfile { offset: 0.5 });
        roster.register(CharacterKey::Sailor, CharacterProfile { offset: 0.6 });
        roster.register(CharacterKey::Student, CharacterProfile { offset: 0.45 });
        roster.register(CharacterKey::Tourist, CharacterProfile { offset: 0.55 });
        roster
    }
}
