//! Barman automatico para las corridas sin interfaz.
//! Sirve el vaso en juego botella por botella y lo entrega cuando esta listo.
use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::{
    coordinator::Coordinator,
    economy::Economy,
    errors::BarError,
    order::Consumable,
    sponsor::SponsorStage,
    timed_trigger::TimedTrigger,
    vessel::Bottle,
};

/// Segundos entre una unidad servida y la siguiente
const POUR_INTERVAL: f32 = 0.3;

/// Inclinacion con la que se sirve una botella
const POUR_ANGLE: f32 = 135.0;

const ACCEPT_CHANCE: f64 = 0.6;
const REFUSE_CHANCE: f64 = 0.2;

pub struct Bartender {
    mistake_chance: f64,
    pour_timer: TimedTrigger,
    considered_offers: HashSet<usize>,
}

impl Bartender {
    pub fn new(mistake_chance: f64) -> Bartender {
        Bartender {
            mistake_chance: mistake_chance.max(0.0).min(1.0),
            pour_timer: TimedTrigger::new(POUR_INTERVAL),
            considered_offers: HashSet::new(),
        }
    }

    pub fn work<E: Economy, R: Rng>(
        &mut self,
        delta: f32,
        coordinator: &mut Coordinator<E>,
        rng: &mut R,
    ) -> Result<(), BarError> {
        self.answer_sponsors(coordinator, rng)?;
        self.serve(delta, coordinator, rng)
    }

    /// Cada oferta se considera una sola vez. A veces se deja vencer.
    fn answer_sponsors<E: Economy, R: Rng>(
        &mut self,
        coordinator: &mut Coordinator<E>,
        rng: &mut R,
    ) -> Result<(), BarError> {
        let offers: Vec<usize> = coordinator
            .sponsors()
            .iter()
            .filter(|sponsor| matches!(sponsor.stage(), SponsorStage::Offering { .. }))
            .map(|sponsor| sponsor.id())
            .filter(|id| !self.considered_offers.contains(id))
            .collect();
        for id in offers {
            self.considered_offers.insert(id);
            let roll: f64 = rng.gen();
            if roll < ACCEPT_CHANCE {
                coordinator.accept_contract(id)?;
            } else if roll < ACCEPT_CHANCE + REFUSE_CHANCE {
                coordinator.refuse_contract(id)?;
            } else {
                debug!("[BARTENDER] Ignoring sponsor {}", id);
            }
        }
        Ok(())
    }

    fn serve<E: Economy, R: Rng>(
        &mut self,
        delta: f32,
        coordinator: &mut Coordinator<E>,
        rng: &mut R,
    ) -> Result<(), BarError> {
        let owner = match coordinator.vessel_owner() {
            Some(owner) => owner,
            None => return Ok(()),
        };
        let expected = match coordinator
            .patron(owner)
            .and_then(|patron| patron.order())
            .and_then(|order| order.pending().first())
        {
            Some(recipe) => recipe.clone(),
            None => return Ok(()),
        };
        let (missing, full) = match coordinator.vessel() {
            Some(vessel) => {
                let missing = expected
                    .ingredients
                    .iter()
                    .find(|(consumable, quantity)| {
                        vessel.contents().get(*consumable).copied().unwrap_or(0) < **quantity
                    })
                    .map(|(consumable, _)| *consumable);
                (missing, vessel.is_full())
            }
            None => return Ok(()),
        };

        let consumable = match missing {
            Some(consumable) if !full => consumable,
            _ => {
                let delivery = coordinator.deliver(owner)?;
                debug!("[BARTENDER] Delivered {} to patron {}: {:?}", expected.name, owner, delivery);
                return Ok(());
            }
        };

        let mistake_chance = self.mistake_chance;
        let mut timer = self.pour_timer;
        timer.tick(
            delta,
            || true,
            || {
                let poured = if rng.gen_bool(mistake_chance) {
                    Consumable::ALL[rng.gen_range(0, Consumable::ALL.len())]
                } else {
                    consumable
                };
                let mut bottle = Bottle::new(poured);
                bottle.orientation = POUR_ANGLE;
                if let Some(vessel) = coordinator.vessel_mut() {
                    bottle.pour_into(vessel);
                }
                Ok::<f32, BarError>(POUR_INTERVAL)
            },
        )?;
        self.pour_timer = timer;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::BarClock,
        config_reader::BarConfiguration,
        coordinator::{FlowEvent, Layout},
        economy::Ledger,
        menu::Menu,
        roster::Roster,
    };
    use rand::{ rngs::StdRng, SeedableRng };

    fn coordinator(config: BarConfiguration) -> Coordinator<Ledger> {
        let ledger = Ledger::new(1, config.contract_fee, BarClock::new(18));
        Coordinator::new(config, Layout::default(), Roster::default(), Menu::default(), ledger)
    }

    #[test]
    fn should_serve_perfect_drinks_without_mistakes() {
        let config = BarConfiguration {
            seed: Some(21),
            customer_limit: 0,
            ..BarConfiguration::default()
        };
        let mut coordinator = coordinator(config);
        let mut bartender = Bartender::new(0.0);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..600 {
            coordinator.tick(0.1).unwrap();
            bartender.work(0.1, &mut coordinator, &mut rng).unwrap();
        }
        let events = coordinator.drain_events();
        let served: Vec<&FlowEvent> = events
            .iter()
            .filter(|event| matches!(event, FlowEvent::Served { .. }))
            .collect();
        assert_eq!(false, served.is_empty());
        assert!(served
            .iter()
            .all(|event| matches!(event, FlowEvent::Served { score: 100, .. })));
        assert_eq!(0, coordinator.economy().failed());
        assert_eq!(true, coordinator.economy().cash() > 0);
    }

    #[test]
    fn should_consider_each_offer_once() {
        let config = BarConfiguration {
            seed: Some(4),
            reputation_threshold: -1,
            spawn_interval: (1000.0, 1000.0),
            ..BarConfiguration::default()
        };
        let mut coordinator = coordinator(config);
        let mut bartender = Bartender::new(0.0);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..300 {
            coordinator.tick(0.1).unwrap();
            bartender.work(0.1, &mut coordinator, &mut rng).unwrap();
        }
        let ledger = coordinator.economy();
        assert_eq!(1, ledger.contracts_accepted() + ledger.contracts_refused());
        assert_eq!(1, bartender.considered_offers.len());
    }
}
