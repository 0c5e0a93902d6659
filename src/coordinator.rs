//! Coordinador del flujo de visitantes.
//!
//! Maneja la fila de llegada, la fila de salida, la aparicion de clientes y sponsors,
//! la toma de pedidos y la entrega del vaso. Todo avanza en `tick`, en este orden:
//! personajes, fila de llegada, fila de salida, sponsors y apariciones.
use std::collections::VecDeque;

use log::{ debug, info, warn };
use rand::{ rngs::StdRng, Rng, SeedableRng };

use crate::{
    config_reader::BarConfiguration,
    economy::Economy,
    errors::BarError,
    menu::Menu,
    movement::Position,
    patron::Patron,
    roster::{CharacterKey, Roster},
    sponsor::{ContractDecision, Sponsor, SponsorStage, SponsorUpdate},
    timed_trigger::TimedTrigger,
    vessel::Vessel,
};

/// Altura extra a la que aparecen los sponsors
const SPONSOR_HEIGHT: f32 = 5.0;

/// Puntos fijos de la escena
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub spawn: Position,
    pub counter: Position,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            spawn: Position::new(-16.0, 0.0),
            counter: Position::new(0.0, 0.0),
        }
    }
}

/// Avisos para la capa de sonido y dibujo
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    CustomerArrived { patron: usize, key: CharacterKey },
    OrderPlaced { patron: usize, recipes: usize, price: u32 },
    Served { patron: usize, score: i32 },
    OrderResolved { patron: usize, satisfied: bool, cash: u32 },
    Exhausted { patron: usize },
    Leaving { patron: usize, satisfied: bool },
    Departed { patron: usize },
    SponsorArrived { sponsor: usize },
    ContractOffered { sponsor: usize },
    ContractResolved { sponsor: usize, accepted: bool },
    SponsorDeparted { sponsor: usize },
}

/// Resultado de entregar un vaso
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivery {
    pub score: i32,
    pub complete: bool,
    pub satisfied: bool,
    pub cash: u32,
}

/// El unico vaso en juego y el cliente para el que se esta sirviendo
#[derive(Debug, Clone)]
pub struct ActiveVessel {
    pub owner: usize,
    pub vessel: Vessel,
}

pub struct Coordinator<E: Economy> {
    config: BarConfiguration,
    layout: Layout,
    roster: Roster,
    menu: Menu,
    economy: E,
    rng: StdRng,
    queue: VecDeque<Patron>,
    departing: VecDeque<Patron>,
    sponsors: Vec<Sponsor>,
    vessel: Option<ActiveVessel>,
    customer_spawn: TimedTrigger,
    sponsor_spawn: TimedTrigger,
    next_id: usize,
    events: Vec<FlowEvent>,
}

impl<E: Economy> Coordinator<E> {
    pub fn new(config: BarConfiguration, layout: Layout, roster: Roster, menu: Menu, economy: E) -> Coordinator<E> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Coordinator {
            customer_spawn: TimedTrigger::new(0.0),
            sponsor_spawn: TimedTrigger::new(config.sponsor_initial_delay),
            config,
            layout,
            roster,
            menu,
            economy,
            rng,
            queue: VecDeque::new(),
            departing: VecDeque::new(),
            sponsors: Vec::new(),
            vessel: None,
            next_id: 0,
            events: Vec::new(),
        }
    }

    pub fn tick(&mut self, delta: f32) -> Result<(), BarError> {
        self.economy.advance(delta);
        self.step_characters(delta);
        self.update_queue()?;
        self.update_leaving();
        self.update_sponsors(delta);
        self.update_spawn(delta)
    }

    fn step_characters(&mut self, delta: f32) {
        let speed = self.config.walk_speed;
        for patron in self.queue.iter_mut() {
            let was_waiting = patron.is_waiting();
            patron.update(delta, speed);
            if was_waiting && patron.is_exhausted() {
                self.events.push(FlowEvent::Exhausted { patron: patron.id() });
            }
        }
        for patron in self.departing.iter_mut() {
            patron.update(delta, speed);
        }
        if let Some(active) = self.vessel.as_mut() {
            active.vessel.update();
        }
    }

    /// Recorre la fila desde el ultimo en llegar hasta el primero
    fn update_queue(&mut self) -> Result<(), BarError> {
        let counter = self.layout.counter;
        let mut index = self.queue.len();
        while index > 0 {
            index -= 1;
            let leader = if index == 0 {
                None
            } else {
                Some(self.queue[index - 1].position())
            };
            let patron = &mut self.queue[index];
            let offset = -patron.offset();
            match leader {
                None => patron.move_to(counter, offset, self.config.min_distance),
                Some(leader) => patron.move_to(leader, offset, self.config.min_distance),
            }

            if patron.is_exhausted() {
                let id = patron.id();
                self.economy.increment_failure(patron);
                self.leave(id)?;
                continue;
            }

            if !patron.has_order() && patron.is_near(&counter, offset, self.config.max_distance) {
                self.take_order(index)?;
            }
        }
        self.ensure_vessel();
        Ok(())
    }

    fn take_order(&mut self, index: usize) -> Result<(), BarError> {
        let order = self.menu.random_order(&mut self.rng)?;
        let difficulty = self.economy.difficulty();
        let patron = &mut self.queue[index];
        let (recipes, price) = {
            let order = patron.ask_order(|| order)?;
            (order.recipe_count(), order.price())
        };
        patron.begin_wait(difficulty)?;
        info!(
            "[COORDINATOR] Patron {} ordered {} recipe(s) for ${}",
            patron.id(),
            recipes,
            price
        );
        self.events.push(FlowEvent::OrderPlaced {
            patron: patron.id(),
            recipes,
            price,
        });
        Ok(())
    }

    /// Si no hay vaso en juego, se prepara uno para el primer cliente que espera
    fn ensure_vessel(&mut self) {
        if self.vessel.is_some() {
            return;
        }
        if let Some(patron) = self.queue.iter().find(|patron| patron.is_waiting()) {
            self.allocate_vessel(patron.id());
        }
    }

    fn allocate_vessel(&mut self, owner: usize) {
        debug!("[VESSEL] New vessel for patron {}", owner);
        self.vessel = Some(ActiveVessel {
            owner,
            vessel: Vessel::new(self.config.vessel_capacity, self.config.vessel_step),
        });
    }

    fn dispose_vessel(&mut self) {
        if let Some(active) = self.vessel.take() {
            debug!(
                "[VESSEL] Disposed vessel of patron {} ({} unit(s) spilled)",
                active.owner,
                active.vessel.spilled()
            );
        }
    }

    /// Solo se revisa el primero de la fila de salida
    fn update_leaving(&mut self) {
        while let Some(head) = self.departing.front() {
            if !head.is_near(&self.layout.spawn, 0.0, self.config.min_distance) {
                break;
            }
            if let Some(patron) = self.departing.pop_front() {
                debug!("[COORDINATOR] Patron {} left the bar", patron.id());
                self.events.push(FlowEvent::Departed { patron: patron.id() });
            }
        }
    }

    fn update_sponsors(&mut self, delta: f32) {
        for sponsor in self.sponsors.iter_mut() {
            match sponsor.update(delta, self.config.walk_speed, self.config.contract_window) {
                Some(SponsorUpdate::OfferShown) => {
                    self.events.push(FlowEvent::ContractOffered { sponsor: sponsor.id() });
                }
                Some(SponsorUpdate::TimedOut) => {
                    self.economy.record_contract(false);
                    self.events.push(FlowEvent::ContractResolved {
                        sponsor: sponsor.id(),
                        accepted: false,
                    });
                }
                Some(SponsorUpdate::Departed) => {
                    self.events.push(FlowEvent::SponsorDeparted { sponsor: sponsor.id() });
                }
                None => {}
            }
        }
        self.sponsors.retain(|sponsor| sponsor.stage() != SponsorStage::Gone);
    }

    fn update_spawn(&mut self, delta: f32) -> Result<(), BarError> {
        let open = self.economy.bar_is_open();
        let room = self.queue.len() <= self.config.customer_limit;
        let mut customers = self.customer_spawn;
        customers.tick(delta, || open && room, || self.spawn_customer())?;
        self.customer_spawn = customers;

        let reputable = self.economy.reputation() > self.config.reputation_threshold;
        let mut sponsors = self.sponsor_spawn;
        sponsors.tick(delta, || reputable, || self.spawn_sponsor())?;
        self.sponsor_spawn = sponsors;
        Ok(())
    }

    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn spawn_customer(&mut self) -> Result<f32, BarError> {
        let key = self.config.spawn_policy.choose(&mut self.rng);
        let offset = self.roster.profile(key)?.offset;
        let id = self.next_id();
        let patron = Patron::new(id, key, offset, self.config.base_patience, self.layout.spawn);
        info!("[COORDINATOR] Patron {} ({:?}) arrived", id, key);
        self.queue.push_back(patron);
        self.events.push(FlowEvent::CustomerArrived { patron: id, key });

        let (low, high) = self.config.spawn_interval;
        if high > low {
            Ok(self.rng.gen_range(low, high))
        } else {
            Ok(low)
        }
    }

    fn spawn_sponsor(&mut self) -> Result<f32, BarError> {
        let offset = self.roster.profile(CharacterKey::Sponsor)?.offset;
        let id = self.next_id();
        let spawn = self.layout.spawn;
        let mut sponsor = Sponsor::new(id, Position::new(spawn.x, spawn.y + SPONSOR_HEIGHT), spawn);
        sponsor.approach(self.layout.counter, -offset, self.config.min_distance);
        info!("[COORDINATOR] Sponsor {} is coming", id);
        self.sponsors.push(sponsor);
        self.events.push(FlowEvent::SponsorArrived { sponsor: id });
        Ok(self.config.sponsor_interval)
    }

    fn queue_index(&self, patron_id: usize) -> Result<usize, BarError> {
        self.queue
            .iter()
            .position(|patron| patron.id() == patron_id)
            .ok_or(BarError::PatronNotInQueue(patron_id))
    }

    /// El vaso llego al cliente: se compara con el pedido, se cobra y el cliente se va.
    /// Si el pedido tiene mas tragos, el mismo vaso se vacia y sigue siendo de ese cliente.
    pub fn deliver(&mut self, patron_id: usize) -> Result<Delivery, BarError> {
        let index = self.queue_index(patron_id)?;
        let actual = self
            .vessel
            .as_ref()
            .ok_or(BarError::NoVesselInFlight)?
            .vessel
            .to_recipe();
        let score = self.queue[index].serve(&actual)?;
        self.events.push(FlowEvent::Served {
            patron: patron_id,
            score,
        });

        let patron = &self.queue[index];
        let satisfied = patron.is_satisfied();
        if patron.is_waiting() {
            if let Some(active) = self.vessel.as_mut() {
                active.vessel.reset();
            }
            debug!("[VESSEL] Vessel of patron {} emptied for the next recipe", patron_id);
            return Ok(Delivery {
                score,
                complete: false,
                satisfied,
                cash: 0,
            });
        }

        let cash = if satisfied {
            let cash = patron.pay(&mut self.rng);
            self.economy.increment_success(patron, cash);
            cash
        } else {
            self.economy.increment_failure(patron);
            0
        };
        info!(
            "[COORDINATOR] Patron {} served with satisfaction {}, paid ${}",
            patron_id,
            patron.satisfaction(),
            cash
        );
        self.events.push(FlowEvent::OrderResolved {
            patron: patron_id,
            satisfied,
            cash,
        });
        self.leave(patron_id)?;
        Ok(Delivery {
            score,
            complete: true,
            satisfied,
            cash,
        })
    }

    /// Saca al cliente de la fila y lo manda a la salida
    pub fn leave(&mut self, patron_id: usize) -> Result<(), BarError> {
        let index = self.queue_index(patron_id)?;
        let mut patron = self
            .queue
            .remove(index)
            .ok_or(BarError::PatronNotInQueue(patron_id))?;
        let satisfied = patron.is_satisfied();
        patron.leave_to(self.layout.spawn);
        if self.vessel_owner() == Some(patron_id) {
            self.dispose_vessel();
        }
        self.events.push(FlowEvent::Leaving {
            patron: patron_id,
            satisfied,
        });
        self.departing.push_back(patron);
        Ok(())
    }

    pub fn accept_contract(&mut self, sponsor_id: usize) -> Result<bool, BarError> {
        self.resolve_contract(sponsor_id, ContractDecision::Accepted)
    }

    pub fn refuse_contract(&mut self, sponsor_id: usize) -> Result<bool, BarError> {
        self.resolve_contract(sponsor_id, ContractDecision::Refused)
    }

    fn resolve_contract(&mut self, sponsor_id: usize, decision: ContractDecision) -> Result<bool, BarError> {
        let sponsor = self
            .sponsors
            .iter_mut()
            .find(|sponsor| sponsor.id() == sponsor_id)
            .ok_or(BarError::SponsorNotFound(sponsor_id))?;
        if !sponsor.decide(decision) {
            warn!("[SPONSOR {}] Contract was already answered", sponsor_id);
            return Ok(false);
        }
        let accepted = decision == ContractDecision::Accepted;
        self.economy.record_contract(accepted);
        self.events.push(FlowEvent::ContractResolved {
            sponsor: sponsor_id,
            accepted,
        });
        Ok(true)
    }

    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn queue(&self) -> &VecDeque<Patron> {
        &self.queue
    }

    pub fn departing(&self) -> &VecDeque<Patron> {
        &self.departing
    }

    pub fn sponsors(&self) -> &[Sponsor] {
        &self.sponsors
    }

    pub fn patron(&self, patron_id: usize) -> Option<&Patron> {
        self.queue
            .iter()
            .chain(self.departing.iter())
            .find(|patron| patron.id() == patron_id)
    }

    pub fn vessel(&self) -> Option<&Vessel> {
        self.vessel.as_ref().map(|active| &active.vessel)
    }

    pub fn vessel_mut(&mut self) -> Option<&mut Vessel> {
        self.vessel.as_mut().map(|active| &mut active.vessel)
    }

    pub fn vessel_owner(&self) -> Option<usize> {
        self.vessel.as_ref().map(|active| active.owner)
    }

    pub fn economy(&self) -> &E {
        &self.economy
    }

    pub fn customer_countdown(&self) -> f32 {
        self.customer_spawn.remaining()
    }
}
