//! Ciclo de vida de un cliente: llega, pide, espera, es atendido y se va.
//!
//! El movimiento (`Motion`) y la atencion (`Phase`) son independientes: un cliente
//! puede estar esperando su trago mientras termina de acomodarse en la fila.
use log::{ debug, info };
use rand::Rng;

use crate::{
    constants::{SATISFACTION_HIGH, TIP_CHANCE, TIP_RANGE},
    errors::BarError,
    movement::{Motion, Position, Walker},
    order::{Order, Recipe},
    roster::CharacterKey,
    scorer::{is_satisfied, Mood},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Todavia no pidio o esta esperando turno
    Arriving,
    Waiting { elapsed: f32, patience: f32 },
    Served,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Patron {
    id: usize,
    key: CharacterKey,
    offset: f32,
    base_patience: f32,
    walker: Walker,
    phase: Phase,
    order: Option<Order>,
    satisfaction: i32,
    served_count: usize,
}

impl Patron {
    pub fn new(id: usize, key: CharacterKey, offset: f32, base_patience: f32, position: Position) -> Patron {
        Patron {
            id,
            key,
            offset,
            base_patience,
            walker: Walker::new(position),
            phase: Phase::Arriving,
            order: None,
            satisfaction: 0,
            served_count: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn key(&self) -> CharacterKey {
        self.key
    }

    /// Mitad del ancho del personaje
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn position(&self) -> Position {
        self.walker.position
    }

    pub fn motion(&self) -> Motion {
        self.walker.motion
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn satisfaction(&self) -> i32 {
        self.satisfaction
    }

    pub fn served_count(&self) -> usize {
        self.served_count
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.phase, Phase::Waiting { .. })
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    pub fn is_near(&self, destination: &Position, offset: f32, min_distance: f32) -> bool {
        self.walker.is_near(destination, offset, min_distance)
    }

    pub fn move_to(&mut self, destination: Position, offset: f32, min_distance: f32) {
        if self.walker.move_to(destination, offset, min_distance) {
            debug!("[PATRON {}] Walking to ({:.1}, {:.1})", self.id, destination.x, destination.y);
        }
    }

    /// Avanza la espera y luego el movimiento
    pub fn update(&mut self, delta: f32, speed: f32) {
        self.step_wait(delta);
        self.walker.step(delta, speed);
    }

    fn step_wait(&mut self, delta: f32) {
        if let Phase::Waiting { elapsed, patience } = self.phase {
            let elapsed = elapsed + delta;
            if elapsed < patience {
                self.phase = Phase::Waiting { elapsed, patience };
                return;
            }
            info!("[PATRON {}] Ran out of patience after {:.1}s", self.id, elapsed);
            self.phase = Phase::Exhausted;
        }
    }

    pub fn ask_order<F>(&mut self, build: F) -> Result<&Order, BarError>
    where
        F: FnOnce() -> Order,
    {
        if self.order.is_some() {
            return Err(BarError::OrderAlreadyTaken);
        }
        let order = self.order.insert(build());
        debug!("[PATRON {}] Orders {} recipe(s) for ${}", self.id, order.recipe_count(), order.price());
        Ok(order)
    }

    /// Empieza a esperar el pedido. Mayor dificultad, menos paciencia.
    pub fn begin_wait(&mut self, difficulty: u32) -> Result<(), BarError> {
        match self.phase {
            Phase::Waiting { .. } => return Err(BarError::AlreadyWaiting),
            Phase::Served | Phase::Exhausted => return Err(BarError::InvalidTransition),
            Phase::Arriving => {}
        }
        if self.order.is_none() {
            return Err(BarError::NoOrder);
        }
        let patience = self.base_patience / difficulty.max(1) as f32;
        self.phase = Phase::Waiting { elapsed: 0.0, patience };
        Ok(())
    }

    /// Recibe un trago. Deja de esperar cuando se entregaron todos los del pedido.
    pub fn serve(&mut self, actual: &Recipe) -> Result<i32, BarError> {
        if !self.is_waiting() {
            return Err(BarError::NotWaiting);
        }
        let order = self.order.as_mut().ok_or(BarError::NoOrder)?;
        let score = order.take_best_match(actual).ok_or(BarError::NoOrder)?;
        self.served_count += 1;
        self.satisfaction = order.satisfaction();
        if order.is_complete() {
            self.phase = Phase::Served;
        }
        debug!("[PATRON {}] Served with score {}, satisfaction {}", self.id, score, self.satisfaction);
        Ok(score)
    }

    pub fn is_satisfied(&self) -> bool {
        is_satisfied(self.satisfaction)
    }

    pub fn mood(&self) -> Mood {
        Mood::from_satisfaction(self.satisfaction)
    }

    /// Lo que paga el cliente: nada si no quedo conforme, el precio del pedido
    /// y a veces propina si quedo muy conforme.
    pub fn pay<R: Rng>(&self, rng: &mut R) -> u32 {
        if !self.is_satisfied() {
            return 0;
        }
        let price = self.order.as_ref().map(|order| order.price()).unwrap_or(0);
        let tip = if self.satisfaction > SATISFACTION_HIGH && rng.gen_bool(TIP_CHANCE) {
            rng.gen_range(TIP_RANGE.0, TIP_RANGE.1)
        } else {
            0
        };
        price + tip
    }

    /// Fraccion de paciencia restante, para la barra de espera
    pub fn patience_left(&self) -> f32 {
        match self.phase {
            Phase::Waiting { elapsed, patience } if patience > 0.0 => (1.0 - elapsed / patience).max(0.0),
            Phase::Exhausted => 0.0,
            _ => 1.0,
        }
    }

    pub fn leave_to(&mut self, exit: Position) {
        info!("[PATRON {}] Leaving {:?}", self.id, self.mood());
        self.walker.move_to(exit, 0.0, 0.0);
    }
}
