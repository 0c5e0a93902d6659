//! Sponsors: llegan a la barra, ofrecen un contrato y se van.
//!
//! La respuesta al contrato puede venir de los botones o del vencimiento del plazo;
//! la primera que llega gana y las demas no tienen efecto.
use log::{ debug, info };

use crate::movement::{ Position, Walker };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractDecision {
    Accepted,
    Refused,
}

/// Decision que se resuelve una sola vez
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractOffer {
    decision: Option<ContractDecision>,
}

impl ContractOffer {
    /// Devuelve false si ya estaba resuelta
    pub fn resolve(&mut self, decision: ContractDecision) -> bool {
        if self.decision.is_some() {
            return false;
        }
        self.decision = Some(decision);
        true
    }

    pub fn decision(&self) -> Option<ContractDecision> {
        self.decision
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SponsorStage {
    Approaching,
    Offering { remaining: f32 },
    Leaving,
    Gone,
}

/// Lo que paso con el sponsor en un tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SponsorUpdate {
    OfferShown,
    TimedOut,
    Departed,
}

#[derive(Debug, Clone)]
pub struct Sponsor {
    id: usize,
    walker: Walker,
    exit: Position,
    stage: SponsorStage,
    offer: ContractOffer,
}

impl Sponsor {
    pub fn new(id: usize, position: Position, exit: Position) -> Sponsor {
        Sponsor {
            id,
            walker: Walker::new(position),
            exit,
            stage: SponsorStage::Approaching,
            offer: ContractOffer::default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Position {
        self.walker.position
    }

    pub fn stage(&self) -> SponsorStage {
        self.stage
    }

    pub fn decision(&self) -> Option<ContractDecision> {
        self.offer.decision()
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.stage, SponsorStage::Leaving | SponsorStage::Gone)
    }

    pub fn is_offering(&self) -> bool {
        matches!(self.stage, SponsorStage::Offering { .. })
    }

    pub fn approach(&mut self, counter: Position, offset: f32, min_distance: f32) {
        self.walker.move_to(counter, offset, min_distance);
    }

    pub fn update(&mut self, delta: f32, speed: f32, contract_window: f32) -> Option<SponsorUpdate> {
        match self.stage {
            SponsorStage::Approaching => {
                let arrived = self.walker.step(delta, speed) || !self.walker.is_moving();
                if !arrived {
                    return None;
                }
                info!("[SPONSOR {}] Offering a contract", self.id);
                self.stage = SponsorStage::Offering {
                    remaining: contract_window,
                };
                Some(SponsorUpdate::OfferShown)
            }
            SponsorStage::Offering { remaining } => {
                let remaining = remaining - delta;
                if remaining > 0.0 {
                    self.stage = SponsorStage::Offering { remaining };
                    return None;
                }
                if !self.offer.resolve(ContractDecision::Refused) {
                    return None;
                }
                info!("[SPONSOR {}] No answer, contract refused", self.id);
                self.leave();
                Some(SponsorUpdate::TimedOut)
            }
            SponsorStage::Leaving => {
                let arrived = self.walker.step(delta, speed) || !self.walker.is_moving();
                if !arrived {
                    return None;
                }
                self.stage = SponsorStage::Gone;
                Some(SponsorUpdate::Departed)
            }
            SponsorStage::Gone => None,
        }
    }

    /// Responde el contrato. Si todavia no llego a la barra, la visita se corta sin oferta.
    pub fn decide(&mut self, decision: ContractDecision) -> bool {
        if !self.offer.resolve(decision) {
            return false;
        }
        if self.stage == SponsorStage::Approaching {
            debug!("[SPONSOR {}] Visit cancelled before reaching the bar", self.id);
        }
        self.leave();
        true
    }

    /// Empieza a irse. Pedirlo de nuevo no tiene efecto.
    pub fn leave(&mut self) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.stage = SponsorStage::Leaving;
        self.walker.stop();
        self.walker.move_to(self.exit, 0.0, 0.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: Position = Position { x: 0.0, y: 0.0 };
    const EXIT: Position = Position { x: -10.0, y: 5.0 };

    fn sponsor() -> Sponsor {
        let mut sponsor = Sponsor::new(1, EXIT, EXIT);
        sponsor.approach(COUNTER, -0.5, 2.0);
        sponsor
    }

    fn run_until_offer(sponsor: &mut Sponsor) {
        for _ in 0..100 {
            if sponsor.update(0.1, 5.0, 5.0) == Some(SponsorUpdate::OfferShown) {
                return;
            }
        }
        panic!("sponsor never reached the bar");
    }

    #[test]
    fn should_resolve_an_offer_only_once() {
        let mut offer = ContractOffer::default();
        assert_eq!(true, offer.resolve(ContractDecision::Accepted));
        assert_eq!(false, offer.resolve(ContractDecision::Refused));
        assert_eq!(Some(ContractDecision::Accepted), offer.decision());
    }

    #[test]
    fn should_offer_once_at_the_bar() {
        let mut sponsor = sponsor();
        assert_eq!(SponsorStage::Approaching, sponsor.stage());
        run_until_offer(&mut sponsor);
        assert_eq!(true, sponsor.is_offering());
    }

    #[test]
    fn should_refuse_when_the_window_expires() {
        let mut sponsor = sponsor();
        run_until_offer(&mut sponsor);
        assert_eq!(None, sponsor.update(4.0, 5.0, 5.0));
        assert_eq!(Some(SponsorUpdate::TimedOut), sponsor.update(1.0, 5.0, 5.0));
        assert_eq!(Some(ContractDecision::Refused), sponsor.decision());
        assert_eq!(SponsorStage::Leaving, sponsor.stage());
    }

    #[test]
    fn should_ignore_the_timeout_after_an_answer() {
        let mut sponsor = sponsor();
        run_until_offer(&mut sponsor);
        assert_eq!(true, sponsor.decide(ContractDecision::Accepted));
        assert_eq!(false, sponsor.decide(ContractDecision::Refused));
        for _ in 0..100 {
            assert_ne!(Some(SponsorUpdate::TimedOut), sponsor.update(0.1, 5.0, 5.0));
        }
        assert_eq!(Some(ContractDecision::Accepted), sponsor.decision());
        assert_eq!(SponsorStage::Gone, sponsor.stage());
    }

    #[test]
    fn should_abort_silently_when_answered_on_the_way() {
        let mut sponsor = sponsor();
        assert_eq!(true, sponsor.decide(ContractDecision::Refused));
        for _ in 0..100 {
            assert_ne!(Some(SponsorUpdate::OfferShown), sponsor.update(0.1, 5.0, 5.0));
        }
        assert_eq!(SponsorStage::Gone, sponsor.stage());
    }

    #[test]
    fn should_leave_only_once() {
        let mut sponsor = sponsor();
        assert_eq!(true, sponsor.leave());
        assert_eq!(false, sponsor.leave());
        assert_eq!(None, sponsor.decision());
    }
}
