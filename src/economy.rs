//! Caja, reputacion y horario del bar
use log::{ debug, info };

use crate::{ clock::BarClock, patron::Patron };

/// Lo que el coordinador necesita saber y avisar sobre el negocio
pub trait Economy {
    fn reputation(&self) -> i32;
    fn bar_is_open(&self) -> bool;
    fn difficulty(&self) -> u32;
    fn increment_success(&mut self, patron: &Patron, cash: u32);
    fn increment_failure(&mut self, patron: &Patron);
    fn record_contract(&mut self, accepted: bool);
    fn advance(&mut self, _delta: f32) {}
}

#[derive(Debug, Clone)]
pub struct Ledger {
    cash: u32,
    reputation: i32,
    difficulty: u32,
    contract_fee: u32,
    served: u32,
    failed: u32,
    contracts_accepted: u32,
    contracts_refused: u32,
    clock: BarClock,
}

impl Ledger {
    pub fn new(difficulty: u32, contract_fee: u32, clock: BarClock) -> Ledger {
        Ledger {
            cash: 0,
            reputation: 0,
            difficulty: difficulty.max(1),
            contract_fee,
            served: 0,
            failed: 0,
            contracts_accepted: 0,
            contracts_refused: 0,
            clock,
        }
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    pub fn served(&self) -> u32 {
        self.served
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn contracts_accepted(&self) -> u32 {
        self.contracts_accepted
    }

    pub fn contracts_refused(&self) -> u32 {
        self.contracts_refused
    }

    pub fn clock(&self) -> &BarClock {
        &self.clock
    }
}

impl Economy for Ledger {
    fn reputation(&self) -> i32 {
        self.reputation
    }

    fn bar_is_open(&self) -> bool {
        self.clock.is_open()
    }

    fn difficulty(&self) -> u32 {
        self.difficulty
    }

    fn increment_success(&mut self, patron: &Patron, cash: u32) {
        self.cash += cash;
        self.reputation += 1;
        self.served += 1;
        debug!(
            "[LEDGER] Patron {} ({:?}) paid ${}, reputation {}",
            patron.id(),
            patron.key(),
            cash,
            self.reputation
        );
    }

    fn increment_failure(&mut self, patron: &Patron) {
        self.reputation = (self.reputation - 1).max(0);
        self.failed += 1;
        debug!(
            "[LEDGER] Patron {} ({:?}) left unhappy, reputation {}",
            patron.id(),
            patron.key(),
            self.reputation
        );
    }

    fn record_contract(&mut self, accepted: bool) {
        if accepted {
            self.cash += self.contract_fee;
            self.contracts_accepted += 1;
            info!("[LEDGER] Sponsor contract signed, +${}", self.contract_fee);
        } else {
            self.contracts_refused += 1;
        }
    }

    fn advance(&mut self, delta: f32) {
        let was_open = self.clock.is_open();
        self.clock.advance(delta);
        if was_open != self.clock.is_open() {
            info!(
                "[LEDGER] Day {} {:02}:{:02}, bar is now {}",
                self.clock.day(),
                self.clock.hours(),
                self.clock.minutes(),
                if self.clock.is_open() { "open" } else { "closed" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ movement::Position, roster::CharacterKey };

    fn patron() -> Patron {
        Patron::new(1, CharacterKey::Clerk, 0.5, 10.0, Position::default())
    }

    #[test]
    fn should_add_cash_and_reputation_on_success() {
        let mut ledger = Ledger::new(1, 50, BarClock::default());
        ledger.increment_success(&patron(), 7);
        assert_eq!(7, ledger.cash());
        assert_eq!(1, ledger.reputation());
        assert_eq!(1, ledger.served());
    }

    #[test]
    fn should_never_drop_reputation_below_zero() {
        let mut ledger = Ledger::new(1, 50, BarClock::default());
        ledger.increment_failure(&patron());
        ledger.increment_failure(&patron());
        assert_eq!(0, ledger.reputation());
        assert_eq!(2, ledger.failed());
    }

    #[test]
    fn should_charge_the_fee_only_for_accepted_contracts() {
        let mut ledger = Ledger::new(1, 50, BarClock::default());
        ledger.record_contract(false);
        ledger.record_contract(true);
        assert_eq!(50, ledger.cash());
        assert_eq!(1, ledger.contracts_accepted());
        assert_eq!(1, ledger.contracts_refused());
    }

    #[test]
    fn should_close_when_the_clock_says_so() {
        let mut ledger = Ledger::new(0, 0, BarClock::new(3).with_day_length(24.0, 24.0));
        assert_eq!(true, ledger.bar_is_open());
        assert_eq!(1, ledger.difficulty());
        ledger.advance(1.0);
        assert_eq!(false, ledger.bar_is_open());
    }
}
