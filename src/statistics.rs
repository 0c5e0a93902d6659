//! Estadisticas del bar que se imprimen cada cierto tiempo
use log::info;

use crate::{
    coordinator::Coordinator,
    economy::{Economy, Ledger},
    timed_trigger::TimedTrigger,
};

pub struct StatisticsPrinter {
    interval: f32,
    timer: TimedTrigger,
}

impl StatisticsPrinter {
    pub fn new(interval: f32) -> StatisticsPrinter {
        StatisticsPrinter {
            interval,
            timer: TimedTrigger::new(interval),
        }
    }

    /// Imprime si paso el intervalo. Devuelve true si imprimio.
    pub fn tick(&mut self, delta: f32, coordinator: &Coordinator<Ledger>) -> bool {
        let interval = self.interval;
        self.timer
            .tick(delta, || true, || {
                print_statistics(coordinator);
                Ok::<f32, ()>(interval)
            })
            .unwrap_or(false)
    }
}

pub fn print_statistics(coordinator: &Coordinator<Ledger>) {
    info!("{}", statistics_line(coordinator));
}

pub fn statistics_line(coordinator: &Coordinator<Ledger>) -> String {
    let ledger = coordinator.economy();
    let clock = ledger.clock();
    let mut statistics = format!(
        "[STATISTICS] Day {} {:02}:{:02} ({}) | Cash=${} | Reputation={} |",
        clock.day(),
        clock.hours(),
        clock.minutes(),
        if ledger.bar_is_open() { "open" } else { "closed" },
        ledger.cash(),
        ledger.reputation()
    );
    statistics.push_str(&format!(
        " Served={} Failed={} | Queue={} Leaving={} Next customer in {:.1}s | Contracts=(accepted {}, refused {})",
        ledger.served(),
        ledger.failed(),
        coordinator.queue().len(),
        coordinator.departing().len(),
        coordinator.customer_countdown(),
        ledger.contracts_accepted(),
        ledger.contracts_refused()
    ));
    statistics
}
