pub mod bartender;
pub mod clock;
pub mod config_reader;
pub mod constants;
pub mod coordinator;
pub mod economy;
pub mod errors;
pub mod menu;
pub mod movement;
pub mod order;
pub mod patron;
pub mod roster;
pub mod scorer;
pub mod sponsor;
pub mod statistics;
pub mod timed_trigger;
pub mod vessel;

use log::{ debug, error, info, LevelFilter };
use rand::{ rngs::StdRng, SeedableRng };
use simple_logger::SimpleLogger;

use bartender::Bartender;
use clock::BarClock;
use config_reader::read_configuration;
use constants::TICK_DELTA;
use coordinator::{ Coordinator, Layout };
use economy::Ledger;
use errors::BarError;
use statistics::{ print_statistics, StatisticsPrinter };

const DEFAULT_CONFIGURATION: &str = "bar.json";

fn run(path: &str) -> Result<(), BarError> {
    let config = read_configuration(path)?;
    let delta = if config.tick_delta > 0.0 { config.tick_delta } else { TICK_DELTA };
    let ticks = (config.simulation_seconds / delta) as usize;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let ledger = Ledger::new(config.difficulty, config.contract_fee, BarClock::new(config.opening_hour));
    let mut bartender = Bartender::new(config.bartender_mistake_chance);
    let mut statistics = StatisticsPrinter::new(config.statistics_interval);
    let mut coordinator = Coordinator::new(config.clone(), Layout::default(), config.roster(), config.menu(), ledger);

    info!("[MAIN] Opening the bar for {:.0} simulated seconds", config.simulation_seconds);
    for _ in 0..ticks {
        coordinator.tick(delta)?;
        bartender.work(delta, &mut coordinator, &mut rng)?;
        for event in coordinator.drain_events() {
            debug!("[MAIN] {:?}", event);
        }
        statistics.tick(delta, &coordinator);
    }
    print_statistics(&coordinator);
    Ok(())
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string());
    if let Err(err) = run(&path) {
        error!("[MAIN] {}", err);
        std::process::exit(1);
    }
}
