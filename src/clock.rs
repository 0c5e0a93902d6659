//! Reloj del bar. El dia avanza mas rapido mientras el bar esta abierto.
use crate::constants::{ CLOSING_HOUR, REOPENING_HOUR, SECONDS_PER_CLOSED_DAY, SECONDS_PER_OPEN_DAY };

#[derive(Debug, Clone)]
pub struct BarClock {
    /// Horas transcurridas desde la medianoche del primer dia
    elapsed_hours: f64,
    seconds_per_open_day: f32,
    seconds_per_closed_day: f32,
}

impl BarClock {
    pub fn new(starting_hour: u32) -> BarClock {
        BarClock {
            elapsed_hours: (starting_hour % 24) as f64,
            seconds_per_open_day: SECONDS_PER_OPEN_DAY,
            seconds_per_closed_day: SECONDS_PER_CLOSED_DAY,
        }
    }

    pub fn with_day_length(mut self, open: f32, closed: f32) -> BarClock {
        self.seconds_per_open_day = open;
        self.seconds_per_closed_day = closed;
        self
    }

    pub fn advance(&mut self, delta: f32) {
        let seconds_per_day = if self.is_open() {
            self.seconds_per_open_day
        } else {
            self.seconds_per_closed_day
        };
        if seconds_per_day > 0.0 {
            self.elapsed_hours += f64::from(delta) * 24.0 / f64::from(seconds_per_day);
        }
    }

    /// Abierto de noche: antes de las 4 o despues de las 10
    pub fn is_open(&self) -> bool {
        let hours = self.hours();
        hours < CLOSING_HOUR || hours > REOPENING_HOUR
    }

    pub fn hours(&self) -> u32 {
        (self.elapsed_hours % 24.0).floor() as u32
    }

    pub fn minutes(&self) -> u32 {
        (self.elapsed_hours.fract() * 60.0).floor() as u32
    }

    pub fn day(&self) -> u32 {
        (self.elapsed_hours / 24.0).floor() as u32
    }
}

impl Default for BarClock {
    fn default() -> Self {
        BarClock::new(18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_the_given_hour() {
        let clock = BarClock::new(18);
        assert_eq!(18, clock.hours());
        assert_eq!(0, clock.minutes());
        assert_eq!(0, clock.day());
        assert_eq!(true, clock.is_open());
    }

    #[test]
    fn should_be_closed_during_the_morning() {
        assert_eq!(true, BarClock::new(3).is_open());
        assert_eq!(false, BarClock::new(4).is_open());
        assert_eq!(false, BarClock::new(10).is_open());
        assert_eq!(true, BarClock::new(11).is_open());
    }

    #[test]
    fn should_advance_faster_while_open() {
        let mut open = BarClock::new(18);
        open.advance(5.0);
        assert_eq!(20, open.hours());
        assert_eq!(0, open.minutes());

        let mut closed = BarClock::new(5);
        closed.advance(5.0);
        assert_eq!(5, closed.hours());
        assert_eq!(24, closed.minutes());
    }

    #[test]
    fn should_use_custom_day_lengths() {
        let mut clock = BarClock::new(18).with_day_length(24.0, 240.0);
        clock.advance(1.5);
        assert_eq!(19, clock.hours());
        assert_eq!(30, clock.minutes());
    }

    #[test]
    fn should_count_days() {
        let mut clock = BarClock::new(23).with_day_length(24.0, 24.0);
        clock.advance(1.5);
        assert_eq!(1, clock.day());
        assert_eq!(0, clock.hours());
    }
}
