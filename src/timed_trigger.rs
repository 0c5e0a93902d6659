//! Cuenta regresiva que dispara una accion cuando se cumple el tiempo y una condicion

/// Cada disparo devuelve el tiempo hasta el siguiente. Si la condicion no se cumple
/// la cuenta queda en cero esperando.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedTrigger {
    remaining: f32,
}

impl TimedTrigger {
    pub fn new(initial_delay: f32) -> TimedTrigger {
        TimedTrigger {
            remaining: initial_delay,
        }
    }

    /// Devuelve `Ok(true)` si la accion se ejecuto en este tick
    pub fn tick<C, A, E>(&mut self, delta: f32, condition: C, action: A) -> Result<bool, E>
    where
        C: FnOnce() -> bool,
        A: FnOnce() -> Result<f32, E>,
    {
        self.remaining -= delta;
        if self.remaining > 0.0 {
            return Ok(false);
        }
        if !condition() {
            self.remaining = 0.0;
            return Ok(false);
        }
        self.remaining = action()?;
        Ok(true)
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(trigger: &mut TimedTrigger, delta: f32, open: bool, next: f32) -> bool {
        trigger
            .tick(delta, || open, || Ok::<f32, ()>(next))
            .unwrap_or(false)
    }

    #[test]
    fn should_fire_once_the_countdown_expires() {
        let mut trigger = TimedTrigger::new(1.0);
        assert_eq!(false, fire(&mut trigger, 0.5, true, 3.0));
        assert_eq!(true, fire(&mut trigger, 0.5, true, 3.0));
        assert_eq!(3.0, trigger.remaining());
    }

    #[test]
    fn should_wait_for_the_condition_pinned_at_zero() {
        let mut trigger = TimedTrigger::new(0.0);
        for _ in 0..10 {
            assert_eq!(false, fire(&mut trigger, 1.0, false, 3.0));
            assert_eq!(0.0, trigger.remaining());
        }
        assert_eq!(true, fire(&mut trigger, 0.1, true, 3.0));
    }

    #[test]
    fn should_not_evaluate_anything_before_expiring() {
        let mut trigger = TimedTrigger::new(5.0);
        let mut evaluated = false;
        let fired = trigger
            .tick(
                1.0,
                || {
                    evaluated = true;
                    true
                },
                || Ok::<f32, ()>(1.0),
            )
            .unwrap_or(true);
        assert_eq!(false, fired);
        assert_eq!(false, evaluated);
        assert_eq!(4.0, trigger.remaining());
    }

    #[test]
    fn should_propagate_action_errors() {
        let mut trigger = TimedTrigger::new(0.0);
        let result = trigger.tick(0.1, || true, || Err::<f32, &str>("failed"));
        assert_eq!(Err("failed"), result);
    }

    #[test]
    fn should_keep_independent_state() {
        let mut customers = TimedTrigger::new(0.0);
        let mut sponsors = TimedTrigger::new(1.0);
        assert_eq!(true, fire(&mut customers, 0.1, true, 2.0));
        assert_eq!(false, fire(&mut sponsors, 0.1, true, 100.0));
        assert_eq!(2.0, customers.remaining());
        assert_eq!(true, (sponsors.remaining() - 0.9).abs() < 1e-6);
    }
}
