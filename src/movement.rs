//! Posiciones y desplazamiento de los personajes

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Position {
        Position { x, y }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Avanza hacia `target` como mucho `max_step`, sin pasarse
    pub fn move_towards(&self, target: &Position, max_step: f32) -> Position {
        let distance = self.distance(target);
        if distance <= max_step || distance == 0.0 {
            return *target;
        }
        Position {
            x: self.x + (target.x - self.x) / distance * max_step,
            y: self.y + (target.y - self.y) / distance * max_step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Idle,
    Moving {
        /// Punto pedido por quien ordeno el movimiento
        target: Position,
        /// Punto real al que se camina (con el desplazamiento aplicado)
        destination: Position,
        min_distance: f32,
    },
}

/// Cuerpo que camina sobre la escena: posicion actual y movimiento en curso
#[derive(Debug, Clone)]
pub struct Walker {
    pub position: Position,
    pub motion: Motion,
}

impl Walker {
    pub fn new(position: Position) -> Walker {
        Walker {
            position,
            motion: Motion::Idle,
        }
    }

    /// Aplica el desplazamiento horizontal y mantiene la altura propia
    fn normalize(&self, destination: &Position, offset: f32) -> Position {
        Position::new(destination.x + offset, self.position.y)
    }

    pub fn is_near(&self, destination: &Position, offset: f32, min_distance: f32) -> bool {
        self.position.distance(&self.normalize(destination, offset)) <= min_distance
    }

    /// Devuelve true si empezo a moverse hacia el destino
    pub fn move_to(&mut self, destination: Position, offset: f32, min_distance: f32) -> bool {
        if let Motion::Moving { target, .. } = self.motion {
            if target == destination {
                return false;
            }
        }
        if self.is_near(&destination, offset, min_distance) {
            return false;
        }
        self.motion = Motion::Moving {
            target: destination,
            destination: self.normalize(&destination, offset),
            min_distance,
        };
        true
    }

    /// Devuelve true en el tick en que llega a destino
    pub fn step(&mut self, delta: f32, speed: f32) -> bool {
        match self.motion {
            Motion::Idle => false,
            Motion::Moving {
                destination,
                min_distance,
                ..
            } => {
                if self.position.distance(&destination) > min_distance {
                    self.position = self.position.move_towards(&destination, speed * delta);
                    false
                } else {
                    self.motion = Motion::Idle;
                    true
                }
            }
        }
    }

    pub fn stop(&mut self) {
        self.motion = Motion::Idle;
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Moving { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_overshoot_the_target() {
        let origin = Position::new(0.0, 0.0);
        let target = Position::new(1.0, 0.0);
        assert_eq!(target, origin.move_towards(&target, 5.0));
        assert_eq!(Position::new(0.5, 0.0), origin.move_towards(&target, 0.5));
    }

    #[test]
    fn should_not_move_when_already_near() {
        let mut walker = Walker::new(Position::new(0.0, 0.0));
        assert_eq!(false, walker.move_to(Position::new(1.0, 0.0), 0.0, 2.0));
        assert_eq!(Motion::Idle, walker.motion);
    }

    #[test]
    fn should_walk_until_near_and_then_stop() {
        let mut walker = Walker::new(Position::new(-10.0, 0.0));
        assert_eq!(true, walker.move_to(Position::new(0.0, 0.0), -1.0, 2.0));
        assert_eq!(false, walker.move_to(Position::new(0.0, 0.0), -1.0, 2.0));
        let mut arrived = false;
        for _ in 0..100 {
            if walker.step(0.1, 5.0) {
                arrived = true;
                break;
            }
        }
        assert_eq!(true, arrived);
        assert_eq!(false, walker.is_moving());
        assert_eq!(true, walker.is_near(&Position::new(0.0, 0.0), -1.0, 2.0));
    }

    #[test]
    fn should_keep_its_own_height() {
        let mut walker = Walker::new(Position::new(-10.0, 5.0));
        walker.move_to(Position::new(0.0, 0.0), 0.0, 0.0);
        for _ in 0..100 {
            walker.step(0.1, 5.0);
        }
        assert_eq!(Position::new(0.0, 5.0), walker.position);
    }
}
