use super::Generation;
use rand::Rng;

/// Simulation owns the current generation and a scratch buffer for the
/// next one. Both always have the same dimensions.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Generation,
    next: Generation,
}

impl Simulation {
    /// Allocate both buffers, all cells dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            current: Generation::new(rows, columns),
            next: Generation::new(rows, columns),
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Generation {
        &mut self.current
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current.randomize(rng);
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Advance one generation: compute into the scratch buffer, then swap
    pub fn step(&mut self) {
        self.current.step_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Same as [`Simulation::step`] on the rayon pool
    pub fn step_parallel(&mut self) {
        self.current.step_into_parallel(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_simulation_is_dead() {
        let sim = Simulation::new(4, 6);
        assert_eq!(sim.dimensions(), (4, 6));
        assert_eq!(sim.current().population(), 0);
    }

    #[test]
    fn test_swap_step_matches_pure_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sim = Simulation::new(30, 40);
        sim.randomize(&mut rng);

        let mut expected = sim.current().clone();
        for _ in 0..10 {
            expected = expected.step();
            sim.step();
            assert_eq!(sim.current(), &expected);
        }
        assert_eq!(sim.dimensions(), (30, 40));
    }

    #[test]
    fn test_swap_matches_copy_back() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sim = Simulation::new(12, 12);
        sim.randomize(&mut rng);

        let mut current = sim.current().clone();
        let mut next = Generation::new(12, 12);
        for _ in 0..5 {
            current.step_into(&mut next);
            current.copy_from(&next);
            sim.step();
        }
        assert_eq!(sim.current(), &current);
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut serial = Simulation::new(50, 50);
        serial.randomize(&mut rng);
        let mut parallel = serial.clone();

        for _ in 0..5 {
            serial.step();
            parallel.step_parallel();
        }
        assert_eq!(serial.current(), parallel.current());
    }

    #[test]
    fn test_blinker_through_simulation() {
        let mut sim = Simulation::new(5, 5);
        for column in 1..4 {
            sim.current_mut().set(2, column, Cell::Alive);
        }
        let start = sim.current().clone();

        sim.step();
        assert_eq!(sim.current().get(1, 2), Some(Cell::Alive));
        assert_eq!(sim.current().get(3, 2), Some(Cell::Alive));
        assert_eq!(sim.current().get(2, 1), Some(Cell::Dead));

        sim.step();
        assert_eq!(sim.current(), &start);
    }

    #[test]
    fn test_clear() {
        let mut sim = Simulation::new(8, 8);
        sim.randomize(&mut StdRng::seed_from_u64(1));
        sim.clear();
        assert_eq!(sim.current().population(), 0);
    }

    #[test]
    fn test_empty_simulation_steps() {
        let mut sim = Simulation::new(0, 0);
        sim.step();
        sim.step_parallel();
        assert!(sim.current().is_empty());
    }
}
