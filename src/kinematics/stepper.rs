use crate::{Direction, Point3};

/// Stepper motor.
///
/// This is the interface to the hardware pulse driver. A stepper never fails
/// to take a step (at least in principle).
pub trait Stepper {
    /// Takes a single step in the supplied direction.
    ///
    /// # Parameters
    ///
    /// - `direction`: Direction in which to take the step.
    fn step(&mut self, direction: Direction);
}

/// Executes one unit delta on three steppers.
///
/// Each axis with a nonzero component takes exactly one step in the
/// direction of its sign; axes with a zero component do not move.
///
/// # Parameters
///
/// - `delta`: The unit delta to execute.
/// - `x`, `y`, `z`: Steppers for each axis.
pub fn step_axes<X, Y, Z>(delta: Point3, x: &mut X, y: &mut Y, z: &mut Z)
where
    X: Stepper,
    Y: Stepper,
    Z: Stepper,
{
    if let Some(direction) = Direction::from_delta(delta.x) {
        x.step(direction);
    }
    if let Some(direction) = Direction::from_delta(delta.y) {
        y.step(direction);
    }
    if let Some(direction) = Direction::from_delta(delta.z) {
        z.step(direction);
    }
}

#[cfg(test)]
pub mod test {
    use super::super::direction::test::direction;
    use super::*;
    use proptest::collection;
    use proptest::prelude::*;

    /// Stepper to use for testing purposes.
    ///
    /// This is just a position counter, plus a count of the pulses it was
    /// sent.
    #[derive(Debug, Default)]
    pub struct TestStepper {
        position: i64,
        pulses: u64,
    }
    impl TestStepper {
        /// Creates a new test stepper.
        pub fn new(position: i64) -> Self {
            Self {
                position,
                pulses: 0,
            }
        }

        /// Returns the position of a test stepper.
        pub fn get_position(&self) -> i64 {
            self.position
        }

        /// Returns the number of steps taken.
        pub fn get_pulses(&self) -> u64 {
            self.pulses
        }
    }
    impl Stepper for TestStepper {
        fn step(&mut self, direction: Direction) {
            self.position += direction.to_delta() as i64;
            self.pulses += 1;
        }
    }

    #[test]
    fn test_step_axes() {
        let mut x = TestStepper::new(0);
        let mut y = TestStepper::new(10);
        let mut z = TestStepper::new(-5);

        step_axes(Point3::new(1, 0, -1), &mut x, &mut y, &mut z);
        assert_eq!(1, x.get_position());
        assert_eq!(10, y.get_position());
        assert_eq!(-6, z.get_position());
        assert_eq!(0, y.get_pulses());

        step_axes(Point3::zero(), &mut x, &mut y, &mut z);
        assert_eq!(1, x.get_pulses());
        assert_eq!(0, y.get_pulses());
        assert_eq!(1, z.get_pulses());
    }

    proptest! {
        #[test]
        fn test_multi_steps(
            steps in collection::vec((direction(), direction()), 1..64)
        ) {
            let mut x = TestStepper::new(0);
            let mut y = TestStepper::new(0);
            let mut z = TestStepper::new(0);
            let mut expected = Point3::zero();
            for (dx, dy) in steps {
                let delta = Point3::new(dx.to_delta(), dy.to_delta(), 0);
                expected = expected + delta;
                step_axes(delta, &mut x, &mut y, &mut z);
            }
            assert_eq!(expected.x as i64, x.get_position());
            assert_eq!(expected.y as i64, y.get_position());
            assert_eq!(0, z.get_pulses());
        }
    }
}
