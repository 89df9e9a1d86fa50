use ufmt_macros::uDebug;

/// Describes the direction of a single-tick axis movement.
#[derive(Debug, uDebug, PartialEq, Clone, Copy)]
pub enum Direction {
    /// Positive direction is associated with a "high" direction signal.
    Positive,
    /// Negative direction is associated with a "low" direction signal.
    Negative,
}
impl Direction {
    /// Returns the direction of one axis component of a step delta.
    ///
    /// Zero means the axis does not move.
    pub fn from_delta(delta: i32) -> Option<Direction> {
        match delta.signum() {
            1 => Some(Direction::Positive),
            -1 => Some(Direction::Negative),
            _ => None,
        }
    }

    /// Returns the signed unit delta for this direction.
    pub fn to_delta(&self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating [Direction].
    pub fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Positive), Just(Direction::Negative)]
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Some(Direction::Positive), Direction::from_delta(1));
        assert_eq!(Some(Direction::Negative), Direction::from_delta(-1));
        assert_eq!(None, Direction::from_delta(0));
        assert_eq!(Some(Direction::Positive), Direction::from_delta(7));
    }

    proptest! {
        #[test]
        fn test_delta_roundtrip(dir in direction()) {
            assert_eq!(Some(dir), Direction::from_delta(dir.to_delta()));
        }
    }
}
