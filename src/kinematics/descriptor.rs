use ufmt_macros::uDebug;

use crate::Point3;

/// Rotation sense of an arc.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub enum ArcDirection {
    /// Clockwise when viewed with y pointing up (`G2`).
    Clockwise,
    /// Counter-clockwise when viewed with y pointing up (`G3`).
    CounterClockwise,
}
impl ArcDirection {
    /// Returns the direction as a sign: `+1` for clockwise, `-1` for
    /// counter-clockwise.
    pub fn sign(&self) -> i32 {
        match self {
            ArcDirection::Clockwise => 1,
            ArcDirection::CounterClockwise => -1,
        }
    }
}

/// Endpoints of a single motion, plus the arc geometry when it is an arc.
///
/// For a straight line, `center` and `direction` are ignored.
#[derive(Debug, uDebug, PartialEq, Eq, Clone, Copy)]
pub struct LineDescriptor {
    pub from: Point3,
    pub to: Point3,
    pub center: Point3,
    pub direction: ArcDirection,
}
impl LineDescriptor {
    /// Creates a descriptor for a straight line.
    pub fn line(from: Point3, to: Point3) -> Self {
        Self {
            from,
            to,
            center: Point3::zero(),
            direction: ArcDirection::Clockwise,
        }
    }

    /// Creates a descriptor for a circular arc around `center`.
    pub fn arc(
        from: Point3,
        to: Point3,
        center: Point3,
        direction: ArcDirection,
    ) -> Self {
        Self {
            from,
            to,
            center,
            direction,
        }
    }
}
