use ufmt_macros::uDebug;

use super::arc::{arc_num_steps, ArcError};
use super::line::line_num_steps;
use crate::{ArcDirection, Command, LineDescriptor, Point3};

/// Motion requested by a single command.
#[derive(Debug, uDebug, PartialEq, Eq, Copy, Clone)]
pub enum Motion {
    /// Straight line (`G0`, `G1`).
    Line(LineDescriptor),
    /// Circular arc (`G2` clockwise, `G3` counter-clockwise).
    Arc(LineDescriptor),
}
impl Motion {
    /// Returns the descriptor of the motion.
    pub fn descriptor(&self) -> &LineDescriptor {
        match self {
            Motion::Line(line) => line,
            Motion::Arc(line) => line,
        }
    }

    /// Returns the number of unit steps for the motion.
    pub fn num_steps(&self) -> Result<u32, ArcError> {
        match self {
            Motion::Line(line) => Ok(line_num_steps(line)),
            Motion::Arc(line) => arc_num_steps(line),
        }
    }
}

/// Plans the motion for a command, starting from `current`.
///
/// Axes missing from the command keep their current coordinate. For arcs,
/// the center is `current` offset by `I`, `J` and `K`, where missing offsets
/// are zero.
///
/// # Returns
///
/// - `Some(motion)` for `G0` to `G3`.
/// - `None` for any other command, or a line without a `G` number.
pub fn plan_motion(current: Point3, command: &Command) -> Option<Motion> {
    let to = command.target(current);
    let arc = |direction| {
        let center = current + command.center_offset();
        Motion::Arc(LineDescriptor::arc(current, to, center, direction))
    };
    match command.num? {
        0 | 1 => Some(Motion::Line(LineDescriptor::line(current, to))),
        2 => Some(arc(ArcDirection::Clockwise)),
        3 => Some(arc(ArcDirection::CounterClockwise)),
        _ => None,
    }
}
