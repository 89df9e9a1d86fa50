#![cfg_attr(not(test), no_std)]

mod command;
mod gcode;
mod kinematics;
mod point;
mod scale;

pub use command::Command;
pub use command::NO_COMMAND;
pub use command::UNUSED_AXIS;
pub use point::Point3;
pub use point::TickRepr;
pub use scale::round_half_away;
pub use scale::TickScale;

pub use gcode::find_next_key_letter;
pub use gcode::parse_command;
pub use gcode::parse_command_bytes;
pub use gcode::parse_operand;
pub use gcode::KEY_LETTERS;
pub use gcode::MAX_SCAN;

pub use kinematics::arc_delta;
pub use kinematics::arc_num_steps;
pub use kinematics::arc_step_limit;
pub use kinematics::check_arc;
pub use kinematics::fill_steps;
pub use kinematics::line_delta;
pub use kinematics::line_num_steps;
pub use kinematics::plan_motion;
pub use kinematics::step_axes;
pub use kinematics::try_fill_steps;
pub use kinematics::ArcDirection;
pub use kinematics::ArcError;
pub use kinematics::ArcSteps;
pub use kinematics::Direction;
pub use kinematics::LineDescriptor;
pub use kinematics::LineSteps;
pub use kinematics::Motion;
pub use kinematics::Stepper;
