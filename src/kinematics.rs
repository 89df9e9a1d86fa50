mod arc;
mod batch;
mod descriptor;
mod direction;
mod line;
mod motion;
mod stepper;

pub use arc::arc_delta;
pub use arc::arc_num_steps;
pub use arc::arc_step_limit;
pub use arc::check_arc;
pub use arc::ArcError;
pub use arc::ArcSteps;
pub use batch::fill_steps;
pub use batch::try_fill_steps;
pub use descriptor::ArcDirection;
pub use descriptor::LineDescriptor;
pub use direction::Direction;
pub use line::line_delta;
pub use line::line_num_steps;
pub use line::LineSteps;
pub use motion::plan_motion;
pub use motion::Motion;
pub use stepper::step_axes;
pub use stepper::Stepper;
