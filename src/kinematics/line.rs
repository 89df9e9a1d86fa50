use crate::{LineDescriptor, Point3};

/// Returns the number of unit steps needed to trace a straight line.
///
/// This is the largest per-axis displacement, so that no axis has to move
/// by more than one tick in a single step. It is zero when `from == to`.
pub fn line_num_steps(line: &LineDescriptor) -> u32 {
    displacement(line)
        .iter()
        .map(|delta| delta.unsigned_abs() as u32)
        .max()
        .unwrap_or(0)
}

/// Returns the unit delta for one step of a straight line.
///
/// Each axis spreads its displacement evenly over `total_steps` increments:
/// the delta at step `s` is `round(|d| * s / n) - round(|d| * (s - 1) / n)`,
/// signed like the displacement `d`, with halves rounded away from zero.
/// Summed over every step, the deltas add up to exactly `to - from`.
///
/// # Parameters
///
/// - `line`: The line being traced.
/// - `step`: Step index, from `1` to `total_steps` inclusive.
/// - `total_steps`: Number of steps for the line; see [line_num_steps].
///
/// # Returns
///
/// The delta for the step. A step index outside `1..=total_steps` does not
/// move any axis.
pub fn line_delta(
    line: &LineDescriptor,
    step: u32,
    total_steps: u32,
) -> Point3 {
    let [dx, dy, dz] = displacement(line);
    Point3::new(
        line_axis(dx, step, total_steps),
        line_axis(dy, step, total_steps),
        line_axis(dz, step, total_steps),
    )
}

/// Iterator over the unit deltas of a straight line.
#[derive(Debug, Clone)]
pub struct LineSteps {
    line: LineDescriptor,
    step: u32,
    total_steps: u32,
}
impl LineSteps {
    /// Creates an iterator over every step of `line`.
    pub fn new(line: LineDescriptor) -> Self {
        let total_steps = line_num_steps(&line);
        Self {
            line,
            step: 0,
            total_steps,
        }
    }

    /// Returns the total number of steps for the line.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }
}
impl Iterator for LineSteps {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.step >= self.total_steps {
            return None;
        }
        self.step += 1;
        Some(line_delta(&self.line, self.step, self.total_steps))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for LineSteps {}

/// Per-axis displacement of a line, widened so it cannot overflow.
fn displacement(line: &LineDescriptor) -> [i64; 3] {
    [
        line.to.x as i64 - line.from.x as i64,
        line.to.y as i64 - line.from.y as i64,
        line.to.z as i64 - line.from.z as i64,
    ]
}

/// Delta along one axis for a single step.
fn line_axis(delta: i64, step: u32, total_steps: u32) -> i32 {
    if step == 0 || step > total_steps {
        return 0;
    }
    let magnitude = delta.unsigned_abs();
    let d = rounded_share(magnitude, step, total_steps)
        - rounded_share(magnitude, step - 1, total_steps);
    if delta < 0 {
        -(d as i32)
    } else {
        d as i32
    }
}

/// Computes `round(magnitude * step / total_steps)`, halves rounded up.
fn rounded_share(magnitude: u64, step: u32, total_steps: u32) -> u128 {
    let numerator =
        2 * magnitude as u128 * step as u128 + total_steps as u128;
    numerator / (2 * total_steps as u128)
}
