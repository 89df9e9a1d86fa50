use ufmt_macros::uDebug;

use crate::{ArcDirection, LineDescriptor, Point3};

/// Reasons an arc cannot be traced.
#[derive(Debug, uDebug, PartialEq, Eq, Copy, Clone)]
pub enum ArcError {
    /// The arc ends on its center, so it has no radius.
    ZeroRadius,
    /// The arc did not reach its end point within the step limit, or it
    /// left the coordinate range.
    Unreachable,
    /// The start and end points are at different distances from the center.
    InconsistentRadius,
}

/// Returns the next unit delta along an arc.
///
/// The nominal delta heads along the tangent of the circle through
/// `current`, in the rotation sense of the arc, rounded to the nearest unit
/// step. Candidate steps are then compared by their squared-radius error
/// against the circle through `line.to`:
///
/// - If the nominal delta has no x component, x of `+1` or `-1` is taken
///   when it is strictly better than both other candidates.
/// - Otherwise, if it has no y component, the same is done for y.
/// - Otherwise (a diagonal), dropping x or dropping y is taken when it is
///   strictly better than both the diagonal and the other option.
///
/// Ties keep the nominal delta. The z component is always zero.
///
/// # Parameters
///
/// - `line`: The arc being traced.
/// - `current`: Current position of the carriage.
pub fn arc_delta(line: &LineDescriptor, current: Point3) -> Point3 {
    let rx = current.x as i64 - line.center.x as i64;
    let ry = current.y as i64 - line.center.y as i64;
    let r2 = squared_radius(line.to, line.center);
    let error = |dx: i64, dy: i64| -> u128 {
        let x = (rx + dx) as i128;
        let y = (ry + dy) as i128;
        (x * x + y * y - r2).unsigned_abs()
    };

    let (mut dx, mut dy) = tangent_delta(rx, ry, line.direction);
    let nominal = error(dx, dy);

    if dx == 0 {
        let plus = error(1, dy);
        let minus = error(-1, dy);
        if plus < nominal && plus < minus {
            dx = 1;
        } else if minus < nominal && minus < plus {
            dx = -1;
        }
    } else if dy == 0 {
        let plus = error(dx, 1);
        let minus = error(dx, -1);
        if plus < nominal && plus < minus {
            dy = 1;
        } else if minus < nominal && minus < plus {
            dy = -1;
        }
    } else {
        let without_x = error(0, dy);
        let without_y = error(dx, 0);
        if without_x < nominal && without_x < without_y {
            dx = 0;
        } else if without_y < nominal && without_y < without_x {
            dy = 0;
        }
    }

    Point3::new(dx as i32, dy as i32, 0)
}

/// Returns the number of unit steps needed to trace an arc.
///
/// Stepping starts at `line.from` and ends when the x and y coordinates
/// reach `line.to`. At least one step is always taken, so an arc that
/// starts and ends at the same point is a full circle.
///
/// # Returns
///
/// - `Ok(steps)`: the number of steps.
/// - `Err(ArcError::ZeroRadius)`: if `line.to` is the center.
/// - `Err(ArcError::Unreachable)`: if the end point was not reached within
///   [arc_step_limit] steps, or a step left the `i32` coordinate range.
pub fn arc_num_steps(line: &LineDescriptor) -> Result<u32, ArcError> {
    let mut steps = 0;
    for delta in ArcSteps::new(*line)? {
        delta?;
        steps += 1;
    }
    Ok(steps)
}

/// Returns the default limit on the number of steps for an arc.
///
/// A full circle of radius `r` takes at most about `6r` unit steps. The
/// limit is eight times the sum of the Chebyshev distances of `from` and
/// `to` from the center, plus eight, which is always larger.
pub fn arc_step_limit(line: &LineDescriptor) -> u32 {
    let from = chebyshev_from_center(line.from, line.center);
    let to = chebyshev_from_center(line.to, line.center);
    let limit = 8 * (from + to) + 8;
    limit.min(u32::MAX as u64) as u32
}

/// Checks that an arc's center is equidistant from its end points.
///
/// The radii to `from` and `to`, rounded down to whole ticks, may differ
/// by at most one tick.
pub fn check_arc(line: &LineDescriptor) -> Result<(), ArcError> {
    let to_radius = squared_radius(line.to, line.center);
    if to_radius == 0 {
        return Err(ArcError::ZeroRadius);
    }
    let from_radius = squared_radius(line.from, line.center);
    let to_radius = isqrt(to_radius as u128);
    let from_radius = isqrt(from_radius as u128);
    if to_radius.abs_diff(from_radius) > 1 {
        return Err(ArcError::InconsistentRadius);
    }
    Ok(())
}

/// Iterator over the unit deltas of an arc.
///
/// Yields `Ok(delta)` for every step until the end point is reached. If the
/// step limit runs out first, or a step would leave the `i32` coordinate
/// range, it yields `Err(ArcError::Unreachable)` once and then ends.
#[derive(Debug, Clone)]
pub struct ArcSteps {
    line: LineDescriptor,
    position: Point3,
    taken: u32,
    limit: u32,
    done: bool,
}
impl ArcSteps {
    /// Creates an iterator using the default [arc_step_limit].
    pub fn new(line: LineDescriptor) -> Result<Self, ArcError> {
        Self::with_limit(line, arc_step_limit(&line))
    }

    /// Creates an iterator that gives up after `limit` steps.
    ///
    /// # Returns
    ///
    /// - `Err(ArcError::ZeroRadius)` if `line.to` is the center.
    pub fn with_limit(
        line: LineDescriptor,
        limit: u32,
    ) -> Result<Self, ArcError> {
        if squared_radius(line.to, line.center) == 0 {
            return Err(ArcError::ZeroRadius);
        }
        Ok(Self {
            line,
            position: line.from,
            taken: 0,
            limit,
            done: false,
        })
    }

    /// Returns the position reached by the steps yielded so far.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Returns the number of steps yielded so far.
    pub fn taken(&self) -> u32 {
        self.taken
    }
}
impl Iterator for ArcSteps {
    type Item = Result<Point3, ArcError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.taken >= self.limit {
            self.done = true;
            return Some(Err(ArcError::Unreachable));
        }

        let delta = arc_delta(&self.line, self.position);
        let Some(position) = self.position.checked_add(delta) else {
            self.done = true;
            return Some(Err(ArcError::Unreachable));
        };
        self.position = position;
        self.taken += 1;
        if self.position.x == self.line.to.x
            && self.position.y == self.line.to.y
        {
            self.done = true;
        }
        Some(Ok(delta))
    }
}

/// Nominal unit delta along the tangent at `(rx, ry)`.
///
/// The tangent heading is `atan2(ry, rx) + sign * pi / 2` and the delta is
/// `(round(-cos(heading)), round(-sin(heading)))`. This evaluates the same
/// thing exactly: `-cos` and `-sin` of the heading are `+-ry / |r|` and
/// `-+rx / |r|`, and `v / |r|` rounds to `+-1` exactly when `4v^2 >= |r|^2`.
fn tangent_delta(rx: i64, ry: i64, direction: ArcDirection) -> (i64, i64) {
    let sign = direction.sign() as i64;
    if rx == 0 && ry == 0 {
        // atan2(0, 0) is 0.
        return (0, -sign);
    }
    let norm2 = rx as i128 * rx as i128 + ry as i128 * ry as i128;
    let unit = |v: i64| -> i64 {
        if 4 * (v as i128) * (v as i128) >= norm2 {
            v.signum()
        } else {
            0
        }
    };
    (unit(sign * ry), unit(-sign * rx))
}

/// Squared distance between two points.
fn squared_radius(point: Point3, center: Point3) -> i128 {
    let x = point.x as i128 - center.x as i128;
    let y = point.y as i128 - center.y as i128;
    x * x + y * y
}

/// Largest x or y distance of a point from the center.
fn chebyshev_from_center(point: Point3, center: Point3) -> u64 {
    let x = (point.x as i64 - center.x as i64).unsigned_abs();
    let y = (point.y as i64 - center.y as i64).unsigned_abs();
    x.max(y)
}

/// Integer square root, rounded down.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
