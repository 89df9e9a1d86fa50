use core::iter::Peekable;

use crate::Point3;

/// Moves step deltas into a fixed-capacity buffer.
///
/// This takes as many deltas from `steps` as will fit in `buffer`. It
/// returns when either the steps run out, or the buffer is full. The
/// function does not empty the buffer before accumulating into it.
///
/// If the buffer fills up first, the next delta stays in `steps`.
///
/// # Returns
///
/// - `true` if every step was moved into the buffer.
/// - `false` if the buffer filled up before the steps ran out.
pub fn fill_steps<I, const N: usize>(
    steps: &mut Peekable<I>,
    buffer: &mut heapless::Vec<Point3, N>,
) -> bool
where
    I: Iterator<Item = Point3>,
{
    while let Some(delta) = steps.peek() {
        if buffer.push(*delta).is_err() {
            return false;
        }
        steps.next();
    }
    true
}

/// Moves fallible step deltas, such as those of an arc, into a buffer.
///
/// This behaves like [fill_steps], but stops at the first error. Deltas
/// before the error stay in the buffer.
///
/// # Returns
///
/// - `Ok(completed)`: `completed` is `true` if every step was moved into the
///   buffer, and `false` if the buffer filled up first.
/// - `Err(_)` if the steps produced an error.
pub fn try_fill_steps<I, E, const N: usize>(
    steps: &mut Peekable<I>,
    buffer: &mut heapless::Vec<Point3, N>,
) -> Result<bool, E>
where
    I: Iterator<Item = Result<Point3, E>>,
    E: Copy,
{
    while let Some(item) = steps.peek() {
        let delta = (*item)?;
        if buffer.push(delta).is_err() {
            return Ok(false);
        }
        steps.next();
    }
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        ArcDirection, ArcError, ArcSteps, LineDescriptor, LineSteps,
    };

    #[test]
    fn test_fill_steps_complete() {
        let line = LineDescriptor::line(Point3::zero(), Point3::new(3, 1, 0));
        let mut steps = LineSteps::new(line).peekable();
        let mut buffer: heapless::Vec<Point3, 8> = heapless::Vec::new();

        assert!(fill_steps(&mut steps, &mut buffer));
        assert_eq!(3, buffer.len());
        assert_eq!(None, steps.next());
    }

    #[test]
    fn test_fill_steps_in_batches() {
        let line = LineDescriptor::line(Point3::zero(), Point3::new(7, 3, 0));
        let expected: Vec<Point3> = LineSteps::new(line).collect();
        let mut steps = LineSteps::new(line).peekable();
        let mut buffer: heapless::Vec<Point3, 3> = heapless::Vec::new();
        let mut collected = Vec::new();

        assert!(!fill_steps(&mut steps, &mut buffer));
        collected.extend_from_slice(&buffer);
        buffer.clear();
        assert!(!fill_steps(&mut steps, &mut buffer));
        collected.extend_from_slice(&buffer);
        buffer.clear();
        assert!(fill_steps(&mut steps, &mut buffer));
        collected.extend_from_slice(&buffer);

        assert_eq!(expected, collected);
    }

    #[test]
    fn test_try_fill_steps_arc() {
        let line = LineDescriptor::arc(
            Point3::new(5, 0, 0),
            Point3::new(0, 5, 0),
            Point3::zero(),
            ArcDirection::CounterClockwise,
        );
        let mut steps = ArcSteps::new(line).unwrap().peekable();
        let mut buffer: heapless::Vec<Point3, 4> = heapless::Vec::new();

        assert_eq!(Ok(false), try_fill_steps(&mut steps, &mut buffer));
        assert_eq!(4, buffer.len());
        buffer.clear();
        assert_eq!(Ok(true), try_fill_steps(&mut steps, &mut buffer));
        assert_eq!(3, buffer.len());
    }

    #[test]
    fn test_try_fill_steps_error() {
        let line = LineDescriptor::arc(
            Point3::new(10, 0, 0),
            Point3::new(0, 10, 0),
            Point3::zero(),
            ArcDirection::CounterClockwise,
        );
        let mut steps = ArcSteps::with_limit(line, 2).unwrap().peekable();
        let mut buffer: heapless::Vec<Point3, 8> = heapless::Vec::new();

        assert_eq!(
            Err(ArcError::Unreachable),
            try_fill_steps(&mut steps, &mut buffer)
        );
        assert_eq!(2, buffer.len());
    }
}
