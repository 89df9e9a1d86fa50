use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

use crate::Point3;

/// Sentinel marking an axis as "not specified" in raw, integer-only command
/// records.
pub const UNUSED_AXIS: i32 = i32::MAX;

/// Sentinel marking the command number as absent in raw command records.
pub const NO_COMMAND: i32 = -1;

/// A single parsed command line.
///
/// All coordinates are in ticks. A field is `None` when its key letter did
/// not appear on the line.
#[derive(Debug, uDebug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Command {
    /// Command number, from `G<n>`.
    pub num: Option<i32>,
    /// Target x coordinate, from `X`.
    pub x: Option<i32>,
    /// Target y coordinate, from `Y`.
    pub y: Option<i32>,
    /// Target z coordinate, from `Z`.
    pub z: Option<i32>,
    /// Arc center x offset, from `I`.
    pub i: Option<i32>,
    /// Arc center y offset, from `J`.
    pub j: Option<i32>,
    /// Arc center z offset, from `K`.
    pub k: Option<i32>,
}

impl Command {
    /// Creates a command with every field absent.
    pub const fn new() -> Self {
        Self {
            num: None,
            x: None,
            y: None,
            z: None,
            i: None,
            j: None,
            k: None,
        }
    }

    /// Target position, where unspecified axes keep their `current` value.
    pub fn target(&self, current: Point3) -> Point3 {
        Point3::new(
            self.x.unwrap_or(current.x),
            self.y.unwrap_or(current.y),
            self.z.unwrap_or(current.z),
        )
    }

    /// Arc center offset, where unspecified offsets are zero.
    pub fn center_offset(&self) -> Point3 {
        Point3::new(
            self.i.unwrap_or(0),
            self.j.unwrap_or(0),
            self.k.unwrap_or(0),
        )
    }

    /// Command number, or [NO_COMMAND] when absent.
    pub fn raw_num(&self) -> i32 {
        self.num.unwrap_or(NO_COMMAND)
    }

    /// Axis fields in `[x, y, z, i, j, k]` order, with [UNUSED_AXIS]
    /// standing in for absent fields.
    pub fn raw_axes(&self) -> [i32; 6] {
        [self.x, self.y, self.z, self.i, self.j, self.k]
            .map(|axis| axis.unwrap_or(UNUSED_AXIS))
    }
}

/// Displays the command as G-code, in ticks, eg. `G1 X10 Y-5`.
///
/// Absent fields are omitted.
impl uDisplay for Command {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let fields = [
            ('G', self.num),
            ('X', self.x),
            ('Y', self.y),
            ('Z', self.z),
            ('I', self.i),
            ('J', self.j),
            ('K', self.k),
        ];
        let mut first = true;
        for (letter, value) in fields {
            if let Some(value) = value {
                if !first {
                    f.write_char(' ')?;
                }
                f.write_char(letter)?;
                value.fmt(f)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::point::test::udisplay_string;
    use proptest::option;
    use proptest::prelude::*;

    /// Strategy for generating [Command].
    pub fn command() -> impl Strategy<Value = Command> {
        let field = || option::of(-1_000_000i32..1_000_000i32);
        (
            option::of(0i32..100),
            field(),
            field(),
            field(),
            field(),
            field(),
            field(),
        )
            .prop_map(|(num, x, y, z, i, j, k)| Command {
                num,
                x,
                y,
                z,
                i,
                j,
                k,
            })
    }

    #[test]
    fn test_new_is_empty() {
        let command = Command::new();
        assert_eq!(Command::default(), command);
        assert_eq!(NO_COMMAND, command.raw_num());
        assert_eq!([UNUSED_AXIS; 6], command.raw_axes());
    }

    #[test]
    fn test_target_keeps_unspecified_axes() {
        let command = Command {
            x: Some(10),
            z: Some(-3),
            ..Command::new()
        };
        let current = Point3::new(1, 2, 3);
        assert_eq!(Point3::new(10, 2, -3), command.target(current));
    }

    #[test]
    fn test_center_offset() {
        let command = Command {
            i: Some(5),
            k: Some(-1),
            ..Command::new()
        };
        assert_eq!(Point3::new(5, 0, -1), command.center_offset());
    }

    #[test]
    fn test_raw_axes() {
        let command = Command {
            num: Some(2),
            x: Some(10),
            j: Some(-7),
            ..Command::new()
        };
        assert_eq!(2, command.raw_num());
        assert_eq!(
            [10, UNUSED_AXIS, UNUSED_AXIS, UNUSED_AXIS, -7, UNUSED_AXIS],
            command.raw_axes()
        );
    }

    #[test]
    fn test_udisplay() {
        let command = Command {
            num: Some(1),
            x: Some(10),
            y: Some(-5),
            z: Some(0),
            ..Command::new()
        };
        assert_eq!("G1 X10 Y-5 Z0", udisplay_string(&command));
        assert_eq!("", udisplay_string(&Command::new()));
        let arc = Command {
            i: Some(3),
            j: Some(4),
            ..Command::new()
        };
        assert_eq!("I3 J4", udisplay_string(&arc));
    }
}
