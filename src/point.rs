use core::ops::{Add, Sub};

use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

/// Underlying type representing a coordinate in ticks.
pub type TickRepr = i32;

/// Position or displacement of the carriage, in machine ticks.
#[derive(Debug, uDebug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Point3 {
    pub x: TickRepr,
    pub y: TickRepr,
    pub z: TickRepr,
}
impl Point3 {
    /// Creates a new `Point3`.
    pub const fn new(x: TickRepr, y: TickRepr, z: TickRepr) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the largest absolute component.
    ///
    /// For a displacement this is the Chebyshev distance it covers.
    pub fn chebyshev_norm(&self) -> u32 {
        self.x
            .unsigned_abs()
            .max(self.y.unsigned_abs())
            .max(self.z.unsigned_abs())
    }

    /// Adds two points, returning `None` if any coordinate overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Point3::new(
            self.x.checked_add(rhs.x)?,
            self.y.checked_add(rhs.y)?,
            self.z.checked_add(rhs.z)?,
        ))
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Displays the point as `X<x> Y<y> Z<z>`, in ticks.
impl uDisplay for Point3 {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_char('X')?;
        self.x.fmt(f)?;
        f.write_str(" Y")?;
        self.y.fmt(f)?;
        f.write_str(" Z")?;
        self.z.fmt(f)
    }
}
