//! Unit-tagged scalars: lengths in meters and areas in square meters.
//!
//! - `Meters * Meters = MetersSquared`; that product is the only way to get an
//!   area from lengths, so a length can never be summed with an area.
//! - Ratios of like quantities are plain `f64`.
//! - Comparison is exact (`PartialOrd` on the raw value).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A length in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(f64);

/// An area in square meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersSquared(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    #[inline]
    pub const fn new(meters: f64) -> Self {
        Self(meters)
    }
    #[inline]
    pub const fn meters(self) -> f64 {
        self.0
    }
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
    /// Square root of an area, e.g. the side of a square of that area.
    #[inline]
    pub fn sqrt_of(area: MetersSquared) -> Self {
        Self(area.0.sqrt())
    }
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl MetersSquared {
    pub const ZERO: MetersSquared = MetersSquared(0.0);

    #[inline]
    pub const fn new(square_meters: f64) -> Self {
        Self(square_meters)
    }
    #[inline]
    pub const fn square_meters(self) -> f64 {
        self.0
    }
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
    /// `1`, `-1` or `0` (also for `-0.0`); NaN maps to `0`.
    #[inline]
    pub fn sign(self) -> i8 {
        if self.0 > 0.0 {
            1
        } else if self.0 < 0.0 {
            -1
        } else {
            0
        }
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

impl fmt::Display for MetersSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.0)
    }
}

// Same-unit arithmetic, plus scaling by dimensionless factors.
macro_rules! impl_linear_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }
        impl Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }
        impl Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t(-self.0)
            }
        }
        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                self.0 += rhs.0;
            }
        }
        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                self.0 -= rhs.0;
            }
        }
        impl Mul<f64> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, factor: f64) -> $t {
                $t(self.0 * factor)
            }
        }
        impl Mul<$t> for f64 {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t(self * rhs.0)
            }
        }
        impl Div<f64> for $t {
            type Output = $t;
            #[inline]
            fn div(self, factor: f64) -> $t {
                $t(self.0 / factor)
            }
        }
        impl Div for $t {
            type Output = f64;
            #[inline]
            fn div(self, rhs: $t) -> f64 {
                self.0 / rhs.0
            }
        }
        impl Sum for $t {
            fn sum<I: Iterator<Item = $t>>(iter: I) -> $t {
                iter.fold($t(0.0), Add::add)
            }
        }
    };
}

impl_linear_ops!(Meters);
impl_linear_ops!(MetersSquared);

impl Mul for Meters {
    type Output = MetersSquared;
    #[inline]
    fn mul(self, rhs: Meters) -> MetersSquared {
        MetersSquared(self.0 * rhs.0)
    }
}

impl Div<Meters> for MetersSquared {
    type Output = Meters;
    #[inline]
    fn div(self, rhs: Meters) -> Meters {
        Meters(self.0 / rhs.0)
    }
}
