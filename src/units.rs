use derive_more::{Add, AddAssign, Display, From, Into, Sub};
use std::ops::{Div, Mul};

/// A distance in logical pixels. All layout math happens in logical pixels;
/// a surface's device scale is applied only when drawing, so `Px` coordinates
/// are identical across output densities.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, From, Into, Display,
)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The absolute value of the distance
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl std::iter::Sum for Px {
    fn sum<I: Iterator<Item = Px>>(iter: I) -> Px {
        iter.fold(Px::ZERO, std::ops::Add::add)
    }
}
