use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions needed for polar coordinates.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the four-quadrant arctangent of `self` (`y`) and `other` (`x`).
    fn atan2(self, other: Self) -> Self;
}

/// Types that can be converted to [`f32`] for magnitude and angle computations.
///
/// [`Complex::modulus`][crate::Complex::modulus] and [`Complex::phase`][crate::Complex::phase]
/// return floating-point results even for integer element types; this trait supplies the
/// conversion. It is lossy for `f64` and for integers that exceed the 24-bit mantissa of `f32`,
/// which is acceptable for the magnitudes the drills work with.
pub trait ToFloat {
    fn to_f32(self) -> f32;
}

macro_rules! to_float {
    ($($types:ty),+) => {
        $(
            impl ToFloat for $types {
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )+
    };
}
to_float!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

macro_rules! zero_one {
    ($zero:expr, $one:expr; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Trig for f32 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }
}

impl Trig for f64 {
    fn sin(self) -> Self {
        self.sin()
    }

    fn cos(self) -> Self {
        self.cos()
    }

    fn atan2(self, other: Self) -> Self {
        self.atan2(other)
    }
}
