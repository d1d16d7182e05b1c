use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two floating point numbers differ by no more
/// than the given tolerance.
///
/// Color science computed through 8-bit sRGB only reproduces quantities up to
/// the rounding of each channel. Tests of hue, chroma, and tone hence need an
/// explicit tolerance, whereas [`assert_close_enough`] compares bits.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance.
#[macro_export]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize hue, chroma, and tone for equality testing and hashing.
///
/// Hues are reduced to a single rotation and scaled to unit range before
/// rounding, so that 0º and 360º compare equal.
#[must_use = "function returns new coordinates and does not mutate original value"]
pub(crate) fn to_eq_hct(hue: Float, chroma: Float, tone: Float) -> [Bits; 3] {
    [
        to_eq_bits(hue.rem_euclid(360.0) / 360.0),
        to_eq_bits(chroma),
        to_eq_bits(tone),
    ]
}

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_hct};

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(crate::Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));
    }

    #[test]
    fn test_eq_hct() {
        assert_eq!(to_eq_hct(360.0, 10.0, 50.0), to_eq_hct(0.0, 10.0, 50.0));
        assert_eq!(to_eq_hct(-90.0, 10.0, 50.0), to_eq_hct(270.0, 10.0, 50.0));
    }
}
