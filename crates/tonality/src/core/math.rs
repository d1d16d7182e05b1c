use crate::Float;

/// An extension trait for floating point numbers.
///
/// This trait provides constants that depend on the floating point
/// representation, i.e., the rounding factor for equality comparisons and π.
pub(crate) trait FloatExt {
    /// Archimedes' constant.
    const PI: Self;

    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const PI: f64 = std::f64::consts::PI;
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const PI: f32 = std::f32::consts::PI;
    const ROUNDING_FACTOR: f32 = 1e4;
}

// --------------------------------------------------------------------------------------------------------------------

/// A floating point accumulator.
///
/// Unlike plain summation with the `+` operator, this struct minimizes the
/// cumulative error by using [Kahan's algorithm with Neumaier's
/// improvements](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
/// Quantization sums tens of thousands of weighted coordinates per cluster,
/// which is where the compensation pays off.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    compensation: Float,
}

impl Accumulator {
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.compensation
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Linearly interpolate between start and stop.
#[inline]
pub(crate) fn lerp(start: Float, stop: Float, amount: Float) -> Float {
    (1.0 - amount) * start + amount * stop
}

/// Determine the sign of the number as -1, 0, or 1.
///
/// Unlike `Float::signum`, this function maps both zeros to zero.
#[inline]
pub(crate) fn signum(value: Float) -> Float {
    if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        1.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the angle to `0..360`.
#[inline]
pub(crate) fn sanitize_degrees(degrees: Float) -> Float {
    let degrees = degrees.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs.
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Compute the unsigned distance between two angles, which is at most 180º.
#[inline]
pub(crate) fn difference_degrees(a: Float, b: Float) -> Float {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Determine the direction of the shortest rotation from one angle to another.
///
/// This function returns 1.0 for counter-clockwise (increasing) rotation and
/// -1.0 for clockwise (decreasing) rotation. For opposite angles, it picks
/// increasing.
#[inline]
pub(crate) fn rotation_direction(from: Float, to: Float) -> Float {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_accumulator() {
        let mut sum = Accumulator::default();
        for _ in 0..10 {
            sum += 0.1;
        }
        assert_close_enough!(sum.total(), 1.0);

        let mut sum = Accumulator::default();
        for n in [1e16, 1.0, -1e16] {
            sum += n;
        }
        assert_eq!(sum.total(), 1.0);
    }

    #[test]
    fn test_degrees() {
        assert_close_enough!(sanitize_degrees(-30.0), 330.0);
        assert_close_enough!(sanitize_degrees(725.0), 5.0);
        assert_close_enough!(sanitize_degrees(360.0), 0.0);

        assert_close_enough!(difference_degrees(10.0, 350.0), 20.0);
        assert_close_enough!(difference_degrees(350.0, 10.0), 20.0);
        assert_close_enough!(difference_degrees(0.0, 180.0), 180.0);

        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
        assert_eq!(rotation_direction(10.0, 350.0), -1.0);
        assert_eq!(rotation_direction(282.0, 27.0), 1.0);
    }

    #[test]
    fn test_signum() {
        assert_eq!(signum(-0.0), 0.0);
        assert_eq!(signum(-3.0), -1.0);
        assert_eq!(signum(0.5), 1.0);
    }
}
