use std::sync::OnceLock;

use crate::core::{lerp, multiply, y_from_lstar, FloatExt, WHITE_POINT_D65};
use crate::Float;

/// The matrix for converting XYZ to CAM16's cone responses.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_CAM16RGB: [[Float; 3]; 3] = [
    [  0.401288, 0.650173, -0.051461 ],
    [ -0.250268, 1.204414,  0.045854 ],
    [ -0.002079, 0.048952,  0.953127 ],
];

/// The matrix for converting CAM16's cone responses back to XYZ.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const CAM16RGB_TO_XYZ: [[Float; 3]; 3] = [
    [  1.86206786, -1.01125463,  0.14918677 ],
    [  0.38752654,  0.62144744, -0.00897398 ],
    [ -0.01584150, -0.03412294,  1.04996444 ],
];

/// The environment in which colors are viewed.
///
/// CAM16 models how the same stimulus appears differently under different
/// lighting, against different backgrounds, and with different surrounds.
/// The parameters below are the intermediate values that depend on the
/// environment only and hence can be computed once.
#[derive(Clone, Debug)]
pub(crate) struct ViewingConditions {
    pub n: Float,
    pub aw: Float,
    pub nbb: Float,
    pub ncb: Float,
    pub c: Float,
    pub nc: Float,
    pub rgb_d: [Float; 3],
    pub fl: Float,
    pub fl_root: Float,
    pub z: Float,
}

impl ViewingConditions {
    /// Create new viewing conditions.
    ///
    /// The white point is given in XYZ with Y = 100, the adapting luminance in
    /// cd/m², the background as L*, and the surround on a scale from 0 (dark)
    /// over 1 (dim) to 2 (average).
    pub(crate) fn new(
        white_point: &[Float; 3],
        adapting_luminance: Float,
        background_lstar: Float,
        surround: Float,
        discounting_illuminant: bool,
    ) -> Self {
        let rgb_w = multiply(&XYZ_TO_CAM16RGB, white_point);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };

        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        }
        .clamp(0.0, 1.0);

        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);

        let rgb_a: [Float; 3] = std::array::from_fn(|index| {
            let factor = (fl * rgb_d[index] * rgb_w[index] / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb: nbb,
            c,
            nc: f,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// Get the standard viewing conditions.
    ///
    /// They assume sRGB's D65 white point, a gray-world average background with
    /// L* = 50, an adapting luminance of about 11.7 cd/m², an average surround,
    /// and no discounting of the illuminant.
    pub(crate) fn standard() -> &'static Self {
        static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();

        STANDARD.get_or_init(|| {
            Self::new(
                &WHITE_POINT_D65,
                200.0 / <Float as FloatExt>::PI * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::ViewingConditions;
    use crate::assert_within;

    #[test]
    fn test_standard() {
        let vc = ViewingConditions::standard();
        assert_within!(vc.n, 0.18418651851244416, 1e-12);
        assert_within!(vc.c, 0.69, 1e-12);
        assert_within!(vc.nc, 1.0, 1e-12);
        assert_within!(vc.z, 1.909169568483652, 1e-9);
        assert_within!(vc.nbb, 1.0169191804458757, 1e-9);
        assert_eq!(vc.nbb, vc.ncb);
        assert_within!(vc.fl, 0.3884814537800353, 1e-6);
        assert_within!(vc.aw, 29.981, 0.01);
    }
}
