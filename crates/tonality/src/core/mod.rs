mod conversion;
mod equality;
mod math;
mod string;

// conversion
pub(crate) use conversion::{
    argb_from_lab, argb_from_lstar, argb_from_xyz, lab_from_argb, lstar_from_argb, xyz_from_argb,
    y_from_lstar, WHITE_POINT_D65,
};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_hct;

// math
pub(crate) use math::{
    difference_degrees, lerp, multiply, rotation_direction, sanitize_degrees, signum,
    Accumulator, FloatExt,
};

// string
pub(crate) use string::{format_hex, format_rgba, parse};
