//! # Tonality
//!
//! Tonality derives complete, harmonious light and dark color schemes from a
//! single seed color, using the HCT color science behind Material Design 3.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Build with the `pyffi` feature enabled for a version that also covers
Python integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Build with the `pyffi` feature disabled for a version without
Python integration."
)]
//!
//!
//! ## 1. Overview
//!
//! Tonality's main abstractions are:
//!
//!   * [`Argb`] is a **32-bit color** with alpha, red, green, and blue
//!     channels. It is the currency of this crate, both as input and as
//!     output.
//!   * [`Hct`] represents colors as **hue, chroma, and tone**. Hue and chroma
//!     stem from the CAM16 color appearance model, exposed as [`Cam16`],
//!     whereas tone is CIELAB's perceptual lightness L*. Tone differences
//!     translate into contrast, which makes HCT ideal for color schemes.
//!   * A [`TonalPalette`] fixes hue and chroma, while producing colors of any
//!     tone. The [`CorePalette`] combines six tonal palettes derived from a
//!     seed color.
//!   * A [`Scheme`] assigns colors to the 29 [`Role`]s of a user interface,
//!     e.g., `primary`, `onPrimary`, or `surfaceVariant`, for one [`Mode`].
//!   * A [`Theme`] bundles seed color, core palette, light and dark schemes,
//!     as well as custom colors.
//!
//! The [`blend`] module harmonizes colors and composites translucent colors,
//! the [`extract`] module picks a seed color from an image's pixels, and the
//! [`preset`] module maps scheme roles onto an application's own color
//! variables.
//!
//!
//! ## 2. One-Two-Three: Schemes!
//!
//! Tonality's workflow for color schemes takes three steps.
//!
//! ### i. Pick a Seed
//!
//! Either choose a seed color yourself or extract one from an image:
//!
//! ```
//! # use tonality::{extract::extract_seed, Argb};
//! let gray = Argb::new(0xff808080);
//! let wallpaper = [gray, gray, gray, Argb::new(0xff6750a4)];
//! let seed = extract_seed(&wallpaper)?;
//! assert_eq!(seed, "#6750a4".parse::<Argb>()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### ii. Derive the Schemes
//!
//! Second, derive the theme with both schemes from the seed color:
//!
//! ```
//! # use tonality::{Argb, Mode, Role, Theme};
//! let theme = Theme::from_source(Argb::new(0xff6750a4));
//! let scheme = theme.scheme(Mode::Dark);
//! assert_eq!(scheme[Role::Primary], Argb::new(0xffd0bcff));
//! assert_eq!(scheme[Role::OnPrimary], Argb::new(0xff381e73));
//! ```
//!
//! ### iii. Use the Colors
//!
//! Third, use the colors, for example, as CSS custom properties or by mapping
//! them to variables with [`preset::map_colors`]:
//!
//! ```
//! # use tonality::{Argb, Mode, Theme};
//! # let theme = Theme::from_source(Argb::new(0xff6750a4));
//! for (name, value) in theme.scheme(Mode::Light).css_properties().iter().take(2) {
//!     println!("{}: {};", name, value);
//! }
//! // --md-sys-color-primary: #6750a4;
//! // --md-sys-color-on-primary: #ffffff;
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tonality supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** enables serialization of colors, roles, modes, schemes,
//!     and themes as well as deserialization of extraction configurations and
//!     preset mappings. This feature is disabled by default.
//!   - **`pyffi`** controls tonality's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//!
//! ## 4. Logging
//!
//! Tonality uses the [log](https://crates.io/crates/log) facade for reporting
//! on dominant color extraction. It never installs a logger itself.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod argb;
mod core;
pub mod error;
mod hct;

pub mod blend;
pub mod extract;
pub mod palette;
pub mod preset;
pub mod scheme;
pub mod theme;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use argb::Argb;
pub use hct::{Cam16, Hct};
pub use palette::{CorePalette, PaletteKey, TonalPalette};
pub use scheme::{Mode, Role, Scheme};
pub use theme::Theme;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolor_name = m.name()?;
    let modcolor_name = modcolor_name.to_str()?;
    let modtheme_name = format!("{}.theme", modcolor_name);

    // -------------------------------------------------------------------------- color
    m.add_class::<Argb>()?;
    m.add_class::<Cam16>()?;
    m.add_class::<Hct>()?;
    m.add_class::<TonalPalette>()?;
    m.add_class::<PaletteKey>()?;
    m.add_class::<CorePalette>()?;
    m.add_class::<Mode>()?;
    m.add_class::<Role>()?;
    m.add_class::<scheme::RoleIterator>()?;
    m.add_class::<Scheme>()?;

    m.add_function(wrap_pyfunction!(blend::harmonize, m)?)?;
    m.add_function(wrap_pyfunction!(blend::harmonize_rotation, m)?)?;
    m.add_function(wrap_pyfunction!(blend::hct_hue, m)?)?;
    m.add_function(wrap_pyfunction!(blend::cam16_ucs, m)?)?;
    m.add_function(wrap_pyfunction!(blend::over, m)?)?;
    m.add_function(wrap_pyfunction!(blend::blend, m)?)?;
    m.add_function(wrap_pyfunction!(blend::py_compose, m)?)?;
    m.add_function(wrap_pyfunction!(extract::py_extract_seed, m)?)?;

    // -------------------------------------------------------------------- color.theme
    let modtheme = PyModule::new(m.py(), "theme")?;
    modtheme.add("__package__", modcolor_name)?;
    modtheme.add_class::<theme::ColorGroup>()?;
    modtheme.add_class::<theme::CustomColor>()?;
    modtheme.add_class::<theme::CustomColorGroup>()?;
    modtheme.add_class::<Theme>()?;
    m.add_submodule(&modtheme)?;

    // Only change __name__ attribute after submodule has been added.
    modtheme.setattr("__name__", &modtheme_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modtheme_name, modtheme)?;

    Ok(())
}
