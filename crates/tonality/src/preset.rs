//! Utility module mapping scheme roles to the variables of a preset.
//!
//! Applications and desktop themes usually come with their own set of color
//! variables, e.g., `window_bg_color` or `accent_fg_color`. A mapping table
//! determines each variable's value from a [`Scheme`], either as a single role
//! with an opacity or as a stack of layers composited on top of each other.
//!
//! With the `serde` feature, mapping tables deserialize from JSON objects such
//! as:
//!
//! ```json
//! {
//!     "accent_color": { "color": "primary", "opacity": 1 },
//!     "shade_color": { "color": "shadow", "opacity": 0.36 },
//!     "headerbar_bg_color": [
//!         { "color": "surface", "opacity": 1 },
//!         { "color": "primary", "opacity": 0.08 }
//!     ]
//! }
//! ```
use std::collections::BTreeMap;

use crate::blend::compose;
use crate::core::format_rgba;
use crate::error::{OutOfBoundsError, PresetError, PresetErrorKind};
use crate::scheme::{Mode, Role, Scheme};
use crate::Float;

#[cfg(feature = "serde")]
fn opaque() -> Float {
    1.0
}

/// A role with an opacity.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layer {
    /// The role determining the color.
    pub color: Role,
    /// The opacity `0..=1`.
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub opacity: Float,
}

impl Layer {
    /// Create a new layer.
    pub const fn new(color: Role, opacity: Float) -> Self {
        Self { color, opacity }
    }

    /// Create a new, opaque layer.
    pub const fn opaque(color: Role) -> Self {
        Self::new(color, 1.0)
    }

    fn validate(&self, variable: &str) -> Result<Float, PresetError> {
        let opacity = self.opacity;
        if opacity.is_nan() || opacity < 0.0 {
            return Err(PresetError::new(variable, PresetErrorKind::NegativeOpacity));
        } else if 1.0 < opacity {
            let thousandths = (opacity * 1000.0).round() as usize;
            return Err(PresetError::new(
                variable,
                PresetErrorKind::Opacity(OutOfBoundsError::new(thousandths, 0..=1000)),
            ));
        }

        Ok(opacity)
    }
}

/// The mapping for a single variable.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum Mapping {
    /// A role's color at some opacity.
    Single(Layer),
    /// Layers composited in order.
    ///
    /// The first layer is the base and always is opaque. Each further layer
    /// is composited on top at its opacity.
    Layers(Vec<Layer>),
}

/// A mapping table from variable names to mappings.
pub type MappingTable = BTreeMap<String, Mapping>;

/// Mapping tables for both modes.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mappings {
    pub light: MappingTable,
    pub dark: MappingTable,
}

impl Mappings {
    /// Get the mapping table for the given mode.
    pub fn get(&self, mode: Mode) -> &MappingTable {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Map the scheme's colors to variables.
///
/// This function starts with a copy of the defaults and then overwrites each
/// variable in the mapping table. Single-role mappings that are opaque produce
/// hashed hexadecimal colors, e.g., `#6750a4`, and translucent ones produce
/// CSS `rgba()` colors, e.g., `rgba(103, 80, 164, 0.5)`. Layered mappings
/// always produce hashed hexadecimal colors.
///
/// # Examples
///
/// ```
/// # use std::collections::BTreeMap;
/// # use tonality::{preset::{map_colors, Layer, Mapping}, Argb, CorePalette, Role, Scheme};
/// let scheme = Scheme::light(&CorePalette::of(Argb::new(0xff6750a4)));
/// let mut mapping = BTreeMap::new();
/// mapping.insert("accent_color".to_string(), Mapping::Single(Layer::opaque(Role::Primary)));
/// let variables = map_colors(&mapping, &BTreeMap::new(), &scheme)?;
/// assert_eq!(variables["accent_color"], "#6750a4");
/// # Ok::<(), tonality::error::PresetError>(())
/// ```
pub fn map_colors(
    mapping: &MappingTable,
    defaults: &BTreeMap<String, String>,
    scheme: &Scheme,
) -> Result<BTreeMap<String, String>, PresetError> {
    let mut variables = defaults.clone();

    for (variable, entry) in mapping {
        let value = match entry {
            Mapping::Single(layer) => {
                let opacity = layer.validate(variable)?;
                let color = scheme[layer.color];
                if opacity == 1.0 {
                    color.to_string()
                } else {
                    format_rgba(color.red(), color.green(), color.blue(), opacity)
                }
            }
            Mapping::Layers(layers) => {
                let (base, rest) = layers
                    .split_first()
                    .ok_or_else(|| PresetError::new(variable.as_str(), PresetErrorKind::NoLayers))?;
                base.validate(variable)?;

                let overlays = rest
                    .iter()
                    .map(|layer| layer.validate(variable).map(|opacity| (scheme[layer.color], opacity)))
                    .collect::<Result<Vec<_>, PresetError>>()?;
                compose(scheme[base.color], &overlays).to_string()
            }
        };

        variables.insert(variable.clone(), value);
    }

    Ok(variables)
}
