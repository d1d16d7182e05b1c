//! Utility module bundling everything derived from one seed color.
//!
//! A [`Theme`] combines the seed or source color with the [`CorePalette`]
//! derived from it, the light and dark [`Scheme`]s built from that palette,
//! and any number of [`CustomColorGroup`]s. The latter are for colors that
//! have no role in a scheme but still need to fit in, e.g., brand colors or
//! the colors of status indicators.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::blend::harmonize;
use crate::error::ExtractError;
use crate::extract::Extractor;
use crate::palette::CorePalette;
use crate::scheme::{Mode, Scheme};
use crate::{Argb, Float};

/// A color to be included in a theme.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tonality.color.theme"))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomColor {
    /// The color.
    pub value: Argb,
    /// The color's name.
    pub name: String,
    /// The flag for harmonizing the color with the theme's source color.
    pub blend: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl CustomColor {
    /// Create a new custom color.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn new(value: Argb, name: String, blend: bool) -> Self {
        Self { value, name, blend }
    }
}

/// A color with its container and the colors drawn on top of the two.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, get_all, module = "tonality.color.theme"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorGroup {
    pub color: Argb,
    pub on_color: Argb,
    pub color_container: Argb,
    pub on_color_container: Argb,
}

impl ColorGroup {
    fn new(core: &CorePalette, mode: Mode) -> Self {
        let tones: [u8; 4] = match mode {
            Mode::Light => [40, 100, 90, 10],
            Mode::Dark => [80, 20, 30, 90],
        };
        let [color, on_color, color_container, on_color_container] =
            tones.map(|tone| core.primary().tone(tone as Float));

        Self {
            color,
            on_color,
            color_container,
            on_color_container,
        }
    }
}

/// A custom color with its light and dark color groups.
///
/// Both groups use tones of the primary palette derived from the, possibly
/// harmonized, custom color. They follow the same rules as the primary roles
/// of a [`Scheme`] and hence have the same contrast.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tonality.color.theme"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomColorGroup {
    color: CustomColor,
    value: Argb,
    light: ColorGroup,
    dark: ColorGroup,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl CustomColorGroup {
    /// Create the color groups for the custom color and source color.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn new(source: Argb, color: CustomColor) -> Self {
        let value = if color.blend {
            harmonize(color.value, source)
        } else {
            color.value
        };

        let core = CorePalette::of(value);
        Self {
            color,
            value,
            light: ColorGroup::new(&core, Mode::Light),
            dark: ColorGroup::new(&core, Mode::Dark),
        }
    }

    /// Get the custom color as requested.
    pub fn color(&self) -> CustomColor {
        self.color.clone()
    }

    /// Get the custom color after harmonization, if any.
    pub fn value(&self) -> Argb {
        self.value
    }

    /// Get the group for the given mode.
    pub fn group(&self, mode: Mode) -> ColorGroup {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }

    /// Get the light group.
    pub fn light(&self) -> ColorGroup {
        self.light
    }

    /// Get the dark group.
    pub fn dark(&self) -> ColorGroup {
        self.dark
    }
}

// ====================================================================================================================

/// A theme.
///
/// # Examples
///
/// ```
/// # use tonality::{Argb, Mode, Role, Theme};
/// let theme = Theme::from_source(Argb::new(0xff6750a4));
/// assert_eq!(theme.scheme(Mode::Light)[Role::Primary], Argb::new(0xff6750a4));
/// assert_eq!(theme.scheme(Mode::Dark)[Role::Primary], Argb::new(0xffd0bcff));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tonality.color.theme"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    source: Argb,
    #[cfg_attr(feature = "serde", serde(skip))]
    palettes: CorePalette,
    light: Scheme,
    dark: Scheme,
    custom_colors: Vec<CustomColorGroup>,
}

impl Theme {
    /// Create a new theme for the source color and custom colors.
    pub fn new(source: Argb, custom_colors: &[CustomColor]) -> Self {
        let palettes = CorePalette::of(source);
        let light = Scheme::light(&palettes);
        let dark = Scheme::dark(&palettes);

        Self {
            source,
            palettes,
            light,
            dark,
            custom_colors: custom_colors
                .iter()
                .map(|color| CustomColorGroup::new(source, color.clone()))
                .collect(),
        }
    }

    /// Create a new theme for the given pixels.
    ///
    /// This method uses the extractor to determine the source color.
    pub fn from_pixels(
        extractor: &Extractor,
        pixels: &[Argb],
        custom_colors: &[CustomColor],
    ) -> Result<Self, ExtractError> {
        let source = extractor.extract(pixels)?;
        Ok(Self::new(source, custom_colors))
    }

    /// Get the core palette.
    pub fn palettes(&self) -> &CorePalette {
        &self.palettes
    }

    /// Get the custom color groups.
    pub fn custom_colors(&self) -> &[CustomColorGroup] {
        &self.custom_colors
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Theme {
    /// Create a new theme for the source color without custom colors.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_source(source: Argb) -> Self {
        Self::new(source, &[])
    }

    /// Get the source color.
    pub fn source(&self) -> Argb {
        self.source
    }

    /// Get the scheme for the given mode.
    pub fn scheme(&self, mode: Mode) -> Scheme {
        match mode {
            Mode::Light => self.light.clone(),
            Mode::Dark => self.dark.clone(),
        }
    }

    /// Get the light scheme.
    pub fn light(&self) -> Scheme {
        self.light.clone()
    }

    /// Get the dark scheme.
    pub fn dark(&self) -> Scheme {
        self.dark.clone()
    }

    /// Create a new theme for the source color and custom colors. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(source: Argb, custom_colors: Vec<CustomColor>) -> Self {
        Self::new(source, &custom_colors)
    }

    /// Get the core palette. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "palettes")]
    pub fn py_palettes(&self) -> CorePalette {
        self.palettes.clone()
    }

    /// Get the custom color groups. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "custom_colors")]
    pub fn py_custom_colors(&self) -> Vec<CustomColorGroup> {
        self.custom_colors.clone()
    }
}

#[cfg(test)]
mod test {
    use super::{ColorGroup, CustomColor, CustomColorGroup, Theme};
    use crate::extract::Extractor;
    use crate::{Argb, CorePalette, Mode, Role, Scheme};

    const SOURCE: Argb = Argb::new(0xff6750a4);

    fn group(colors: [u32; 4]) -> ColorGroup {
        let [color, on_color, color_container, on_color_container] = colors.map(Argb::new);
        ColorGroup {
            color,
            on_color,
            color_container,
            on_color_container,
        }
    }

    #[test]
    fn test_theme() {
        let theme = Theme::from_source(SOURCE);
        let core = CorePalette::of(SOURCE);

        assert_eq!(theme.source(), SOURCE);
        assert_eq!(theme.palettes(), &core);
        assert_eq!(theme.light(), Scheme::light(&core));
        assert_eq!(theme.dark(), Scheme::dark(&core));
        assert_eq!(theme.scheme(Mode::Dark).mode(), Mode::Dark);
        assert_eq!(theme.scheme(Mode::from_dark(false))[Role::OnPrimary], Argb::new(0xffffffff));
        assert!(theme.custom_colors().is_empty(), "no custom colors");
    }

    #[test]
    fn test_custom_colors() {
        let blue = CustomColor::new(Argb::new(0xff0000ff), "info".into(), true);
        let green = CustomColor::new(Argb::new(0xff00ff00), "success".into(), false);
        let theme = Theme::new(SOURCE, &[blue.clone(), green.clone()]);
        let [info, success] = theme.custom_colors() else {
            panic!("theme should have two custom colors");
        };

        assert_eq!(info.color(), blue);
        assert_eq!(info.value(), Argb::new(0xff3f00ee));
        assert_eq!(info.light(), group([0xff5331ff, 0xffffffff, 0xffe5dfff, 0xff140068]));
        assert_eq!(info.dark(), group([0xffc7bfff, 0xff2500a2, 0xff3900e1, 0xffe5dfff]));

        assert_eq!(success.color(), green);
        assert_eq!(success.value(), Argb::new(0xff00ff00));
        assert_eq!(success.group(Mode::Light), group([0xff006f00, 0xffffffff, 0xff73ff5b, 0xff002200]));
        assert_eq!(success.group(Mode::Dark), group([0xff00e600, 0xff003a00, 0xff005300, 0xff73ff5b]));
    }

    #[test]
    fn test_harmonized_group() {
        let red = CustomColor::new(Argb::new(0xffff0000), "alert".into(), true);
        let alert = CustomColorGroup::new(SOURCE, red);
        assert_eq!(alert.value(), Argb::new(0xfffb0054));
        assert_eq!(alert.light().color, Argb::new(0xffbe003b));
        assert_eq!(alert.dark().on_color_container, Argb::new(0xffffdadd));
    }

    #[test]
    fn test_from_pixels() {
        let gray = Argb::new(0xff808080);
        let red = Argb::new(0xffff0000);
        let theme = Theme::from_pixels(&Extractor::default(), &[gray, gray, gray, red], &[]).unwrap();
        assert_eq!(theme.source(), red);
        assert_eq!(theme, Theme::from_source(red));

        assert!(Theme::from_pixels(&Extractor::default(), &[], &[]).is_err(), "no pixels");
    }
}
