//! Color schemes mapping semantic roles to colors.
//!
//! A [`Scheme`] assigns a color to each of the [`Role::COUNT`] roles of a
//! user interface, e.g., [`Role::Primary`] for prominent buttons or
//! [`Role::OnPrimary`] for their labels. The declarative tables
//! [`LIGHT_ROLES`] and [`DARK_ROLES`] determine which palette and tone each
//! role draws from. Roles meant to be used together, such as a container and
//! its "on" role, differ in tone by at least 50 in the tables, which
//! guarantees a contrast ratio of at least 4.5:1.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::OutOfBoundsError;
use crate::palette::PaletteKey::{
    Error as E, Neutral as N1, NeutralVariant as N2, Primary as A1, Secondary as A2,
    Tertiary as A3,
};
use crate::palette::{CorePalette, PaletteKey};
use crate::{Argb, Float};

/// A user interface's light or dark appearance.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tonality.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Mode {
    /// Get the mode for the given dark-mode flag.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Determine whether this mode is dark.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get this mode's name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

// ====================================================================================================================

/// A semantic color role.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "tonality.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
}

const ROLE_NAMES: [&str; Role::COUNT] = [
    "primary",
    "onPrimary",
    "primaryContainer",
    "onPrimaryContainer",
    "secondary",
    "onSecondary",
    "secondaryContainer",
    "onSecondaryContainer",
    "tertiary",
    "onTertiary",
    "tertiaryContainer",
    "onTertiaryContainer",
    "error",
    "onError",
    "errorContainer",
    "onErrorContainer",
    "background",
    "onBackground",
    "surface",
    "onSurface",
    "surfaceVariant",
    "onSurfaceVariant",
    "outline",
    "outlineVariant",
    "shadow",
    "scrim",
    "inverseSurface",
    "inverseOnSurface",
    "inversePrimary",
];

impl Role {
    /// The total number of roles.
    pub const COUNT: usize = 29;

    /// All roles in canonical order.
    pub const ALL: [Role; Role::COUNT] = {
        use Role::*;
        [
            Primary,
            OnPrimary,
            PrimaryContainer,
            OnPrimaryContainer,
            Secondary,
            OnSecondary,
            SecondaryContainer,
            OnSecondaryContainer,
            Tertiary,
            OnTertiary,
            TertiaryContainer,
            OnTertiaryContainer,
            Error,
            OnError,
            ErrorContainer,
            OnErrorContainer,
            Background,
            OnBackground,
            Surface,
            OnSurface,
            SurfaceVariant,
            OnSurfaceVariant,
            Outline,
            OutlineVariant,
            Shadow,
            Scrim,
            InverseSurface,
            InverseOnSurface,
            InversePrimary,
        ]
    };

    /// Create a new iterator over all roles in canonical order.
    pub fn all() -> RoleIterator {
        RoleIterator::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Role {
    /// Create a new iterator over all roles in canonical order. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> RoleIterator {
        RoleIterator::new()
    }

    /// Look up the role with the given camel-cased name.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_name(name: &str) -> Option<Role> {
        ROLE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|index| Role::ALL[index])
    }

    /// Get this role's camel-cased name, e.g., `onPrimaryContainer`.
    pub fn name(&self) -> &'static str {
        ROLE_NAMES[*self as usize]
    }

    /// Get this role's kebab-cased name, e.g., `on-primary-container`.
    pub fn kebab_name(&self) -> String {
        let mut kebab = String::with_capacity(self.name().len() + 4);
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                kebab.push('-');
                kebab.push(c.to_ascii_lowercase());
            } else {
                kebab.push(c);
            }
        }
        kebab
    }

    /// Render a debug representation for this role. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl TryFrom<usize> for Role {
    type Error = OutOfBoundsError;

    fn try_from(value: usize) -> Result<Self, OutOfBoundsError> {
        Role::ALL
            .get(value)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(value, 0..=Role::COUNT - 1))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An iterator over roles.
///
/// [`Role::all`] returns this iterator, which produces all roles in the
/// canonical order. It is fused, i.e., after returning `None` once, it will
/// keep returning `None`. It also is exact, i.e., its `size_hint()` returns
/// the exact number of remaining items.
#[cfg_attr(feature = "pyffi", pyclass(module = "tonality.color"))]
#[derive(Debug)]
pub struct RoleIterator {
    index: usize,
}

impl RoleIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for RoleIterator {
    type Item = Role;

    fn next(&mut self) -> Option<Self::Item> {
        let item = Role::ALL.get(self.index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Role::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for RoleIterator {
    fn len(&self) -> usize {
        Role::COUNT - self.index
    }
}

impl std::iter::FusedIterator for RoleIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl RoleIterator {
    /// Get the number of remaining roles. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next role. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Role> {
        slf.next()
    }
}

// ====================================================================================================================

/// The palette and tone of each role in a light scheme.
#[rustfmt::skip]
pub const LIGHT_ROLES: [(Role, PaletteKey, u8); Role::COUNT] = [
    (Role::Primary,              A1,  40),
    (Role::OnPrimary,            A1, 100),
    (Role::PrimaryContainer,     A1,  90),
    (Role::OnPrimaryContainer,   A1,  10),
    (Role::Secondary,            A2,  40),
    (Role::OnSecondary,          A2, 100),
    (Role::SecondaryContainer,   A2,  90),
    (Role::OnSecondaryContainer, A2,  10),
    (Role::Tertiary,             A3,  40),
    (Role::OnTertiary,           A3, 100),
    (Role::TertiaryContainer,    A3,  90),
    (Role::OnTertiaryContainer,  A3,  10),
    (Role::Error,                E,   40),
    (Role::OnError,              E,  100),
    (Role::ErrorContainer,       E,   90),
    (Role::OnErrorContainer,     E,   10),
    (Role::Background,           N1,  99),
    (Role::OnBackground,         N1,  10),
    (Role::Surface,              N1,  99),
    (Role::OnSurface,            N1,  10),
    (Role::SurfaceVariant,       N2,  90),
    (Role::OnSurfaceVariant,     N2,  30),
    (Role::Outline,              N2,  50),
    (Role::OutlineVariant,       N2,  80),
    (Role::Shadow,               N1,   0),
    (Role::Scrim,                N1,   0),
    (Role::InverseSurface,       N1,  20),
    (Role::InverseOnSurface,     N1,  95),
    (Role::InversePrimary,       A1,  80),
];

/// The palette and tone of each role in a dark scheme.
///
/// `onErrorContainer` uses tone 80, not 90, which keeps error text on error
/// containers in the same tone as the error color itself.
#[rustfmt::skip]
pub const DARK_ROLES: [(Role, PaletteKey, u8); Role::COUNT] = [
    (Role::Primary,              A1,  80),
    (Role::OnPrimary,            A1,  20),
    (Role::PrimaryContainer,     A1,  30),
    (Role::OnPrimaryContainer,   A1,  90),
    (Role::Secondary,            A2,  80),
    (Role::OnSecondary,          A2,  20),
    (Role::SecondaryContainer,   A2,  30),
    (Role::OnSecondaryContainer, A2,  90),
    (Role::Tertiary,             A3,  80),
    (Role::OnTertiary,           A3,  20),
    (Role::TertiaryContainer,    A3,  30),
    (Role::OnTertiaryContainer,  A3,  90),
    (Role::Error,                E,   80),
    (Role::OnError,              E,   20),
    (Role::ErrorContainer,       E,   30),
    (Role::OnErrorContainer,     E,   80),
    (Role::Background,           N1,  10),
    (Role::OnBackground,         N1,  90),
    (Role::Surface,              N1,  10),
    (Role::OnSurface,            N1,  90),
    (Role::SurfaceVariant,       N2,  30),
    (Role::OnSurfaceVariant,     N2,  80),
    (Role::Outline,              N2,  60),
    (Role::OutlineVariant,       N2,  30),
    (Role::Shadow,               N1,   0),
    (Role::Scrim,                N1,   0),
    (Role::InverseSurface,       N1,  90),
    (Role::InverseOnSurface,     N1,  20),
    (Role::InversePrimary,       A1,  40),
];

// ====================================================================================================================

/// The prefix of CSS custom properties for scheme colors.
pub const CSS_PREFIX: &str = "--md-sys-color-";

/// A color scheme.
///
/// A scheme is a container with [`Role::COUNT`] colors, one for each role, in
/// the canonical order of [`Role::all`]. Like arrays, schemes are indexed,
/// but with [`Role`]s instead of numbers.
///
/// # Examples
///
/// ```
/// # use tonality::{Argb, CorePalette, Role, Scheme};
/// let scheme = Scheme::light(&CorePalette::of(Argb::new(0xff6750a4)));
/// assert_eq!(scheme[Role::Primary], Argb::new(0xff6750a4));
/// assert_eq!(scheme.get("onPrimary"), Some(Argb::new(0xffffffff)));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "tonality.color"))]
#[derive(Clone, PartialEq, Eq)]
pub struct Scheme {
    mode: Mode,
    inner: [Argb; Role::COUNT],
}

impl Scheme {
    /// Create a new scheme for the given mode.
    pub fn new(core: &CorePalette, mode: Mode) -> Self {
        let table = match mode {
            Mode::Light => &LIGHT_ROLES,
            Mode::Dark => &DARK_ROLES,
        };

        let mut inner = [Argb::default(); Role::COUNT];
        for &(role, key, tone) in table {
            inner[role as usize] = core.palette(key).tone(tone as Float);
        }

        Self { mode, inner }
    }

    /// Create a new light scheme.
    pub fn light(core: &CorePalette) -> Self {
        Self::new(core, Mode::Light)
    }

    /// Create a new dark scheme.
    pub fn dark(core: &CorePalette) -> Self {
        Self::new(core, Mode::Dark)
    }

    /// Get an iterator over the roles and their colors in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Role, Argb)> + '_ {
        Role::all().map(|role| (role, self[role]))
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Scheme {
    /// Create a new scheme for the given core palette and mode. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(core: &CorePalette, mode: Mode) -> Self {
        Self::new(core, mode)
    }

    /// Get the scheme's mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the color for the role with the given camel-cased name.
    pub fn get(&self, name: &str) -> Option<Argb> {
        Role::from_name(name).map(|role| self[role])
    }

    /// Get the scheme's colors as CSS custom properties.
    ///
    /// Each property is named after the role's kebab-cased name with the
    /// [`CSS_PREFIX`], e.g., `--md-sys-color-on-primary`, and its value is the
    /// color in hashed hexadecimal notation.
    pub fn css_properties(&self) -> Vec<(String, String)> {
        Role::all()
            .map(|role| {
                (
                    format!("{}{}", CSS_PREFIX, role.kebab_name()),
                    self[role].to_string(),
                )
            })
            .collect()
    }

    /// Get the color for the given role. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, role: Role) -> Argb {
        self[role]
    }

    /// Get the number of roles. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        Role::COUNT
    }

    /// Render a debug representation for this scheme. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl AsRef<[Argb]> for Scheme {
    fn as_ref(&self) -> &[Argb] {
        &self.inner
    }
}

impl std::ops::Index<Role> for Scheme {
    type Output = Argb;

    fn index(&self, index: Role) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::fmt::Debug for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_struct("Scheme");
        debugger.field("mode", &self.mode);
        for (role, color) in self.iter() {
            debugger.field(role.name(), &format_args!("{}", color));
        }
        debugger.finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod test {
    use super::{Mode, Role, Scheme, DARK_ROLES, LIGHT_ROLES};
    use crate::{Argb, CorePalette};

    const LIGHT_6750A4: [u32; Role::COUNT] = [
        0xff6750a4, 0xffffffff, 0xffeaddff, 0xff22005d, 0xff625b71, 0xffffffff, 0xffe8def8,
        0xff1e192b, 0xff7d5260, 0xffffffff, 0xffffd8e4, 0xff31101d, 0xffba1b1b, 0xffffffff,
        0xffffdad4, 0xff410001, 0xfffffbfe, 0xff1c1b1e, 0xfffffbfe, 0xff1c1b1e, 0xffe7e0ec,
        0xff49454f, 0xff79757f, 0xffcac4cf, 0xff000000, 0xff000000, 0xff313033, 0xfff4eff4,
        0xffd0bcff,
    ];

    const DARK_6750A4: [u32; Role::COUNT] = [
        0xffd0bcff, 0xff381e73, 0xff4f378b, 0xffeaddff, 0xffcbc2db, 0xff332d41, 0xff4a4458,
        0xffe8def8, 0xffefb8c8, 0xff4a2532, 0xff633b48, 0xffffd8e4, 0xffffb4a9, 0xff680003,
        0xff930006, 0xffffb4a9, 0xff1c1b1e, 0xffe6e1e5, 0xff1c1b1e, 0xffe6e1e5, 0xff49454f,
        0xffcac4cf, 0xff948f99, 0xff49454f, 0xff000000, 0xff000000, 0xffe6e1e5, 0xff313033,
        0xff6750a4,
    ];

    #[test]
    fn test_tables() {
        for (index, role) in Role::all().enumerate() {
            assert_eq!(LIGHT_ROLES[index].0, role);
            assert_eq!(DARK_ROLES[index].0, role);
            assert_eq!(Role::try_from(index), Ok(role));
        }
        assert!(Role::try_from(Role::COUNT).is_err(), "index past last role");
        assert_eq!(Role::all().len(), Role::COUNT);
    }

    #[test]
    fn test_names() {
        assert_eq!(Role::OnPrimaryContainer.name(), "onPrimaryContainer");
        assert_eq!(Role::OnPrimaryContainer.kebab_name(), "on-primary-container");
        assert_eq!(Role::InverseOnSurface.kebab_name(), "inverse-on-surface");
        assert_eq!(Role::from_name("surfaceVariant"), Some(Role::SurfaceVariant));
        assert_eq!(Role::from_name("surface-variant"), None);
        for role in Role::all() {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
    }

    #[test]
    fn test_light() {
        let scheme = Scheme::light(&CorePalette::of(Argb::new(0xff6750a4)));
        assert_eq!(scheme.mode(), Mode::Light);
        for (index, (role, color)) in scheme.iter().enumerate() {
            assert_eq!(color, Argb::new(LIGHT_6750A4[index]), "{}", role);
        }
    }

    #[test]
    fn test_dark() {
        let scheme = Scheme::dark(&CorePalette::of(Argb::new(0xff6750a4)));
        assert_eq!(scheme.mode(), Mode::Dark);
        for (index, (role, color)) in scheme.iter().enumerate() {
            assert_eq!(color, Argb::new(DARK_6750A4[index]), "{}", role);
        }
        assert_eq!(scheme[Role::OnErrorContainer], scheme[Role::Error]);
    }

    #[test]
    fn test_css_properties() {
        let scheme = Scheme::light(&CorePalette::of(Argb::new(0xff6750a4)));
        let properties = scheme.css_properties();
        assert_eq!(properties.len(), Role::COUNT);
        assert_eq!(
            properties[0],
            ("--md-sys-color-primary".to_string(), "#6750a4".to_string())
        );
        assert_eq!(
            properties[3],
            (
                "--md-sys-color-on-primary-container".to_string(),
                "#22005d".to_string()
            )
        );
    }

    #[test]
    fn test_contrast() {
        // Paired roles differ in tone by at least 50 in both modes.
        let core = CorePalette::of(Argb::new(0xff4285f4));
        for mode in [Mode::Light, Mode::Dark] {
            let scheme = Scheme::new(&core, mode);
            for (base, on) in [
                (Role::Primary, Role::OnPrimary),
                (Role::PrimaryContainer, Role::OnPrimaryContainer),
                (Role::Secondary, Role::OnSecondary),
                (Role::Tertiary, Role::OnTertiary),
                (Role::Error, Role::OnError),
                (Role::Surface, Role::OnSurface),
                (Role::Background, Role::OnBackground),
            ] {
                let delta = (scheme[base].lstar() - scheme[on].lstar()).abs();
                assert!(delta >= 49.0, "{} vs {}: {}", base, on, delta);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let scheme = Scheme::light(&CorePalette::of(Argb::new(0xff6750a4)));
        let json = serde_json::to_value(&scheme)?;
        assert_eq!(json["primary"], "#6750a4");
        assert_eq!(json["onSurfaceVariant"], "#49454f");
        assert_eq!(serde_json::to_string(&Role::OnPrimary)?, "\"onPrimary\"");
        assert_eq!(serde_json::to_string(&Mode::Dark)?, "\"dark\"");
        Ok(())
    }
}
