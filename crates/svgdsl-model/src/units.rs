//! Closed keyword sets and measurement units.

use std::fmt;

/// Suffix appended to a length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Plain user units; no suffix.
    #[default]
    User,
    Percent,
    Millimeter,
    Centimeter,
    Inch,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::User => "",
            Unit::Percent => "%",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Inch => "in",
        }
    }
}

/// An integer length with a unit suffix, e.g. `100%` or `300`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub value: i64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: i64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value), Unit::User)
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value), Unit::User)
    }
}

impl From<(i32, Unit)> for Length {
    fn from((value, unit): (i32, Unit)) -> Self {
        Self::new(i64::from(value), unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Keyword for the `text-anchor` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
    Inherit,
}

impl TextAnchor {
    pub const ALL: [TextAnchor; 4] = [
        TextAnchor::Start,
        TextAnchor::Middle,
        TextAnchor::End,
        TextAnchor::Inherit,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
            TextAnchor::Inherit => "inherit",
        }
    }

    /// Look up an anchor by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.keyword() == keyword)
    }
}

/// Millimeters covered by one pixel at 90 dpi.
pub const MILLIMETERS_PER_PIXEL: f64 = 0.2822222;

/// Convert a pixel count to millimeters, assuming 90 dpi.
pub fn pixel_to_millimeter(pixels: u64) -> f64 {
    pixels as f64 * MILLIMETERS_PER_PIXEL
}
