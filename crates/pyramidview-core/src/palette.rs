use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque RGB color with the name it was given in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamedColor {
    pub name: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS color names understood by [`NamedColor::parse`].
const KNOWN_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("skyblue", [135, 206, 235]),
    ("lightgreen", [144, 238, 144]),
    ("salmon", [250, 128, 114]),
    ("gold", [255, 215, 0]),
    ("violet", [238, 130, 238]),
    ("orange", [255, 165, 0]),
    ("tomato", [255, 99, 71]),
    ("teal", [0, 128, 128]),
    ("steelblue", [70, 130, 180]),
    ("orchid", [218, 112, 214]),
];

impl NamedColor {
    pub fn new(name: &str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name: name.to_string(),
            r,
            g,
            b,
        }
    }

    /// Parse a CSS color name (case-insensitive) or a `#RRGGBB` hex string.
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| ColorError::InvalidHex(spec.to_string()));
        }
        let lower = spec.to_ascii_lowercase();
        KNOWN_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(name, [r, g, b])| Self::new(name, *r, *g, *b))
            .ok_or_else(|| ColorError::UnknownName(spec.to_string()))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            name: format!("#{}", hex.to_ascii_uppercase()),
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn black() -> Self {
        Self::new("black", 0, 0, 0)
    }

    pub fn to_f32_array(&self, opacity: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            opacity,
        ]
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for NamedColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NamedColor> for String {
    fn from(color: NamedColor) -> Self {
        color.name
    }
}

/// A fixed, non-empty sequence of colors, indexed cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NamedColor>", into = "Vec<NamedColor>")]
pub struct Palette {
    colors: Vec<NamedColor>,
}

impl Palette {
    pub fn new(colors: Vec<NamedColor>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build a palette from color names or hex strings.
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self, ColorError> {
        let colors = specs
            .iter()
            .map(|s| NamedColor::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// The eight-color house palette: teal, beige, slate, brown, red-orange,
    /// off-white, mid gray, amber.
    pub fn dojo() -> Self {
        Self {
            colors: vec![
                NamedColor::new("#6CA0A3", 0x6C, 0xA0, 0xA3),
                NamedColor::new("#D0C1A5", 0xD0, 0xC1, 0xA5),
                NamedColor::new("#2F3E46", 0x2F, 0x3E, 0x46),
                NamedColor::new("#403931", 0x40, 0x39, 0x31),
                NamedColor::new("#E3584D", 0xE3, 0x58, 0x4D),
                NamedColor::new("#F0F0F0", 0xF0, 0xF0, 0xF0),
                NamedColor::new("#7A7D80", 0x7A, 0x7D, 0x80),
                NamedColor::new("#F2B66D", 0xF2, 0xB6, 0x6D),
            ],
        }
    }

    /// Color for the item at `index`; item `i` and item `i + len()` match.
    pub fn color_for(&self, index: usize) -> &NamedColor {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                NamedColor::new("skyblue", 135, 206, 235),
                NamedColor::new("lightgreen", 144, 238, 144),
                NamedColor::new("salmon", 250, 128, 114),
                NamedColor::new("gold", 255, 215, 0),
                NamedColor::new("violet", 238, 130, 238),
            ],
        }
    }
}

impl TryFrom<Vec<NamedColor>> for Palette {
    type Error = ColorError;

    fn try_from(colors: Vec<NamedColor>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<NamedColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
