//! Subject list
//!
//! The cards shown by the widget are a fixed, ordered ring of subjects. Each
//! subject is identified by a color name and rendered with that color as the
//! card background.

use crate::error::{Result, SwipeCardError};
use std::fmt;

/// Subjects shown when no configuration overrides them
pub const DEFAULT_SUBJECTS: [&str; 5] = ["red", "green", "blue", "purple", "orange"];

/// CSS color keywords accepted as subject names
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0x00, 0x00, 0x00)),
    ("white", Rgb::new(0xff, 0xff, 0xff)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("grey", Rgb::new(0x80, 0x80, 0x80)),
    ("silver", Rgb::new(0xc0, 0xc0, 0xc0)),
    ("red", Rgb::new(0xff, 0x00, 0x00)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("crimson", Rgb::new(0xdc, 0x14, 0x3c)),
    ("tomato", Rgb::new(0xff, 0x63, 0x47)),
    ("coral", Rgb::new(0xff, 0x7f, 0x50)),
    ("salmon", Rgb::new(0xfa, 0x80, 0x72)),
    ("pink", Rgb::new(0xff, 0xc0, 0xcb)),
    ("hotpink", Rgb::new(0xff, 0x69, 0xb4)),
    ("orange", Rgb::new(0xff, 0xa5, 0x00)),
    ("gold", Rgb::new(0xff, 0xd7, 0x00)),
    ("yellow", Rgb::new(0xff, 0xff, 0x00)),
    ("olive", Rgb::new(0x80, 0x80, 0x00)),
    ("lime", Rgb::new(0x00, 0xff, 0x00)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("cyan", Rgb::new(0x00, 0xff, 0xff)),
    ("aqua", Rgb::new(0x00, 0xff, 0xff)),
    ("turquoise", Rgb::new(0x40, 0xe0, 0xd0)),
    ("skyblue", Rgb::new(0x87, 0xce, 0xeb)),
    ("blue", Rgb::new(0x00, 0x00, 0xff)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("indigo", Rgb::new(0x4b, 0x00, 0x82)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("violet", Rgb::new(0xee, 0x82, 0xee)),
    ("magenta", Rgb::new(0xff, 0x00, 0xff)),
    ("fuchsia", Rgb::new(0xff, 0x00, 0xff)),
    ("brown", Rgb::new(0xa5, 0x2a, 0x2a)),
    ("chocolate", Rgb::new(0xd2, 0x69, 0x1e)),
];

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS color keyword or a `#rgb` / `#rrggbb` hex string
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(hex) = name.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lowered = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(keyword, _)| *keyword == lowered)
            .map(|(_, rgb)| *rgb)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

/// One card subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    color: Rgb,
}

impl Subject {
    /// Resolve a subject from its color name
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let color = Rgb::parse(&name).ok_or_else(|| SwipeCardError::UnknownColor(name.clone()))?;
        Ok(Self { name, color })
    }

    /// Name as configured
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Card background color
    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Non-empty ring of subjects with exactly one current
#[derive(Debug, Clone)]
pub struct SubjectRing {
    subjects: Vec<Subject>,
    current: usize,
}

impl SubjectRing {
    /// Build a ring from color names, starting at the first
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subjects = names
            .into_iter()
            .map(Subject::new)
            .collect::<Result<Vec<_>>>()?;

        if subjects.is_empty() {
            return Err(SwipeCardError::EmptySubjectList);
        }

        Ok(Self {
            subjects,
            current: 0,
        })
    }

    /// The subject currently shown
    pub fn current(&self) -> &Subject {
        &self.subjects[self.current]
    }

    /// Index of the current subject
    pub fn index(&self) -> usize {
        self.current
    }

    /// Number of subjects
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Always `false`; an empty ring cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Move to the next subject, wrapping past the end
    pub fn advance(&mut self) -> &Subject {
        self.current = (self.current + 1) % self.subjects.len();
        self.current()
    }

    /// All subjects in order
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }
}

impl Default for SubjectRing {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS
                .iter()
                .filter_map(|name| Subject::new(*name).ok())
                .collect(),
            current: 0,
        }
    }
}
