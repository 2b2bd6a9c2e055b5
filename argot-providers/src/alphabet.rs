//! Font descriptor parsing.
//!
//! Alphabets are stored as descriptor strings in the form
//! `"<scale>% <family>"`, e.g. `"130% Tengwar"`. The scale prefix is
//! optional and defaults to 100. Parsing is best-effort: the settings form
//! previews fall back to unstyled text when a descriptor is absent or
//! unusable, so this module reports failure with `None` rather than an
//! error type.

use std::fmt;

/// Parsed form of an alphabet's font-descriptor string.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Relative size in percent of the surrounding text (100 = unscaled).
    pub scale_percent: f32,
    /// Font family name; may contain spaces.
    pub family: String,
}

impl FontDescriptor {
    /// Parse a descriptor string. Returns `None` when no family remains
    /// after stripping the optional scale prefix.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return None;
        }

        let (scale_percent, family) = match descriptor.split_once(char::is_whitespace) {
            // A leading `%` token must be a valid positive scale, or the
            // whole descriptor is unusable.
            Some((first, rest)) if first.ends_with('%') => (parse_scale(first)?, rest.trim()),
            Some(_) => (100.0, descriptor),
            // A bare scale with no family is not a usable descriptor.
            None if descriptor.ends_with('%') => return None,
            None => (100.0, descriptor),
        };

        if family.is_empty() {
            return None;
        }

        Some(Self {
            scale_percent,
            family: family.to_string(),
        })
    }

    /// Size multiplier relative to the surrounding text (1.0 = unscaled).
    pub fn scale_factor(&self) -> f32 {
        self.scale_percent / 100.0
    }
}

fn parse_scale(token: &str) -> Option<f32> {
    let number = token.strip_suffix('%')?;
    let scale: f32 = number.parse().ok()?;
    (scale > 0.0).then_some(scale)
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.scale_percent - 100.0).abs() < f32::EPSILON {
            write!(f, "{}", self.family)
        } else {
            write!(f, "{}% {}", self.scale_percent, self.family)
        }
    }
}
