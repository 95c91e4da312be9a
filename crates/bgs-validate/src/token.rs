//! Style token traits.
//!
//! Tokens are opaque strings (Tailwind classes or raw CSS). Validation only
//! needs a handful of traits, detected by substring or class matching and
//! computed once per call.

use std::sync::LazyLock;

use regex::Regex;

/// A `-50` shade suffix not followed by another digit (`bg-blue-50`,
/// `to-sky-50/80`), so `-500` does not count.
static VERY_LIGHT_SHADE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-50(?:[^0-9]|$)").expect("Invalid shade regex"));

/// A whole white color value: `white` as a word or class segment
/// (`bg-white`, `from-white/80`), or `#fff`/`#ffffff` not followed by
/// another hex digit.
static WHITE_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9a-z#])(?:white|#fff(?:fff)?)(?:[^0-9a-z]|$)")
        .expect("Invalid white value regex")
});

const WHITE_CSS: &[&str] = &["white", "#fff", "#ffffff"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenTraits {
    normalized: String,
    pub gradient: bool,
    pub radial: bool,
    pub blur: bool,
    pub backdrop_blur: bool,
    pub white: bool,
    pub very_light: bool,
}

impl TokenTraits {
    pub fn of(token: &str) -> Self {
        let normalized = token.trim().to_lowercase();
        Self {
            gradient: normalized.contains("gradient"),
            radial: normalized.contains("radial-gradient"),
            blur: normalized.contains("blur"),
            backdrop_blur: normalized.contains("backdrop-blur"),
            white: WHITE_VALUE_REGEX.is_match(&normalized),
            very_light: VERY_LIGHT_SHADE_REGEX.is_match(&normalized),
            normalized,
        }
    }

    /// True when a whitespace-separated class equals `name`, optionally
    /// with an opacity suffix (`bg-gray-50/80`).
    pub fn has_class(&self, name: &str) -> bool {
        self.normalized.split_whitespace().any(|class| {
            class == name
                || class
                    .strip_prefix(name)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Solid white: the `bg-white` class or a white CSS value on its own.
    pub fn is_solid_white(&self) -> bool {
        self.has_class("bg-white") || WHITE_CSS.contains(&self.normalized.as_str())
    }

    /// Gradient that is not radial.
    pub fn is_linear_gradient(&self) -> bool {
        self.gradient && !self.radial
    }
}
