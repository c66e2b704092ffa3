//! Spyglass configuration records
//!
//! [`SpyglassOptions`] is the committed record: every field holds the last
//! successfully applied value. [`SpyglassOptionsPatch`] is a merge-patch over
//! it. Numeric values are clamped rather than rejected, and JSON patches drop
//! unknown keys and wrong-typed values instead of failing.

use crate::core::constants::{
    DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH, DEFAULT_OPACITY, DEFAULT_SIZE, MIN_SIZE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outline of the spyglass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpyglassShape {
    #[default]
    Circle,
    Square,
}

impl SpyglassShape {
    /// Parses exactly `"circle"` or `"square"`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpyglassOptions {
    /// Any CSS color
    pub border_color: String,
    /// Border width in pixels, >= 0
    pub border_width: f64,
    /// Opacity of the spyglass render surface, in [0, 1]
    pub opacity: f64,
    pub shape: SpyglassShape,
    /// Width and height in pixels, >= 1
    pub size: f64,
}

impl Default for SpyglassOptions {
    fn default() -> Self {
        Self {
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            opacity: DEFAULT_OPACITY,
            shape: SpyglassShape::Circle,
            size: DEFAULT_SIZE,
        }
    }
}

impl SpyglassOptions {
    /// Loads a full record from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(crate::MapError::from)?;
        Ok(options.merged(&options.to_patch()))
    }

    /// Returns a fresh record with `patch` clamped and merged over `self`
    pub fn merged(&self, patch: &SpyglassOptionsPatch) -> Self {
        let patch = patch.clamped();
        Self {
            border_color: patch
                .border_color
                .unwrap_or_else(|| self.border_color.clone()),
            border_width: patch.border_width.unwrap_or(self.border_width),
            opacity: patch.opacity.unwrap_or(self.opacity),
            shape: patch.shape.unwrap_or(self.shape),
            size: patch.size.unwrap_or(self.size),
        }
    }

    /// Patch that sets every field to this record's value
    pub fn to_patch(&self) -> SpyglassOptionsPatch {
        SpyglassOptionsPatch {
            border_color: Some(self.border_color.clone()),
            border_width: Some(self.border_width),
            opacity: Some(self.opacity),
            shape: Some(self.shape),
            size: Some(self.size),
        }
    }
}

/// Partial options. `None` fields are left untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpyglassOptionsPatch {
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub opacity: Option<f64>,
    pub shape: Option<SpyglassShape>,
    pub size: Option<f64>,
}

impl SpyglassOptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn shape(mut self, shape: SpyglassShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds a patch from loosely typed JSON.
    ///
    /// Unknown keys, values of the wrong type, shape strings other than
    /// `"circle"`/`"square"` and non-finite numbers are dropped.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        let number = |key: &str| object.get(key).and_then(Value::as_f64).filter(|n| n.is_finite());

        Self {
            border_color: object
                .get("borderColor")
                .and_then(Value::as_str)
                .map(str::to_string),
            border_width: number("borderWidth"),
            opacity: number("opacity"),
            shape: object
                .get("shape")
                .and_then(Value::as_str)
                .and_then(SpyglassShape::parse),
            size: number("size"),
        }
    }

    /// Returns a clamped copy. `self` is left as the caller passed it.
    pub fn clamped(&self) -> Self {
        let finite = |v: Option<f64>| v.filter(|n| n.is_finite());
        Self {
            border_color: self.border_color.clone(),
            border_width: finite(self.border_width).map(|w| w.max(0.0)),
            opacity: finite(self.opacity).map(|o| o.clamp(0.0, 1.0)),
            shape: self.shape,
            size: finite(self.size).map(|s| s.max(MIN_SIZE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = SpyglassOptions::default();
        assert_eq!(options.border_color, "#555555");
        assert_eq!(options.border_width, 5.0);
        assert_eq!(options.opacity, 1.0);
        assert_eq!(options.shape, SpyglassShape::Circle);
        assert_eq!(options.size, 350.0);
    }

    #[test]
    fn test_clamping() {
        let base = SpyglassOptions::default();
        assert_eq!(base.merged(&SpyglassOptionsPatch::new().opacity(5.0)).opacity, 1.0);
        assert_eq!(base.merged(&SpyglassOptionsPatch::new().opacity(-2.0)).opacity, 0.0);
        assert_eq!(
            base.merged(&SpyglassOptionsPatch::new().border_width(-10.0))
                .border_width,
            0.0
        );
        assert_eq!(base.merged(&SpyglassOptionsPatch::new().size(0.0)).size, 1.0);
    }

    #[test]
    fn test_clamped_leaves_input_untouched() {
        let patch = SpyglassOptionsPatch::new().opacity(5.0).border_width(-1.0);
        let clamped = patch.clamped();
        assert_eq!(patch.opacity, Some(5.0));
        assert_eq!(patch.border_width, Some(-1.0));
        assert_eq!(clamped.opacity, Some(1.0));
        assert_eq!(clamped.border_width, Some(0.0));
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let base = SpyglassOptions::default().merged(
            &SpyglassOptionsPatch::new()
                .shape(SpyglassShape::Square)
                .size(200.0),
        );
        let merged = base.merged(&SpyglassOptionsPatch::new().border_color("#fff"));

        assert_eq!(merged.border_color, "#fff");
        assert_eq!(merged.shape, SpyglassShape::Square);
        assert_eq!(merged.size, 200.0);
        assert_eq!(merged.opacity, base.opacity);
        assert_eq!(merged.border_width, base.border_width);
    }

    #[test]
    fn test_from_json_ignores_bad_keys() {
        let patch = SpyglassOptionsPatch::from_json(&json!({
            "shape": "triangle",
            "borderWidth": "wide",
            "opacity": 0.25,
            "size": null,
            "borderColor": 42,
            "zIndex": 10
        }));

        assert_eq!(patch, SpyglassOptionsPatch::new().opacity(0.25));
        assert!(SpyglassOptionsPatch::from_json(&json!("circle")).is_empty());
        assert_eq!(
            SpyglassOptionsPatch::from_json(&json!({"shape": "square"})).shape,
            Some(SpyglassShape::Square)
        );
        assert!(SpyglassOptionsPatch::from_json(&json!({"shape": "Circle"})).is_empty());
    }

    #[test]
    fn test_non_finite_numbers_dropped() {
        let patch = SpyglassOptionsPatch::new().size(f64::NAN).opacity(f64::INFINITY);
        assert!(patch.clamped().size.is_none());
        assert!(patch.clamped().opacity.is_none());
    }

    #[test]
    fn test_options_json_roundtrip_names() {
        let options = SpyglassOptions::from_json_str(
            r##"{"borderColor": "#ff0000", "shape": "square", "opacity": 3}"##,
        )
        .unwrap();
        assert_eq!(options.border_color, "#ff0000");
        assert_eq!(options.shape, SpyglassShape::Square);
        assert_eq!(options.opacity, 1.0);
        assert_eq!(options.size, 350.0);

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["borderWidth"], json!(5.0));
        assert!(SpyglassOptions::from_json_str("not json").is_err());
    }
}
