use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS-like length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Absolute pixels
    Px(f64),
    /// Percentage of the containing block
    Percent(f64),
    /// Offset back from the 50% midpoint, `calc(50% - {px}px)`
    CenterOffset(f64),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) if *px == 0.0 => f.write_str("0"),
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
            Length::CenterOffset(px) => write!(f, "calc(50% - {}px)", px),
        }
    }
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
}

/// Positioning scheme of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    Absolute,
}

/// Display mode of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    None,
}

/// A single style write targeting one visual facet of an element
#[derive(Debug, Clone, PartialEq)]
pub enum StyleProperty {
    Position(Positioning),
    BorderRadius(Length),
    BorderStyle(BorderStyle),
    /// Border width in pixels
    BorderWidth(f64),
    BorderColor(String),
    Opacity(f64),
    Left(Length),
    Top(Length),
    Width(Length),
    Height(Length),
    Display(Display),
}

/// Last applied value of each style property. `None` means never set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub position: Option<Positioning>,
    pub border_radius: Option<Length>,
    pub border_style: Option<BorderStyle>,
    pub border_width: Option<f64>,
    pub border_color: Option<String>,
    pub opacity: Option<f64>,
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub display: Option<Display>,
}

impl ElementStyle {
    /// Writes one property, leaving the others untouched
    pub fn apply(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::Position(value) => self.position = Some(value),
            StyleProperty::BorderRadius(value) => self.border_radius = Some(value),
            StyleProperty::BorderStyle(value) => self.border_style = Some(value),
            StyleProperty::BorderWidth(value) => self.border_width = Some(value),
            StyleProperty::BorderColor(value) => self.border_color = Some(value),
            StyleProperty::Opacity(value) => self.opacity = Some(value),
            StyleProperty::Left(value) => self.left = Some(value),
            StyleProperty::Top(value) => self.top = Some(value),
            StyleProperty::Width(value) => self.width = Some(value),
            StyleProperty::Height(value) => self.height = Some(value),
            StyleProperty::Display(value) => self.display = Some(value),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_css() {
        assert_eq!(Length::Percent(50.0).to_string(), "50%");
        assert_eq!(Length::ZERO.to_string(), "0");
        assert_eq!(Length::Px(5.0).to_string(), "5px");
        assert_eq!(Length::CenterOffset(180.0).to_string(), "calc(50% - 180px)");
        assert_eq!(Length::CenterOffset(5.5).to_string(), "calc(50% - 5.5px)");
    }

    #[test]
    fn test_apply_touches_one_property() {
        let mut style = ElementStyle::default();
        style.apply(StyleProperty::BorderColor("#fff".to_string()));
        style.apply(StyleProperty::Opacity(0.5));

        assert_eq!(style.border_color.as_deref(), Some("#fff"));
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.border_width, None);
        assert!(!style.is_hidden());

        style.apply(StyleProperty::Display(Display::None));
        assert!(style.is_hidden());
    }

    #[test]
    fn test_dimensions_are_independent() {
        let mut style = ElementStyle::default();
        style.apply(StyleProperty::Width(Length::Px(200.0)));
        assert_eq!(style.width, Some(Length::Px(200.0)));
        assert_eq!(style.height, None);

        style.apply(StyleProperty::Height(Length::Px(120.0)));
        assert_eq!(style.width.map(|w| w.to_string()).as_deref(), Some("200px"));
        assert_eq!(style.height.map(|h| h.to_string()).as_deref(), Some("120px"));
    }

    #[test]
    fn test_style_snapshot_json() {
        let mut style = ElementStyle::default();
        style.apply(StyleProperty::Position(Positioning::Absolute));
        style.apply(StyleProperty::BorderStyle(BorderStyle::Solid));
        style.apply(StyleProperty::Width(Length::Px(350.0)));
        style.apply(StyleProperty::Display(Display::None));

        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["position"], "absolute");
        assert_eq!(value["border_style"], "solid");
        assert_eq!(value["display"], "none");
        assert_eq!(value["width"], serde_json::json!({"Px": 350.0}));
        assert!(value["height"].is_null());

        let back: ElementStyle = serde_json::from_value(value).unwrap();
        assert_eq!(back, style);
    }
}
