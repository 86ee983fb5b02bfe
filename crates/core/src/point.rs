use crate::error::{Result, ValidationError};
use crate::units::parse_int;

/// Reference point inside the trigger element's own box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementAnchor {
    Top,
    Middle,
    Bottom,
}

impl ElementAnchor {
    /// Unrecognised names fall back to the top of the element.
    fn parse(name: &str) -> Self {
        match name {
            "middle" => ElementAnchor::Middle,
            "bottom" => ElementAnchor::Bottom,
            _ => ElementAnchor::Top,
        }
    }

    fn position(self, height: f64) -> f64 {
        match self {
            ElementAnchor::Top => 0.0,
            ElementAnchor::Middle => height / 2.0,
            ElementAnchor::Bottom => height,
        }
    }
}

/// Reference point in the viewport the element anchor is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAnchor {
    Top,
    Middle,
    Bottom,
    /// Any other name: the viewport height, ignoring the element anchor.
    Other,
}

impl ViewAnchor {
    fn parse(name: &str) -> Self {
        match name {
            "top" => ViewAnchor::Top,
            "middle" => ViewAnchor::Middle,
            "bottom" => ViewAnchor::Bottom,
            _ => ViewAnchor::Other,
        }
    }
}

/// Parsed form of `<element>-<view>[-offset]`, e.g. `top-bottom`,
/// `middle-middle-40` or `top-top--20` (offset -20).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDescriptor {
    pub element: ElementAnchor,
    pub view: ViewAnchor,
    pub offset: Option<i64>,
}

impl PointDescriptor {
    pub fn parse(descriptor: &str) -> Result<Self> {
        let parts: Vec<&str> = descriptor.split('-').collect();
        let invalid = || ValidationError::InvalidPoint(descriptor.to_string());

        let offset = match parts.as_slice() {
            [_, _, "", magnitude] => Some(-parse_int(magnitude).ok_or_else(invalid)?),
            [_, _, offset, ..] => Some(parse_int(offset).ok_or_else(invalid)?),
            _ => None,
        };

        Ok(Self {
            element: ElementAnchor::parse(parts.first().copied().unwrap_or_default()),
            view: ViewAnchor::parse(parts.get(1).copied().unwrap_or_default()),
            offset,
        })
    }

    /// Scroll-axis coordinate for an element of `element_height` in a
    /// viewport of `viewport_height`.
    pub fn resolve(&self, element_height: f64, viewport_height: f64) -> f64 {
        let anchor = self.element.position(element_height);
        let offset = self.offset.unwrap_or(0) as f64;
        let base = match self.view {
            ViewAnchor::Top => anchor,
            ViewAnchor::Middle => viewport_height / 2.0 - anchor,
            ViewAnchor::Bottom => viewport_height - anchor,
            ViewAnchor::Other => viewport_height,
        };
        base + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(descriptor: &str, height: f64) -> f64 {
        PointDescriptor::parse(descriptor)
            .unwrap()
            .resolve(height, 1000.0)
    }

    #[test]
    fn parses_anchors_and_offsets() {
        let p = PointDescriptor::parse("middle-bottom-40").unwrap();
        assert_eq!(p.element, ElementAnchor::Middle);
        assert_eq!(p.view, ViewAnchor::Bottom);
        assert_eq!(p.offset, Some(40));

        let p = PointDescriptor::parse("top-top--20").unwrap();
        assert_eq!(p.offset, Some(-20));

        let p = PointDescriptor::parse("top-top").unwrap();
        assert_eq!(p.offset, None);
    }

    #[test]
    fn resolves_view_anchors() {
        assert_eq!(point("top-top", 200.0), 0.0);
        assert_eq!(point("top-top--20", 200.0), -20.0);
        assert_eq!(point("bottom-top", 200.0), 200.0);
        assert_eq!(point("top-middle", 200.0), 500.0);
        assert_eq!(point("middle-middle", 200.0), 400.0);
        assert_eq!(point("bottom-bottom", 200.0), 800.0);
        assert_eq!(point("top-bottom-50", 200.0), 1050.0);
    }

    #[test]
    fn unknown_anchors_fall_through() {
        assert_eq!(point("side-top", 200.0), 0.0);
        assert_eq!(point("top-side", 200.0), 1000.0);
        assert_eq!(point("bottom-side-10", 200.0), 1010.0);
        assert_eq!(point("", 200.0), 1000.0);
    }

    #[test]
    fn resolution_is_pure() {
        let p = PointDescriptor::parse("middle-bottom--15").unwrap();
        let first = p.resolve(120.0, 900.0);
        assert_eq!(first, p.resolve(120.0, 900.0));
        assert_eq!(first, 900.0 - 60.0 - 15.0);
    }

    #[test]
    fn rejects_non_numeric_offsets() {
        assert!(PointDescriptor::parse("top-top-abc").is_err());
        assert!(PointDescriptor::parse("top-top-").is_err());
        assert!(PointDescriptor::parse("top-top--").is_err());
    }
}
