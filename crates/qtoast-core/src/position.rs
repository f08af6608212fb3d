#![forbid(unsafe_code)]

//! Screen anchor positions for toasts.

use serde::{Deserialize, Serialize};

use crate::motion::ToastMotion;

/// Screen position a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    #[default]
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Top edge, horizontally centred.
    TopCenter,
    /// Bottom edge, horizontally centred.
    BottomCenter,
    /// Middle of the screen.
    Center,
    /// Left edge, vertically centred.
    CenterLeft,
    /// Right edge, vertically centred.
    CenterRight,
}

/// Horizontal anchoring of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

impl ToastPosition {
    /// All positions in declaration order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopCenter,
        Self::BottomCenter,
        Self::Center,
        Self::CenterLeft,
        Self::CenterRight,
    ];

    /// Parse a position name.
    ///
    /// Accepts `top-right`, `top_right`, `topRight` and `TopRight` spellings.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "topleft" => Some(Self::TopLeft),
            "topright" => Some(Self::TopRight),
            "bottomleft" => Some(Self::BottomLeft),
            "bottomright" => Some(Self::BottomRight),
            "topcenter" => Some(Self::TopCenter),
            "bottomcenter" => Some(Self::BottomCenter),
            "center" => Some(Self::Center),
            "centerleft" => Some(Self::CenterLeft),
            "centerright" => Some(Self::CenterRight),
            _ => None,
        }
    }

    /// Kebab-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::TopCenter => "top-center",
            Self::BottomCenter => "bottom-center",
            Self::Center => "center",
            Self::CenterLeft => "center-left",
            Self::CenterRight => "center-right",
        }
    }

    #[must_use]
    pub const fn horizontal(self) -> HorizontalAnchor {
        match self {
            Self::TopLeft | Self::BottomLeft | Self::CenterLeft => HorizontalAnchor::Left,
            Self::TopCenter | Self::BottomCenter | Self::Center => HorizontalAnchor::Center,
            Self::TopRight | Self::BottomRight | Self::CenterRight => HorizontalAnchor::Right,
        }
    }

    #[must_use]
    pub const fn vertical(self) -> VerticalAnchor {
        match self {
            Self::TopLeft | Self::TopRight | Self::TopCenter => VerticalAnchor::Top,
            Self::CenterLeft | Self::CenterRight | Self::Center => VerticalAnchor::Center,
            Self::BottomLeft | Self::BottomRight | Self::BottomCenter => VerticalAnchor::Bottom,
        }
    }

    /// Exit animation for toasts anchored here.
    ///
    /// Horizontal anchoring wins for corners, so `top-right` slides right.
    #[must_use]
    pub const fn exit_motion(self) -> ToastMotion {
        match (self.horizontal(), self.vertical()) {
            (HorizontalAnchor::Right, _) => ToastMotion::SlideRight,
            (HorizontalAnchor::Left, _) => ToastMotion::SlideLeft,
            (HorizontalAnchor::Center, VerticalAnchor::Top) => ToastMotion::SlideUp,
            (HorizontalAnchor::Center, VerticalAnchor::Bottom) => ToastMotion::SlideDown,
            (HorizontalAnchor::Center, VerticalAnchor::Center) => ToastMotion::ScaleDown,
        }
    }

    /// Calculate the toast's top-left origin within a viewport.
    ///
    /// Returns `(x, y)` for a toast of the given size, keeping `margin` cells
    /// from the anchored edges.
    #[must_use]
    pub fn origin(
        self,
        viewport_width: u16,
        viewport_height: u16,
        toast_width: u16,
        toast_height: u16,
        margin: u16,
    ) -> (u16, u16) {
        let x = match self.horizontal() {
            HorizontalAnchor::Left => margin,
            HorizontalAnchor::Center => viewport_width.saturating_sub(toast_width) / 2,
            HorizontalAnchor::Right => viewport_width
                .saturating_sub(toast_width)
                .saturating_sub(margin),
        };
        let y = match self.vertical() {
            VerticalAnchor::Top => margin,
            VerticalAnchor::Center => viewport_height.saturating_sub(toast_height) / 2,
            VerticalAnchor::Bottom => viewport_height
                .saturating_sub(toast_height)
                .saturating_sub(margin),
        };
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_top_right() {
        assert_eq!(ToastPosition::default(), ToastPosition::TopRight);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        for position in ToastPosition::ALL {
            assert_eq!(ToastPosition::parse(position.as_str()), Some(position));
        }
        assert_eq!(
            ToastPosition::parse("bottomLeft"),
            Some(ToastPosition::BottomLeft)
        );
        assert_eq!(
            ToastPosition::parse("center_right"),
            Some(ToastPosition::CenterRight)
        );
        assert_eq!(ToastPosition::parse("middle"), None);
    }

    #[test]
    fn exit_motion_mapping_is_fixed() {
        use ToastMotion::*;
        let expected = [
            (ToastPosition::TopLeft, SlideLeft),
            (ToastPosition::TopRight, SlideRight),
            (ToastPosition::BottomLeft, SlideLeft),
            (ToastPosition::BottomRight, SlideRight),
            (ToastPosition::TopCenter, SlideUp),
            (ToastPosition::BottomCenter, SlideDown),
            (ToastPosition::Center, ScaleDown),
            (ToastPosition::CenterLeft, SlideLeft),
            (ToastPosition::CenterRight, SlideRight),
        ];
        for (position, motion) in expected {
            assert_eq!(position.exit_motion(), motion, "{position:?}");
        }
    }

    #[test]
    fn origin_respects_anchors() {
        assert_eq!(ToastPosition::TopLeft.origin(80, 24, 20, 3, 1), (1, 1));
        assert_eq!(ToastPosition::TopRight.origin(80, 24, 20, 3, 1), (59, 1));
        assert_eq!(ToastPosition::BottomCenter.origin(80, 24, 20, 3, 1), (30, 20));
        assert_eq!(ToastPosition::Center.origin(80, 24, 20, 4, 1), (30, 10));
    }

    #[test]
    fn origin_saturates_when_toast_is_larger_than_viewport() {
        assert_eq!(ToastPosition::BottomRight.origin(10, 2, 20, 3, 1), (0, 0));
    }
}
