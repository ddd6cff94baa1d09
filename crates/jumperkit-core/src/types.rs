//! Shared vocabulary types: panels, mirror modes, porting strategies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One side of a garment, each with its own design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Front,
    Back,
}

impl Panel {
    /// Both panels, front first.
    pub const ALL: [Panel; 2] = [Panel::Front, Panel::Back];

    /// The other panel.
    pub fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
        }
    }
}

/// Reflection axis for one-shot reflect.
///
/// `Horizontal` mirrors left/right (columns), `Vertical` mirrors
/// hem/neck (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Live mirror toggles applied to every paint action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorMode {
    /// Mirror across the vertical centerline (column flip).
    pub horizontal: bool,
    /// Mirror across the horizontal centerline (row flip).
    pub vertical: bool,
}

impl MirrorMode {
    pub const OFF: MirrorMode = MirrorMode {
        horizontal: false,
        vertical: false,
    };

    pub fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_off(&self) -> bool {
        !self.horizontal && !self.vertical
    }
}

/// How a design is remapped when the garment shape or size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PortStrategy {
    /// Proportional rescale of both axes.
    #[default]
    Scale,
    /// Centered offset, cells falling outside are clipped.
    CenterClip,
    /// Keep the neckline and left edge aligned.
    AnchorTopLeft,
    /// Centered offset.
    AnchorCenter,
    /// Keep the hem aligned and center horizontally.
    AnchorBottomCenter,
    /// Start over with an empty design.
    Discard,
}

impl PortStrategy {
    /// Every strategy, in the order shown in the porting dialog.
    pub const ALL: [PortStrategy; 6] = [
        PortStrategy::Scale,
        PortStrategy::CenterClip,
        PortStrategy::AnchorTopLeft,
        PortStrategy::AnchorCenter,
        PortStrategy::AnchorBottomCenter,
        PortStrategy::Discard,
    ];

    /// The kebab-case name used in settings and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::CenterClip => "center-clip",
            Self::AnchorTopLeft => "anchor-top-left",
            Self::AnchorCenter => "anchor-center",
            Self::AnchorBottomCenter => "anchor-bottom-center",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for PortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PortStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| format!("Unknown porting strategy: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in PortStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<PortStrategy>(), Ok(strategy));
        }
        assert!("sideways".parse::<PortStrategy>().is_err());
    }

    #[test]
    fn test_strategy_serde_uses_kebab_case() {
        let json = serde_json::to_string(&PortStrategy::AnchorBottomCenter).unwrap();
        assert_eq!(json, "\"anchor-bottom-center\"");
    }

    #[test]
    fn test_panel_opposite() {
        assert_eq!(Panel::Front.opposite(), Panel::Back);
        assert_eq!(Panel::Back.opposite(), Panel::Front);
        assert_eq!(Panel::default(), Panel::Front);
    }
}
