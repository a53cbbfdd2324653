use serde::{Deserialize, Serialize};

/// Requested leader position. `Automatic` asks the engine to pick a concrete
/// position that keeps the callout inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderPosition {
    UpperLeft,
    Top,
    UpperRight,
    Right,
    LowerRight,
    Bottom,
    LowerLeft,
    Left,
    #[default]
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConcretePosition {
    UpperLeft,
    Top,
    UpperRight,
    Right,
    LowerRight,
    #[default]
    Bottom,
    LowerLeft,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderStyle {
    MidEdge,
    CornerNotch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl LeaderPosition {
    pub const ALL: [LeaderPosition; 9] = [
        Self::UpperLeft,
        Self::Top,
        Self::UpperRight,
        Self::Right,
        Self::LowerRight,
        Self::Bottom,
        Self::LowerLeft,
        Self::Left,
        Self::Automatic,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        let normalized: String = token
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "automatic" | "auto" => Some(Self::Automatic),
            other => ConcretePosition::from_normalized(other).map(Self::from),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.concrete() {
            Some(position) => position.as_str(),
            None => "automatic",
        }
    }

    pub fn concrete(self) -> Option<ConcretePosition> {
        match self {
            Self::UpperLeft => Some(ConcretePosition::UpperLeft),
            Self::Top => Some(ConcretePosition::Top),
            Self::UpperRight => Some(ConcretePosition::UpperRight),
            Self::Right => Some(ConcretePosition::Right),
            Self::LowerRight => Some(ConcretePosition::LowerRight),
            Self::Bottom => Some(ConcretePosition::Bottom),
            Self::LowerLeft => Some(ConcretePosition::LowerLeft),
            Self::Left => Some(ConcretePosition::Left),
            Self::Automatic => None,
        }
    }
}

impl From<ConcretePosition> for LeaderPosition {
    fn from(position: ConcretePosition) -> Self {
        match position {
            ConcretePosition::UpperLeft => Self::UpperLeft,
            ConcretePosition::Top => Self::Top,
            ConcretePosition::UpperRight => Self::UpperRight,
            ConcretePosition::Right => Self::Right,
            ConcretePosition::LowerRight => Self::LowerRight,
            ConcretePosition::Bottom => Self::Bottom,
            ConcretePosition::LowerLeft => Self::LowerLeft,
            ConcretePosition::Left => Self::Left,
        }
    }
}

impl ConcretePosition {
    /// Clockwise around the body, starting at the upper-left corner.
    pub const ALL: [ConcretePosition; 8] = [
        Self::UpperLeft,
        Self::Top,
        Self::UpperRight,
        Self::Right,
        Self::LowerRight,
        Self::Bottom,
        Self::LowerLeft,
        Self::Left,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        LeaderPosition::from_token(token).and_then(LeaderPosition::concrete)
    }

    fn from_normalized(token: &str) -> Option<Self> {
        match token {
            "upperleft" | "topleft" => Some(Self::UpperLeft),
            "top" => Some(Self::Top),
            "upperright" | "topright" => Some(Self::UpperRight),
            "right" => Some(Self::Right),
            "lowerright" | "bottomright" => Some(Self::LowerRight),
            "bottom" => Some(Self::Bottom),
            "lowerleft" | "bottomleft" => Some(Self::LowerLeft),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpperLeft => "upperLeft",
            Self::Top => "top",
            Self::UpperRight => "upperRight",
            Self::Right => "right",
            Self::LowerRight => "lowerRight",
            Self::Bottom => "bottom",
            Self::LowerLeft => "lowerLeft",
            Self::Left => "left",
        }
    }

    pub fn leader_style(self) -> LeaderStyle {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => LeaderStyle::MidEdge,
            Self::UpperLeft | Self::UpperRight | Self::LowerLeft | Self::LowerRight => {
                LeaderStyle::CornerNotch
            }
        }
    }

    pub fn is_upper(self) -> bool {
        matches!(self, Self::UpperLeft | Self::Top | Self::UpperRight)
    }

    pub fn is_left_family(self) -> bool {
        matches!(self, Self::UpperLeft | Self::Left | Self::LowerLeft)
    }

    pub fn is_right_family(self) -> bool {
        matches!(self, Self::UpperRight | Self::Right | Self::LowerRight)
    }
}

impl std::fmt::Display for ConcretePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for LeaderPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeaderPosition {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| crate::error::Error::UnknownPosition(s.to_string()))
    }
}
