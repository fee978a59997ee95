//! Mark-type classification for trace points.

use serde::{Deserialize, Serialize};

use crate::TraceError;

/// Feature type of a single trace point.
///
/// Singleton types describe the whole feature with one point. Extent types
/// come in start/end pairs: every point from a start code up to and including
/// its matching end code (later in the trace) carries the same feature. The
/// pairing is positional only and is never validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkType {
    /// Plain outline point.
    Point,
    Tip,
    Notch,
    Nick,
    Gouge,
    GougeEnd,
    Scallop,
    ScallopEnd,
    Wave,
    WaveEnd,
    /// Section missing from the fin.
    Missing,
    MissingEnd,
    /// Tooth rake or other scarring.
    Scar,
    Hole,
    /// Outline not visible in the photograph.
    Invisible,
    InvisibleEnd,
}

impl MarkType {
    /// Every variant, in legacy code order.
    pub const ALL: [MarkType; 16] = [
        MarkType::Point,
        MarkType::Tip,
        MarkType::Notch,
        MarkType::Nick,
        MarkType::Gouge,
        MarkType::GougeEnd,
        MarkType::Scallop,
        MarkType::ScallopEnd,
        MarkType::Wave,
        MarkType::WaveEnd,
        MarkType::Missing,
        MarkType::MissingEnd,
        MarkType::Scar,
        MarkType::Hole,
        MarkType::Invisible,
        MarkType::InvisibleEnd,
    ];

    /// Numeric code written by digitization tools (`Point = -2` ... `InvisibleEnd = 13`).
    pub const fn code(self) -> i32 {
        match self {
            MarkType::Point => -2,
            MarkType::Tip => -1,
            MarkType::Notch => 0,
            MarkType::Nick => 1,
            MarkType::Gouge => 2,
            MarkType::GougeEnd => 3,
            MarkType::Scallop => 4,
            MarkType::ScallopEnd => 5,
            MarkType::Wave => 6,
            MarkType::WaveEnd => 7,
            MarkType::Missing => 8,
            MarkType::MissingEnd => 9,
            MarkType::Scar => 10,
            MarkType::Hole => 11,
            MarkType::Invisible => 12,
            MarkType::InvisibleEnd => 13,
        }
    }

    /// Inverse of [`MarkType::code`].
    pub fn from_code(code: i32) -> Result<Self, TraceError> {
        // codes are contiguous from -2
        code.checked_add(2)
            .and_then(|shifted| usize::try_from(shifted).ok())
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(TraceError::UnknownMarkType(code))
    }

    /// A single point carries the whole feature.
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            MarkType::Point
                | MarkType::Tip
                | MarkType::Notch
                | MarkType::Nick
                | MarkType::Scar
                | MarkType::Hole
        )
    }

    pub const fn is_extent_start(self) -> bool {
        matches!(
            self,
            MarkType::Gouge
                | MarkType::Scallop
                | MarkType::Wave
                | MarkType::Missing
                | MarkType::Invisible
        )
    }

    pub const fn is_extent_end(self) -> bool {
        matches!(
            self,
            MarkType::GougeEnd
                | MarkType::ScallopEnd
                | MarkType::WaveEnd
                | MarkType::MissingEnd
                | MarkType::InvisibleEnd
        )
    }

    /// The other half of an extent pair (`Gouge <-> GougeEnd`, ...).
    pub const fn extent_partner(self) -> Option<MarkType> {
        match self {
            MarkType::Gouge => Some(MarkType::GougeEnd),
            MarkType::GougeEnd => Some(MarkType::Gouge),
            MarkType::Scallop => Some(MarkType::ScallopEnd),
            MarkType::ScallopEnd => Some(MarkType::Scallop),
            MarkType::Wave => Some(MarkType::WaveEnd),
            MarkType::WaveEnd => Some(MarkType::Wave),
            MarkType::Missing => Some(MarkType::MissingEnd),
            MarkType::MissingEnd => Some(MarkType::Missing),
            MarkType::Invisible => Some(MarkType::InvisibleEnd),
            MarkType::InvisibleEnd => Some(MarkType::Invisible),
            _ => None,
        }
    }

    /// Type set covering one whole feature: `{start, end}` for extent types,
    /// `{self}` for singletons.
    pub fn extent_types(self) -> Vec<MarkType> {
        match self.extent_partner() {
            Some(other) if self.is_extent_start() => vec![self, other],
            Some(other) => vec![other, self],
            None => vec![self],
        }
    }
}

impl TryFrom<i32> for MarkType {
    type Error = TraceError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Legacy traces store the code as a double; only integral values are accepted.
impl TryFrom<f64> for MarkType {
    type Error = TraceError;

    fn try_from(code: f64) -> Result<Self, Self::Error> {
        if code.fract() != 0.0 || code < i32::MIN as f64 || code > i32::MAX as f64 {
            return Err(TraceError::NonIntegralMarkType(code));
        }
        Self::from_code(code as i32)
    }
}

impl From<MarkType> for i32 {
    fn from(t: MarkType) -> Self {
        t.code()
    }
}
