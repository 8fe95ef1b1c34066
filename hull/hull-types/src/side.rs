//! Port/starboard classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of the ship's centerline a piece of hull belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HullSide {
    /// Positive-z side.
    Port,
    /// Negative-z side.
    Starboard,
}

impl HullSide {
    /// Classify a lateral coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use hull_types::HullSide;
    ///
    /// assert_eq!(HullSide::of_z(1.5), HullSide::Port);
    /// assert_eq!(HullSide::of_z(-0.1), HullSide::Starboard);
    /// ```
    #[inline]
    #[must_use]
    pub fn of_z(z: f64) -> Self {
        if z > 0.0 {
            Self::Port
        } else {
            Self::Starboard
        }
    }

    /// The opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Port => Self::Starboard,
            Self::Starboard => Self::Port,
        }
    }
}
