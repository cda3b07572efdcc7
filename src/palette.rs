//! The palette of available paints.

use serde::{Deserialize, Serialize};

use crate::Float;

/// A paint available for mixing.
///
/// A paint couples a stable identifier and a human-readable name with the
/// paint's measured color as L*a*b* coordinates. Paint manufacturers publish
/// exactly these coordinates on technical data sheets, which is why the
/// palette is expressed in L*a*b* directly rather than in sRGB.
///
/// Paints are plain data: the search borrows the palette immutably and never
/// retains it past a call. The identifier must be unique within one palette;
/// the name is what recipes display and needn't be.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// The stable identifier, e.g., a manufacturer product code.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The lightness L*, nominally `0..=100`.
    pub l: Float,
    /// The green–red axis a*.
    pub a: Float,
    /// The blue–yellow axis b*.
    pub b: Float,
}

impl Paint {
    /// Create a new paint with the given identifier, name, and L*a*b*
    /// coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>, l: Float, a: Float, b: Float) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            l,
            a,
            b,
        }
    }

    /// Access this paint's color as a L*a*b* coordinate array.
    #[inline]
    pub fn lab(&self) -> [Float; 3] {
        [self.l, self.a, self.b]
    }
}
