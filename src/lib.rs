//! # Tintmix
//!
//! Tintmix computes mixing recipes for real paints: given a target color and
//! a palette of available paints, it finds the small integer-ratio
//! combinations that come perceptually closest to the target.
//!
//!
//! ## 1. Overview
//!
//! Tintmix's main abstractions are:
//!
//!   * [`Paint`] couples a paint's identifier and display name with its
//!     measured color as CIE L*a*b* coordinates, the perceptually uniform
//!     representation the whole pipeline computes in.
//!   * [`Mixer`] runs the search. Constructed once with [`SearchOptions`], it
//!     holds no mutable state, so a single instance can serve concurrent
//!     [`solve`](Mixer::solve) calls. For every recipe size in range, it
//!     enumerates paint subsets and ratio assignments, scores each mixture
//!     with CIEDE2000, and keeps the best candidate per size.
//!   * [`MixRecipe`] is one formatted winner: paint names with their ratios,
//!     an accuracy on a 0–100 scale, and the mixture's color as hashed
//!     hexadecimal sRGB.
//!
//! The coordinate-level building blocks are exported as plain functions:
//! [`parse_hex`] and [`format_hex`] for the string codec, [`srgb_to_lab`] and
//! [`lab_to_srgb`] for the conversion chain, [`delta_e_2000`] for the
//! difference metric, and [`mix`] for ratio-weighted averaging.
//!
//!
//! ## 2. Example
//!
//! ```
//! use tintmix::{Mixer, Paint, SearchOptions};
//!
//! let palette = vec![
//!     Paint::new("a", "Azure", 70.0, -20.0, -30.0),
//!     Paint::new("b", "Bone White", 90.0, 0.0, 10.0),
//! ];
//!
//! let mixer = Mixer::new(SearchOptions::default());
//! let recipes = mixer.solve("#87CEEB", &palette);
//!
//! assert_eq!(recipes.len(), 1);
//! assert_eq!(recipes[0].parts, vec![("Azure".to_string(), 2), ("Bone White".to_string(), 1)]);
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tintmix supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`rayon`** parallelizes the per-size subset scan with
//!     [rayon](https://crates.io/crates/rayon). The parallel reduction uses a
//!     total order, so results are identical with the sequential scan. This
//!     feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod mixture;
mod palette;
mod search;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::{delta_e_2000, format_hex, lab_to_srgb, parse_hex, srgb_to_lab, HexCase};
pub use mixture::mix;
pub use palette::Paint;
pub use search::{MixRecipe, Mixer, OutputOrder, SearchOptions, MIN_RECIPE_SIZE};
