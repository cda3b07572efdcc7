mod conversion;
mod difference;
mod equality;
mod math;
mod string;

// conversion
pub use conversion::{lab_to_srgb, srgb_to_lab};

// difference
pub use difference::delta_e_2000;

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
#[cfg(test)]
pub(crate) use equality::to_eq_coordinates;
pub(crate) use math::FloatExt;

// string
pub use string::{format_hex, parse_hex, HexCase};
