use std::fmt;

use serde::{Deserialize, Serialize};

/// A structural child slot of an atom that a path can descend into.
/// A path node without a branch is terminal, see
/// [`PathIndex`](crate::path_index::PathIndex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum Branch {
    /// The nucleus of the atom
    Nucleus,
    /// The superscript of the atom
    Superscript,
    /// The subscript of the atom
    Subscript,
    /// The numerator, only valid for fractions
    Numerator,
    /// The denominator, only valid for fractions
    Denominator,
    /// The radicand, only valid for radicals
    Radicand,
    /// The degree, only valid for radicals
    Degree,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Nucleus => write!(f, "nucleus"),
            Branch::Superscript => write!(f, "superscript"),
            Branch::Subscript => write!(f, "subscript"),
            Branch::Numerator => write!(f, "numerator"),
            Branch::Denominator => write!(f, "denominator"),
            Branch::Radicand => write!(f, "radicand"),
            Branch::Degree => write!(f, "degree"),
        }
    }
}
