use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use derive_more::From;
use serde::{Deserialize, Serialize};

/// The category of values a die's faces belong to. A single die must be
/// homogeneous in kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    Numeric,
    Text,
}

/// One possible outcome of a single draw from a die.
///
/// Numeric faces compare with each other numerically regardless of variant,
/// so `Face::Int(3)` and `Face::Real(3.0)` are the same face (integers above
/// 2^53 lose precision under this rule). Text faces compare lexicographically,
/// and every numeric face orders before every text face, giving a
/// deterministic total order across heterogeneous dice.
#[derive(Debug, Clone, From, Serialize, Deserialize)]
pub enum Face {
    Int(i64),
    Real(f64),
    Text(String),
}

impl Face {
    pub fn kind(&self) -> FaceKind {
        match self {
            Face::Int(_) | Face::Real(_) => FaceKind::Numeric,
            Face::Text(_) => FaceKind::Text,
        }
    }

    fn as_real(&self) -> Option<f64> {
        match self {
            Face::Int(n) => Some(*n as f64),
            Face::Real(x) => Some(*x),
            Face::Text(_) => None,
        }
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<i32> for Face {
    fn from(value: i32) -> Self {
        Face::Int(value.into())
    }
}

impl From<u32> for Face {
    fn from(value: u32) -> Self {
        Face::Int(value.into())
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Face {}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_real(), other.as_real()) {
            // total_cmp keeps this a total order even for NaN faces
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match (self, other) {
                (Face::Text(a), Face::Text(b)) => a.cmp(b),
                _ => unreachable!("non-numeric faces are always text"),
            },
        }
    }
}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // numeric faces hash by canonical f64 bits so the `Eq` coercion of
        // `Int(3)` and `Real(3.0)` stays consistent with `Hash`
        match self.as_real() {
            Some(x) => x.to_bits().hash(state),
            None => match self {
                Face::Text(s) => s.hash(state),
                _ => unreachable!("non-numeric faces are always text"),
            },
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(n) => write!(f, "{n}"),
            Face::Real(x) => write!(f, "{x}"),
            Face::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn test_numeric_faces_compare_across_variants() {
        assert_eq!(Face::Int(3), Face::Real(3.0));
        assert!(Face::Int(2) < Face::Real(2.5));
        assert!(Face::Real(9.0) > Face::Int(4));
    }

    #[test]
    fn test_numeric_orders_before_text() {
        assert!(Face::Int(1_000_000) < Face::from("1"));
        assert!(Face::from("ant") < Face::from("bee"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut seen = FxHashSet::default();
        assert!(seen.insert(Face::Int(3)));
        assert!(!seen.insert(Face::Real(3.0)));
        assert!(seen.insert(Face::from("3")));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Face::Int(1).kind(), FaceKind::Numeric);
        assert_eq!(Face::Real(1.5).kind(), FaceKind::Numeric);
        assert_eq!(Face::from("heads").kind(), FaceKind::Text);
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::Int(4).to_string(), "4");
        assert_eq!(Face::Real(2.5).to_string(), "2.5");
        assert_eq!(Face::from("tails").to_string(), "tails");
    }
}
