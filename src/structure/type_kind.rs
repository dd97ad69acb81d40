// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a generated field. Declaration order is significant: the generator
/// draws kinds by index range, and `Bool..=LongLong` is the bitfield family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Bool,
    Char,
    Short,
    Int,
    LongLong,
    Float,
    Double,
    /// Pointer to a previously generated class.
    PClass,
    /// Pointer to member function of a previously generated class.
    Pmf,
    /// Pointer to data member of a previously generated class.
    Pdm,
    /// A previously generated class, by value.
    Class,
}

impl TypeKind {
    pub const ALL: [TypeKind; 11] = [
        Self::Bool,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::LongLong,
        Self::Float,
        Self::Double,
        Self::PClass,
        Self::Pmf,
        Self::Pdm,
        Self::Class,
    ];

    /// Last kind that can be drawn while no class exists yet.
    pub const LAST_SCALAR: TypeKind = Self::Double;
    /// Last kind that can be drawn once the registry is non-empty.
    pub const LAST: TypeKind = Self::Class;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Width in bits of the storage unit a bitfield of this kind is declared with.
    pub fn bit_width(self) -> Option<u32> {
        match self {
            Self::Bool => Some(1),
            Self::Char => Some(8),
            Self::Short => Some(16),
            Self::Int => Some(32),
            Self::LongLong => Some(64),
            _ => None,
        }
    }

    pub fn is_bitfield_eligible(self) -> bool {
        self.bit_width().is_some()
    }

    /// Whether a field of this kind names another class and so needs a referent.
    pub fn needs_referent(self) -> bool {
        matches!(self, Self::PClass | Self::Pmf | Self::Pdm | Self::Class)
    }

    pub fn is_scalar(self) -> bool {
        self <= Self::LAST_SCALAR
    }

    /// C++ spelling of the scalar kinds.
    pub fn scalar_spelling(self) -> Option<&'static str> {
        match self {
            Self::Bool => Some("bool"),
            Self::Char => Some("char"),
            Self::Short => Some("short"),
            Self::Int => Some("int"),
            Self::LongLong => Some("long long"),
            Self::Float => Some("float"),
            Self::Double => Some("double"),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scalar_spelling() {
            Some(spelling) => f.write_str(spelling),
            None => match self {
                Self::PClass => f.write_str("pointer-to-class"),
                Self::Pmf => f.write_str("pointer-to-member-function"),
                Self::Pdm => f.write_str("pointer-to-data-member"),
                _ => f.write_str("class"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_index() {
        for (i, kind) in TypeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TypeKind::from_index(i), Some(*kind));
        }
        assert_eq!(TypeKind::from_index(TypeKind::ALL.len()), None);
        assert!(TypeKind::LAST_SCALAR < TypeKind::PClass);
    }

    #[test]
    fn test_bit_widths() {
        assert_eq!(TypeKind::Bool.bit_width(), Some(1));
        assert_eq!(TypeKind::Char.bit_width(), Some(8));
        assert_eq!(TypeKind::Short.bit_width(), Some(16));
        assert_eq!(TypeKind::Int.bit_width(), Some(32));
        assert_eq!(TypeKind::LongLong.bit_width(), Some(64));
        assert_eq!(TypeKind::Float.bit_width(), None);
        assert!(!TypeKind::Pdm.is_bitfield_eligible());
    }

    #[test]
    fn test_referent_kinds() {
        let needing: Vec<TypeKind> = TypeKind::ALL
            .iter()
            .copied()
            .filter(|k| k.needs_referent())
            .collect();
        assert_eq!(needing, vec![TypeKind::PClass, TypeKind::Pmf, TypeKind::Pdm, TypeKind::Class]);
        assert!(TypeKind::ALL.iter().all(|k| k.is_scalar() != k.needs_referent()));
    }
}
