// Fri Oct 16 2026 - Alex

use crate::config::Dialect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A power-of-two byte alignment or pack value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alignment {
    value: u64,
}

impl Alignment {
    pub fn new(value: u64) -> Option<Self> {
        if value > 0 && value.is_power_of_two() {
            Some(Self { value })
        } else {
            None
        }
    }

    pub fn from_log2(log2: u32) -> Self {
        Self { value: 1u64 << log2.min(63) }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An alignment override together with the dialect whose attribute syntax spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentAttr {
    pub alignment: Alignment,
    pub spelling: Dialect,
}

impl AlignmentAttr {
    pub fn new(alignment: Alignment, spelling: Dialect) -> Self {
        Self { alignment, spelling }
    }
}

impl fmt::Display for AlignmentAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling {
            Dialect::Gnu => write!(f, "__attribute__((aligned({})))", self.alignment),
            Dialect::Microsoft => write!(f, "__declspec(align({}))", self.alignment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_only() {
        assert!(Alignment::new(0).is_none());
        assert!(Alignment::new(12).is_none());
        assert_eq!(Alignment::new(16).map(|a| a.as_u64()), Some(16));
        assert_eq!(Alignment::from_log2(13).as_u64(), 8192);
    }

    #[test]
    fn test_attribute_spelling() {
        let align = Alignment::from_log2(4);
        assert_eq!(AlignmentAttr::new(align, Dialect::Gnu).to_string(), "__attribute__((aligned(16)))");
        assert_eq!(AlignmentAttr::new(align, Dialect::Microsoft).to_string(), "__declspec(align(16))");
    }
}
