// Fri Oct 16 2026 - Alex

use crate::structure::ClassId;
use serde::Serialize;
use std::fmt;

/// Name shared by every class that rolls an overriding method, so a derived
/// class's copy overrides whatever an ancestor declared.
pub const OVERRIDE_METHOD_NAME: &str = "OverrideMethod";

/// A virtual member function of a generated class, held as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub is_override: bool,
}

impl Method {
    /// A method only `class` declares.
    pub fn own(class: ClassId) -> Self {
        Self {
            name: format!("{}Method", class),
            is_override: false,
        }
    }

    pub fn overriding() -> Self {
        Self {
            name: OVERRIDE_METHOD_NAME.to_string(),
            is_override: true,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "virtual void {}() {{}}", self.name)
    }
}
