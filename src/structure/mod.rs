// Fri Oct 16 2026 - Alex

pub mod alignment;
pub mod class;
pub mod field;
pub mod inheritance;
pub mod method;
pub mod registry;
pub mod type_kind;

pub use alignment::{Alignment, AlignmentAttr};
pub use class::{Class, ClassId};
pub use field::Field;
pub use inheritance::{is_viable, mixed_virtuality_ancestors, HierarchyStats};
pub use method::{Method, OVERRIDE_METHOD_NAME};
pub use registry::Registry;
pub use type_kind::TypeKind;
