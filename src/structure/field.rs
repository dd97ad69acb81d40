// Fri Oct 16 2026 - Alex

use crate::config::Dialect;
use crate::structure::{Alignment, AlignmentAttr, ClassId, TypeKind};
use serde::Serialize;
use std::fmt;

/// A data member of a generated class. Owned by exactly one [`Class`](crate::structure::Class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    kind: TypeKind,
    owner: ClassId,
    field_i: usize,
    array_dimensions: Vec<u64>,
    bitfield_width: Option<u32>,
    alignment: Option<AlignmentAttr>,
    type_class: Option<ClassId>,
    is_anonymous: bool,
}

impl Field {
    pub fn new(kind: TypeKind, owner: ClassId, field_i: usize) -> Self {
        Self {
            kind,
            owner,
            field_i,
            array_dimensions: Vec::new(),
            bitfield_width: None,
            alignment: None,
            type_class: None,
            is_anonymous: false,
        }
    }

    /// Appends one array extent. Zero extents are raised to one.
    pub fn add_array_dimension(&mut self, extent: u64) -> &mut Self {
        self.array_dimensions.push(extent.max(1));
        self
    }

    /// Makes this field a bitfield. The width is clamped to the kind's storage
    /// unit; a zero width also makes the field anonymous.
    pub fn set_bitfield_width(&mut self, width: u32) -> &mut Self {
        if width == 0 {
            self.is_anonymous = true;
        }
        let max_width = self.kind.bit_width().unwrap_or(0);
        self.bitfield_width = Some(width.min(max_width));
        self
    }

    /// Overrides the alignment; a later call supersedes an earlier one.
    pub fn set_alignment(&mut self, alignment: Alignment, spelling: Dialect) -> &mut Self {
        self.alignment = Some(AlignmentAttr::new(alignment, spelling));
        self
    }

    pub fn set_type_class(&mut self, class: ClassId) -> &mut Self {
        self.type_class = Some(class);
        self
    }

    pub fn set_anonymous(&mut self) -> &mut Self {
        self.is_anonymous = true;
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn owner(&self) -> ClassId {
        self.owner
    }

    pub fn index(&self) -> usize {
        self.field_i
    }

    pub fn array_dimensions(&self) -> &[u64] {
        &self.array_dimensions
    }

    pub fn bitfield_width(&self) -> Option<u32> {
        self.bitfield_width
    }

    pub fn is_bitfield(&self) -> bool {
        self.bitfield_width.is_some()
    }

    pub fn is_array(&self) -> bool {
        !self.array_dimensions.is_empty()
    }

    pub fn alignment(&self) -> Option<AlignmentAttr> {
        self.alignment
    }

    pub fn type_class(&self) -> Option<ClassId> {
        self.type_class
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    pub fn name(&self) -> String {
        format!("{}FieldName{}", self.owner, self.field_i)
    }

    /// The name used in the declaration, if the field has one.
    pub fn declared_name(&self) -> Option<String> {
        if self.is_anonymous {
            None
        } else {
            Some(self.name())
        }
    }

    /// Whether the constructor reports this field's offset. Bitfields have no
    /// address, and anonymous fields cannot be named.
    pub fn reports_offset(&self) -> bool {
        !self.is_anonymous && !self.is_bitfield()
    }

    fn write_dimensions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for extent in &self.array_dimensions {
            write!(f, "[{}]", extent)?;
        }
        Ok(())
    }
}

/// Renders the member declaration, without indentation or trailing newline.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(attr) = self.alignment {
            write!(f, "{} ", attr)?;
        }

        let name = self.declared_name().unwrap_or_default();
        let referent = self.type_class.unwrap_or(ClassId::new(0));
        match self.kind {
            TypeKind::PClass => {
                write!(f, "{} *{}", referent, name)?;
                self.write_dimensions(f)?;
            }
            TypeKind::Pmf => {
                write!(f, "void ({}::*{}", referent, name)?;
                self.write_dimensions(f)?;
                write!(f, ")()")?;
            }
            TypeKind::Pdm => {
                write!(f, "int {}::*{}", referent, name)?;
                self.write_dimensions(f)?;
            }
            TypeKind::Class => {
                write!(f, "{}", referent)?;
                if !name.is_empty() {
                    write!(f, " {}", name)?;
                }
                self.write_dimensions(f)?;
            }
            scalar => {
                write!(f, "{}", scalar)?;
                if !name.is_empty() {
                    write!(f, " {}", name)?;
                }
                self.write_dimensions(f)?;
            }
        }

        if let Some(width) = self.bitfield_width {
            write!(f, " : {}", width)?;
        }
        write!(f, ";")
    }
}
