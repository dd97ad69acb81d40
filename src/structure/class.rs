// Fri Oct 16 2026 - Alex

use crate::config::Dialect;
use crate::structure::{Alignment, AlignmentAttr, Field, Method, TypeKind};
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// Index of a class in the registry. Renders as the generated class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClassId(usize);

impl ClassId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName{}", self.0)
    }
}

/// A generated class: its bases, members, and layout attributes.
#[derive(Debug, Clone)]
pub struct Class {
    id: ClassId,
    /// Direct bases in inheritance-list order
    direct_bases: Vec<ClassId>,
    direct_vbases: IndexSet<ClassId>,
    direct_nvbases: IndexSet<ClassId>,
    /// Ancestors reachable through a direct base, by virtuality
    indirect_vbases: IndexSet<ClassId>,
    indirect_nvbases: IndexSet<ClassId>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    alignment: Option<AlignmentAttr>,
    packed: Option<Alignment>,
    vtordisp: Option<u32>,
}

impl Class {
    pub fn new(id: ClassId) -> Self {
        Self {
            id,
            direct_bases: Vec::new(),
            direct_vbases: IndexSet::new(),
            direct_nvbases: IndexSet::new(),
            indirect_vbases: IndexSet::new(),
            indirect_nvbases: IndexSet::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            alignment: None,
            packed: None,
            vtordisp: None,
        }
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Attaches `base` as a direct base and folds its ancestors into the
    /// indirect sets. Viability is the caller's concern.
    pub fn add_base(&mut self, base: &Class, is_virtual: bool) {
        self.indirect_vbases.extend(base.indirect_vbases.iter().copied());
        self.indirect_nvbases.extend(base.indirect_nvbases.iter().copied());
        self.indirect_vbases.extend(base.direct_vbases.iter().copied());
        self.indirect_nvbases.extend(base.direct_nvbases.iter().copied());

        self.direct_bases.push(base.id);
        if is_virtual {
            self.direct_vbases.insert(base.id);
        } else {
            self.direct_nvbases.insert(base.id);
        }
    }

    /// Whether `base` is reachable from this class with the given virtuality.
    pub fn has_base(&self, base: ClassId, is_virtual: bool) -> bool {
        if is_virtual {
            self.direct_vbases.contains(&base) || self.indirect_vbases.contains(&base)
        } else {
            self.direct_nvbases.contains(&base) || self.indirect_nvbases.contains(&base)
        }
    }

    pub fn is_virtual_base(&self, base: ClassId) -> bool {
        self.direct_vbases.contains(&base)
    }

    pub fn direct_bases(&self) -> &[ClassId] {
        &self.direct_bases
    }

    pub fn direct_vbases(&self) -> &IndexSet<ClassId> {
        &self.direct_vbases
    }

    pub fn direct_nvbases(&self) -> &IndexSet<ClassId> {
        &self.direct_nvbases
    }

    pub fn indirect_vbases(&self) -> &IndexSet<ClassId> {
        &self.indirect_vbases
    }

    pub fn indirect_nvbases(&self) -> &IndexSet<ClassId> {
        &self.indirect_nvbases
    }

    /// Every ancestor reachable through at least one virtual edge.
    pub fn virtual_ancestors(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.direct_vbases.iter().chain(self.indirect_vbases.iter()).copied()
    }

    /// Every ancestor reachable through a purely non-virtual path.
    pub fn nonvirtual_ancestors(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.direct_nvbases.iter().chain(self.indirect_nvbases.iter()).copied()
    }

    /// Appends a field of `kind` and returns it for further shaping.
    pub fn add_field(&mut self, kind: TypeKind) -> &mut Field {
        let field_i = self.fields.len();
        self.fields.push(Field::new(kind, self.id, field_i));
        let last = self.fields.len() - 1;
        &mut self.fields[last]
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn is_polymorphic(&self) -> bool {
        !self.methods.is_empty()
    }

    pub fn set_alignment(&mut self, alignment: Alignment, spelling: Dialect) {
        self.alignment = Some(AlignmentAttr::new(alignment, spelling));
    }

    pub fn alignment(&self) -> Option<AlignmentAttr> {
        self.alignment
    }

    pub fn set_packed(&mut self, pack: Alignment) {
        self.packed = Some(pack);
    }

    pub fn packed(&self) -> Option<Alignment> {
        self.packed
    }

    pub fn set_vtordisp(&mut self, mode: u32) {
        self.vtordisp = Some(mode);
    }

    pub fn vtordisp(&self) -> Option<u32> {
        self.vtordisp
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.direct_bases.is_empty() {
            write!(f, " :")?;
            for base in &self.direct_bases {
                let virtual_kw = if self.is_virtual_base(*base) { " virtual" } else { "" };
                write!(f, "{} {}", virtual_kw, base)?;
            }
        }
        write!(f, " [{} fields, {} methods]", self.fields.len(), self.methods.len())
    }
}
