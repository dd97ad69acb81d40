// Fri Oct 16 2026 - Alex

use crate::structure::{Class, ClassId};
use std::ops::Index;

/// Append-only sequence of finalized classes, indexed by creation order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    classes: Vec<Class>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next pushed class must carry.
    pub fn next_id(&self) -> ClassId {
        ClassId::new(self.classes.len())
    }

    /// Appends a finished class. Returns `None` if the class id is out of order
    /// or names a class that does not exist yet.
    pub fn push(&mut self, class: Class) -> Option<ClassId> {
        let id = class.id();
        if id != self.next_id() {
            return None;
        }
        let refers_forward = class.direct_bases().iter().any(|b| *b >= id)
            || class.fields().iter().filter_map(|f| f.type_class()).any(|t| t >= id);
        if refers_forward {
            return None;
        }
        self.classes.push(class);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len()).map(ClassId::new)
    }
}

impl Index<ClassId> for Registry {
    type Output = Class;

    fn index(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Class;
    type IntoIter = std::slice::Iter<'a, Class>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::TypeKind;

    #[test]
    fn test_push_in_order() {
        let mut registry = Registry::new();
        assert_eq!(registry.push(Class::new(ClassId::new(0))), Some(ClassId::new(0)));
        assert_eq!(registry.push(Class::new(ClassId::new(2))), None);
        assert_eq!(registry.next_id(), ClassId::new(1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_push_rejects_forward_references() {
        let mut registry = Registry::new();
        let mut class = Class::new(ClassId::new(0));
        class.add_field(TypeKind::Class).set_type_class(ClassId::new(0));
        assert_eq!(registry.push(class), None);
        assert!(registry.is_empty());
    }
}
