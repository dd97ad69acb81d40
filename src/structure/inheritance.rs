// Fri Oct 16 2026 - Alex

use crate::config::Dialect;
use crate::structure::{Class, ClassId, Registry};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Decides whether `candidate` may become a direct base of `class`.
///
/// Under the strict dialect a class may not reach the same ancestor through
/// one virtual and one non-virtual path. Every ancestor recorded so far is
/// checked against the candidate's own closure, and a candidate the class
/// already reaches is refused outright since its virtuality is drawn later.
/// The GNU dialect tolerates mixed diamonds, so every candidate is accepted there.
pub fn is_viable(class: &Class, candidate: &Class, dialect: Dialect) -> bool {
    if dialect.permits_mixed_virtuality() {
        return true;
    }

    let id = candidate.id();
    if class.has_base(id, true) || class.has_base(id, false) {
        return false;
    }
    if class.virtual_ancestors().any(|a| candidate.has_base(a, false)) {
        return false;
    }
    if class.nonvirtual_ancestors().any(|a| candidate.has_base(a, true)) {
        return false;
    }

    true
}

/// Ancestors `class` reaches both virtually and non-virtually.
pub fn mixed_virtuality_ancestors(class: &Class) -> Vec<ClassId> {
    let virtual_set: HashSet<ClassId> = class.virtual_ancestors().collect();
    let mut mixed: Vec<ClassId> = class
        .nonvirtual_ancestors()
        .filter(|a| virtual_set.contains(a))
        .collect();
    mixed.sort();
    mixed.dedup();
    mixed
}

/// Statistics about a generated hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HierarchyStats {
    pub total_classes: usize,
    pub root_classes: usize,
    pub leaf_classes: usize,
    pub max_depth: usize,
    pub avg_depth: f64,
    pub multiple_inheritance_count: usize,
    pub virtual_inheritance_count: usize,
    pub mixed_diamond_count: usize,
    pub polymorphic_classes: usize,
    pub total_fields: usize,
    pub bitfields: usize,
    pub anonymous_fields: usize,
    pub array_fields: usize,
}

impl HierarchyStats {
    pub fn from_registry(registry: &Registry) -> Self {
        let total_classes = registry.len();
        let mut depths = vec![0usize; total_classes];
        let mut used_as_base = vec![false; total_classes];
        let mut stats = Self {
            total_classes,
            ..Self::default()
        };

        // Bases always precede the class, so one forward pass settles depths.
        for class in registry {
            let depth = class
                .direct_bases()
                .iter()
                .map(|b| depths[b.index()] + 1)
                .max()
                .unwrap_or(0);
            depths[class.id().index()] = depth;
            for base in class.direct_bases() {
                used_as_base[base.index()] = true;
            }

            if class.direct_bases().is_empty() {
                stats.root_classes += 1;
            }
            if class.direct_bases().len() > 1 {
                stats.multiple_inheritance_count += 1;
            }
            if class.virtual_ancestors().next().is_some() {
                stats.virtual_inheritance_count += 1;
            }
            if !mixed_virtuality_ancestors(class).is_empty() {
                stats.mixed_diamond_count += 1;
            }
            if class.is_polymorphic() {
                stats.polymorphic_classes += 1;
            }
            for field in class.fields() {
                stats.total_fields += 1;
                if field.is_bitfield() {
                    stats.bitfields += 1;
                }
                if field.is_anonymous() {
                    stats.anonymous_fields += 1;
                }
                if field.is_array() {
                    stats.array_fields += 1;
                }
            }
        }

        stats.leaf_classes = used_as_base.iter().filter(|used| !**used).count();
        stats.max_depth = depths.iter().copied().max().unwrap_or(0);
        stats.avg_depth = if total_classes > 0 {
            depths.iter().sum::<usize>() as f64 / total_classes as f64
        } else {
            0.0
        };
        stats
    }
}

impl fmt::Display for HierarchyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hierarchy Statistics:")?;
        writeln!(f, "  Total classes: {}", self.total_classes)?;
        writeln!(f, "  Root classes: {}", self.root_classes)?;
        writeln!(f, "  Leaf classes: {}", self.leaf_classes)?;
        writeln!(f, "  Max depth: {}", self.max_depth)?;
        writeln!(f, "  Average depth: {:.2}", self.avg_depth)?;
        writeln!(f, "  Multiple inheritance: {}", self.multiple_inheritance_count)?;
        writeln!(f, "  Virtual inheritance: {}", self.virtual_inheritance_count)?;
        writeln!(f, "  Mixed-virtuality diamonds: {}", self.mixed_diamond_count)?;
        writeln!(f, "  Polymorphic classes: {}", self.polymorphic_classes)?;
        write!(
            f,
            "  Fields: {} ({} bitfields, {} anonymous, {} arrays)",
            self.total_fields, self.bitfields, self.anonymous_fields, self.array_fields
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_with_bases(registry: &mut Registry, bases: &[(usize, bool)]) -> ClassId {
        let mut class = Class::new(registry.next_id());
        for &(base, is_virtual) in bases {
            let base = &registry[ClassId::new(base)];
            class.add_base(base, is_virtual);
        }
        registry.push(class).unwrap()
    }

    #[test]
    fn test_candidate_reaching_base_virtually_is_rejected() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let x = push_with_bases(&mut registry, &[(a.index(), false)]);
        let w = push_with_bases(&mut registry, &[(x.index(), true)]);

        let mut z = Class::new(registry.next_id());
        z.add_base(&registry[x], false);

        assert!(!is_viable(&z, &registry[w], Dialect::Microsoft));
        assert!(is_viable(&z, &registry[w], Dialect::Gnu));
    }

    #[test]
    fn test_indirect_ancestor_conflict_is_rejected() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), false)]);
        let c = push_with_bases(&mut registry, &[(a.index(), true)]);

        let mut d = Class::new(registry.next_id());
        d.add_base(&registry[b], false);
        assert!(!is_viable(&d, &registry[c], Dialect::Microsoft));
    }

    #[test]
    fn test_already_reached_candidate_is_rejected() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), true)]);

        let mut c = Class::new(registry.next_id());
        c.add_base(&registry[b], false);
        assert!(!is_viable(&c, &registry[a], Dialect::Microsoft));
        assert!(is_viable(&c, &registry[a], Dialect::Gnu));
    }

    #[test]
    fn test_virtual_base_rejects_nonvirtual_path() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), false)]);

        let mut class = Class::new(registry.next_id());
        class.add_base(&registry[a], true);
        assert!(!is_viable(&class, &registry[b], Dialect::Microsoft));
    }

    #[test]
    fn test_consistent_diamond_is_viable() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), true)]);
        let c = push_with_bases(&mut registry, &[(a.index(), true)]);

        let mut d = Class::new(registry.next_id());
        d.add_base(&registry[b], false);
        assert!(is_viable(&d, &registry[c], Dialect::Microsoft));
        d.add_base(&registry[c], false);
        assert!(mixed_virtuality_ancestors(&d).is_empty());
    }

    #[test]
    fn test_unrelated_candidate_is_viable() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[]);

        let mut class = Class::new(registry.next_id());
        class.add_base(&registry[a], true);
        assert!(is_viable(&class, &registry[b], Dialect::Microsoft));
    }

    #[test]
    fn test_mixed_diamond_detected() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), true)]);
        let c = push_with_bases(&mut registry, &[(a.index(), false)]);

        let mut d = Class::new(registry.next_id());
        d.add_base(&registry[b], false);
        d.add_base(&registry[c], false);
        assert_eq!(mixed_virtuality_ancestors(&d), vec![a]);
    }

    #[test]
    fn test_hierarchy_stats() {
        let mut registry = Registry::new();
        let a = push_with_bases(&mut registry, &[]);
        let b = push_with_bases(&mut registry, &[(a.index(), true)]);
        push_with_bases(&mut registry, &[(a.index(), false), (b.index(), false)]);

        let stats = HierarchyStats::from_registry(&registry);
        assert_eq!(stats.total_classes, 3);
        assert_eq!(stats.root_classes, 1);
        assert_eq!(stats.leaf_classes, 1);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.multiple_inheritance_count, 1);
        assert_eq!(stats.virtual_inheritance_count, 2);
        assert_eq!(stats.mixed_diamond_count, 1);
    }
}
