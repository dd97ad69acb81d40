// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::generator::Program;
use crate::structure::{Class, ClassId, Field, HierarchyStats};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BaseSummary {
    pub class: ClassId,
    pub name: String,
    pub is_virtual: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub bases: Vec<BaseSummary>,
    pub virtual_ancestors: Vec<ClassId>,
    pub nonvirtual_ancestors: Vec<ClassId>,
    pub fields: Vec<Field>,
    pub methods: Vec<String>,
    pub alignment: Option<u64>,
    pub packed: Option<u64>,
    pub vtordisp: Option<u32>,
}

impl ClassSummary {
    pub fn from_class(class: &Class) -> Self {
        let bases = class
            .direct_bases()
            .iter()
            .map(|&base| BaseSummary {
                class: base,
                name: base.to_string(),
                is_virtual: class.is_virtual_base(base),
            })
            .collect();

        let mut virtual_ancestors: Vec<ClassId> = class.virtual_ancestors().collect();
        virtual_ancestors.sort();
        virtual_ancestors.dedup();
        let mut nonvirtual_ancestors: Vec<ClassId> = class.nonvirtual_ancestors().collect();
        nonvirtual_ancestors.sort();
        nonvirtual_ancestors.dedup();

        Self {
            name: class.name(),
            bases,
            virtual_ancestors,
            nonvirtual_ancestors,
            fields: class.fields().to_vec(),
            methods: class.methods().iter().map(|m| m.name.clone()).collect(),
            alignment: class.alignment().map(|a| a.alignment.as_u64()),
            packed: class.packed().map(|p| p.as_u64()),
            vtordisp: class.vtordisp(),
        }
    }
}

/// Machine-readable description of one generation pass.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub version: String,
    pub config: Config,
    pub stats: HierarchyStats,
    pub test_order: Vec<ClassId>,
    pub classes: Vec<ClassSummary>,
}

impl GenerationSummary {
    pub fn new(program: &Program, config: &Config) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: config.clone(),
            stats: HierarchyStats::from_registry(&program.registry),
            test_order: program.test_order.clone(),
            classes: program.registry.iter().map(ClassSummary::from_class).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
