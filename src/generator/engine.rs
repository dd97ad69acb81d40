// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::random::RandomStream;
use crate::structure::{is_viable, Alignment, Class, ClassId, Method, Registry, TypeKind};

/// Largest log2 drawn for a field or class alignment override (8192 bytes).
const MAX_ALIGNMENT_LOG2: u32 = 13;
/// Largest log2 drawn for a `#pragma pack` value (16 bytes).
const MAX_PACK_LOG2: u32 = 4;
/// Largest `#pragma vtordisp` mode.
const MAX_VTORDISP: u32 = 2;
/// Repeats allowed for a geometric roll whose chance is 100%.
pub(crate) const MAX_REPEATS: usize = 4;

/// How many times a "roll again" loop may run. Only a certain chance needs a bound.
fn repeat_limit(percent: u32) -> usize {
    if percent >= 100 {
        MAX_REPEATS
    } else {
        usize::MAX
    }
}

/// Builds classes one at a time into a registry, drawing every choice from a
/// single random stream in a fixed order.
pub struct GenerationEngine<'a> {
    config: &'a Config,
    rng: &'a mut RandomStream,
    registry: Registry,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(config: &'a Config, rng: &'a mut RandomStream) -> Self {
        Self {
            config,
            rng,
            registry: Registry::new(),
        }
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Generates `num_classes` classes.
    pub fn run(&mut self) {
        for _ in 0..self.config.num_classes {
            self.generate_class();
        }
    }

    /// Builds the next class and appends it to the registry.
    pub fn generate_class(&mut self) -> ClassId {
        let mut class = Class::new(self.registry.next_id());

        self.choose_bases(&mut class);
        self.add_fields(&mut class);
        self.add_methods(&mut class);
        self.set_layout_attributes(&mut class);

        log::debug!("generated {}", class);
        let id = class.id();
        let pushed = self.registry.push(class);
        debug_assert_eq!(pushed, Some(id));
        id
    }

    fn choose_bases(&mut self, class: &mut Class) {
        let num_pbases = self.registry.len();
        if num_pbases == 0 {
            return;
        }

        for pbase in self.rng.permutation(num_pbases) {
            if !self.rng.chance(self.config.chance_of_base) {
                continue;
            }

            let candidate = &self.registry[ClassId::new(pbase)];
            if !is_viable(class, candidate, self.config.dialect) {
                log::trace!("{}: rejected base {} (mixed virtuality)", class.id(), candidate.id());
                continue;
            }

            let is_virtual = self.rng.chance(self.config.chance_of_vbase);
            class.add_base(candidate, is_virtual);
        }
    }

    fn draw_kind(&mut self) -> TypeKind {
        let last = if self.registry.is_empty() {
            TypeKind::LAST_SCALAR
        } else {
            TypeKind::LAST
        };
        let index = self.rng.uniform(TypeKind::Bool.index(), last.index());
        TypeKind::from_index(index).unwrap_or(TypeKind::Int)
    }

    fn add_fields(&mut self, class: &mut Class) {
        let config = self.config;
        let mean = f64::from(config.avg_num_array_elements);
        let num_fields = self.rng.uniform(config.min_num_fields, config.max_num_fields);

        for _ in 0..num_fields {
            let kind = self.draw_kind();
            let referent = if kind.needs_referent() {
                Some(ClassId::new(self.rng.uniform(0, self.registry.len() - 1)))
            } else {
                None
            };

            let field = class.add_field(kind);
            if let Some(referent) = referent {
                field.set_type_class(referent);
            }

            let made_bitfield = kind.is_bitfield_eligible() && self.rng.chance(config.chance_of_bitfield);
            if made_bitfield {
                let width = u32::try_from(self.rng.poisson(mean)).unwrap_or(u32::MAX);
                field.set_bitfield_width(width);
                if self.rng.chance(config.chance_of_anon_field) {
                    field.set_anonymous();
                }
            } else if self.rng.chance(config.chance_of_array) {
                for _ in 0..repeat_limit(config.chance_of_array) {
                    field.add_array_dimension(self.rng.poisson(mean) + 1);
                    if !self.rng.chance(config.chance_of_array) {
                        break;
                    }
                }
            }

            if self.rng.chance(config.chance_of_field_aligned) {
                for _ in 0..repeat_limit(config.chance_of_field_aligned) {
                    let alignment = Alignment::from_log2(self.rng.uniform_u32(0, MAX_ALIGNMENT_LOG2));
                    field.set_alignment(alignment, config.dialect);
                    if !self.rng.chance(config.chance_of_field_aligned) {
                        break;
                    }
                }
            }
        }
    }

    fn add_methods(&mut self, class: &mut Class) {
        if self.rng.chance(self.config.chance_of_own_method) {
            class.add_method(Method::own(class.id()));
        }
        if self.rng.chance(self.config.chance_of_override_method) {
            class.add_method(Method::overriding());
        }
    }

    fn set_layout_attributes(&mut self, class: &mut Class) {
        if self.rng.chance(self.config.chance_of_class_packed) {
            class.set_packed(Alignment::from_log2(self.rng.uniform_u32(0, MAX_PACK_LOG2)));
        }
        if self.rng.chance(self.config.chance_of_vtordisp) {
            class.set_vtordisp(self.rng.uniform_u32(0, MAX_VTORDISP));
        }
        if self.rng.chance(self.config.chance_of_class_aligned) {
            let alignment = Alignment::from_log2(self.rng.uniform_u32(0, MAX_ALIGNMENT_LOG2));
            class.set_alignment(alignment, self.config.dialect);
        }
    }
}
