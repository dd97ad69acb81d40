// Fri Oct 16 2026 - Alex

use crate::config::{Config, Dialect};
use crate::generator::Program;
use crate::output::harness::{self, BUFFER_NAME};
use crate::structure::{Class, Field};
use itertools::Itertools;
use std::fmt;

/// The complete generated C++ program, rendered through `Display`.
pub struct CppSource<'a> {
    program: &'a Program,
    dialect: Dialect,
    check_vptrs: bool,
}

impl<'a> CppSource<'a> {
    pub fn new(program: &'a Program, config: &Config) -> Self {
        Self {
            program,
            dialect: config.dialect,
            check_vptrs: config.check_vptrs,
        }
    }
}

impl fmt::Display for CppSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        harness::write_prologue(f, self.check_vptrs)?;
        for class in &self.program.registry {
            write!(f, "{}", ClassDefinition::new(class, self.dialect))?;
        }
        harness::write_epilogue(f, self.dialect, self.check_vptrs, &self.program.test_order)
    }
}

/// One `struct` definition including its surrounding pragmas.
pub struct ClassDefinition<'a> {
    class: &'a Class,
    dialect: Dialect,
}

impl<'a> ClassDefinition<'a> {
    pub fn new(class: &'a Class, dialect: Dialect) -> Self {
        Self { class, dialect }
    }

    /// `vtordisp` pragmas only exist for the Microsoft ABI.
    fn vtordisp(&self) -> Option<u32> {
        match self.dialect {
            Dialect::Microsoft => self.class.vtordisp(),
            Dialect::Gnu => None,
        }
    }

    fn base_clause(&self) -> String {
        if self.class.direct_bases().is_empty() {
            return String::new();
        }
        let bases = self
            .class
            .direct_bases()
            .iter()
            .map(|base| {
                let virtual_kw = if self.class.is_virtual_base(*base) { "virtual " } else { "" };
                format!("public {}{}", virtual_kw, base)
            })
            .join(", ");
        format!(" : {}", bases)
    }
}

/// The statement reporting a field's byte offset from the start of the buffer.
pub fn offset_report(field: &Field) -> Option<String> {
    if !field.reports_offset() {
        return None;
    }
    let name = field.name();
    Some(format!(
        "printf(\"{name} : %llu\\n\", (unsigned long long)((size_t)&{name} - (size_t){buffer}));",
        name = name,
        buffer = BUFFER_NAME
    ))
}

impl fmt::Display for ClassDefinition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class;

        if let Some(pack) = class.packed() {
            writeln!(f, "#pragma pack(push, {})", pack)?;
        }
        if let Some(mode) = self.vtordisp() {
            writeln!(f, "#pragma vtordisp(push, {})", mode)?;
        }

        write!(f, "struct ")?;
        if let Some(attr) = class.alignment() {
            write!(f, "{} ", attr)?;
        }
        writeln!(f, "{}{} {{", class.id(), self.base_clause())?;

        for field in class.fields() {
            writeln!(f, "\t{}", field)?;
        }
        for method in class.methods() {
            writeln!(f, "\t{}", method)?;
        }

        writeln!(f, "\t{}() {{", class.id())?;
        for report in class.fields().iter().filter_map(offset_report) {
            writeln!(f, "\t\t{}", report)?;
        }
        writeln!(f, "\t}}")?;
        writeln!(f, "}};")?;

        if self.vtordisp().is_some() {
            writeln!(f, "#pragma vtordisp(pop)")?;
        }
        if class.packed().is_some() {
            writeln!(f, "#pragma pack(pop)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_seeded;
    use crate::structure::{Alignment, ClassId, Method, Registry, TypeKind};

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        let mut a = Class::new(ClassId::new(0));
        a.add_field(TypeKind::Int);
        registry.push(a).unwrap();

        let mut b = Class::new(ClassId::new(1));
        b.add_base(&registry[ClassId::new(0)], true);
        b.add_field(TypeKind::Char).set_bitfield_width(3);
        b.add_field(TypeKind::Int).set_bitfield_width(0);
        b.add_field(TypeKind::Double).add_array_dimension(2);
        b.add_method(Method::own(ClassId::new(1)));
        b.set_packed(Alignment::from_log2(1));
        b.set_vtordisp(2);
        b.set_alignment(Alignment::from_log2(4), Dialect::Microsoft);
        registry.push(b).unwrap();
        registry
    }

    #[test]
    fn test_class_definition_text() {
        let registry = sample_registry();
        let text = ClassDefinition::new(&registry[ClassId::new(1)], Dialect::Microsoft).to_string();
        let expected = "\
#pragma pack(push, 2)
#pragma vtordisp(push, 2)
struct __declspec(align(16)) ClassName1 : public virtual ClassName0 {
\tchar ClassName1FieldName0 : 3;
\tint : 0;
\tdouble ClassName1FieldName2[2];
\tvirtual void ClassName1Method() {}
\tClassName1() {
\t\tprintf(\"ClassName1FieldName2 : %llu\\n\", (unsigned long long)((size_t)&ClassName1FieldName2 - (size_t)buffer));
\t}
};
#pragma vtordisp(pop)
#pragma pack(pop)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_gnu_dialect_skips_vtordisp() {
        let registry = sample_registry();
        let text = ClassDefinition::new(&registry[ClassId::new(1)], Dialect::Gnu).to_string();
        assert!(!text.contains("vtordisp"));
        assert!(text.contains("#pragma pack(push, 2)"));
    }

    #[test]
    fn test_base_clause_order() {
        let mut registry = Registry::new();
        registry.push(Class::new(ClassId::new(0))).unwrap();
        registry.push(Class::new(ClassId::new(1))).unwrap();
        let mut c = Class::new(ClassId::new(2));
        c.add_base(&registry[ClassId::new(1)], false);
        c.add_base(&registry[ClassId::new(0)], true);
        let text = ClassDefinition::new(&c, Dialect::Microsoft).to_string();
        assert!(text.starts_with("struct ClassName2 : public ClassName1, public virtual ClassName0 {\n"));
    }

    #[test]
    fn test_anonymous_fields_never_named() {
        let mut config = Config::default().with_seed(21);
        config.chance_of_bitfield = 80;
        config.chance_of_anon_field = 60;
        let program = generate_seeded(&config);
        let text = CppSource::new(&program, &config).to_string();

        let mut anonymous = 0;
        for class in &program.registry {
            for field in class.fields() {
                if field.is_anonymous() {
                    anonymous += 1;
                    let token = format!("{} ", field.name());
                    let bracket = format!("{}[", field.name());
                    let semi = format!("{};", field.name());
                    assert!(!text.contains(&token) && !text.contains(&bracket) && !text.contains(&semi));
                }
            }
        }
        assert!(anonymous > 0);
    }

    #[test]
    fn test_zero_width_bitfield_not_reported() {
        let mut class = Class::new(ClassId::new(0));
        class.add_field(TypeKind::Short).set_bitfield_width(0);
        class.add_field(TypeKind::Short);
        let text = ClassDefinition::new(&class, Dialect::Gnu).to_string();
        assert!(!text.contains("ClassName0FieldName0"));
        assert_eq!(text.matches("printf(").count(), 1);
        assert!(text.contains("&ClassName0FieldName1"));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let config = Config::default().with_seed(1234);
        let first = CppSource::new(&generate_seeded(&config), &config).to_string();
        let second = CppSource::new(&generate_seeded(&config), &config).to_string();
        assert_eq!(first, second);
        assert!(first.contains("int main() {"));
    }

    #[test]
    fn test_every_class_is_tested_once() {
        let config = Config::default().with_seed(77).with_num_classes(12);
        let program = generate_seeded(&config);
        let text = CppSource::new(&program, &config).to_string();
        for id in program.registry.ids() {
            assert_eq!(text.matches(&format!("\ttest({});", id)).count(), 1);
            assert_eq!(text.matches(&format!("\t{}() {{", id)).count(), 1);
        }
    }
}
