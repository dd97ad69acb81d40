// Fri Oct 16 2026 - Alex

use crate::config::{Config, Dialect};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layout-fuzz")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Generates random C++ class hierarchies that print their own memory layout", long_about = None)]
pub struct Args {
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub num_classes: Option<usize>,

    #[arg(long)]
    pub min_num_fields: Option<usize>,

    #[arg(long)]
    pub max_num_fields: Option<usize>,

    #[arg(long)]
    pub avg_num_array_elements: Option<u32>,

    #[arg(long)]
    pub chance_of_base: Option<u32>,

    #[arg(long)]
    pub chance_of_vbase: Option<u32>,

    #[arg(long)]
    pub chance_of_array: Option<u32>,

    #[arg(long)]
    pub chance_of_anon_field: Option<u32>,

    #[arg(long)]
    pub chance_of_bitfield: Option<u32>,

    #[arg(long)]
    pub chance_of_own_method: Option<u32>,

    #[arg(long)]
    pub chance_of_override_method: Option<u32>,

    #[arg(long)]
    pub chance_of_class_aligned: Option<u32>,

    #[arg(long)]
    pub chance_of_class_packed: Option<u32>,

    #[arg(long = "chance-of-vtordisp-packed")]
    pub chance_of_vtordisp: Option<u32>,

    #[arg(long)]
    pub chance_of_field_aligned: Option<u32>,

    /// Emit the runtime vfptr/vbptr/vtordisp scanner.
    #[arg(long)]
    pub check_vptrs: bool,

    /// Allow mixed-virtuality diamonds and use `__attribute__` spelling.
    #[arg(long)]
    pub gnu_dialect: bool,

    /// JSON file providing the base configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a JSON description of the generated hierarchy.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Layers the options given on the command line over `base`.
    pub fn apply(&self, mut base: Config) -> Config {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut base.seed, self.seed);
        set(&mut base.num_classes, self.num_classes);
        set(&mut base.min_num_fields, self.min_num_fields);
        set(&mut base.max_num_fields, self.max_num_fields);
        set(&mut base.avg_num_array_elements, self.avg_num_array_elements);
        set(&mut base.chance_of_base, self.chance_of_base);
        set(&mut base.chance_of_vbase, self.chance_of_vbase);
        set(&mut base.chance_of_array, self.chance_of_array);
        set(&mut base.chance_of_anon_field, self.chance_of_anon_field);
        set(&mut base.chance_of_bitfield, self.chance_of_bitfield);
        set(&mut base.chance_of_own_method, self.chance_of_own_method);
        set(&mut base.chance_of_override_method, self.chance_of_override_method);
        set(&mut base.chance_of_class_aligned, self.chance_of_class_aligned);
        set(&mut base.chance_of_class_packed, self.chance_of_class_packed);
        set(&mut base.chance_of_vtordisp, self.chance_of_vtordisp);
        set(&mut base.chance_of_field_aligned, self.chance_of_field_aligned);

        if self.check_vptrs {
            base.check_vptrs = true;
        }
        if self.gnu_dialect {
            base.dialect = Dialect::Gnu;
        }
        base
    }
}
