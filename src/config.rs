// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed used when none is given, matching the Mersenne Twister default.
pub const DEFAULT_SEED: u64 = 5489;

/// Upper bound accepted for the Poisson mean of array extents and bitfield widths.
pub const MAX_AVG_ARRAY_ELEMENTS: u32 = 1024;

/// Layout dialect. Decides attribute spelling and whether mixed-virtuality
/// diamonds may be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `__declspec` spelling, strict diamond rules, `vtordisp` pragmas.
    #[default]
    Microsoft,
    /// `__attribute__` spelling, mixed diamonds allowed.
    Gnu,
}

impl Dialect {
    pub fn from_gnu_flag(gnu: bool) -> Self {
        if gnu {
            Self::Gnu
        } else {
            Self::Microsoft
        }
    }

    pub fn permits_mixed_virtuality(self) -> bool {
        self == Self::Gnu
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Option {option} must be a percentage between 0 and 100, got {value}")]
    InvalidPercentage { option: &'static str, value: u32 },
    #[error("min-num-fields ({min}) is greater than max-num-fields ({max})")]
    InvalidFieldRange { min: usize, max: usize },
    #[error("avg-num-array-elements must be at most 1024, got {0}")]
    InvalidAverage(u32),
}

/// Generation parameters. Percentages are in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: u64,
    pub num_classes: usize,
    pub min_num_fields: usize,
    pub max_num_fields: usize,
    pub avg_num_array_elements: u32,
    pub chance_of_base: u32,
    pub chance_of_vbase: u32,
    pub chance_of_array: u32,
    pub chance_of_anon_field: u32,
    pub chance_of_bitfield: u32,
    pub chance_of_own_method: u32,
    pub chance_of_override_method: u32,
    pub chance_of_class_aligned: u32,
    pub chance_of_class_packed: u32,
    pub chance_of_vtordisp: u32,
    pub chance_of_field_aligned: u32,
    pub check_vptrs: bool,
    pub dialect: Dialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            num_classes: 30,
            min_num_fields: 0,
            max_num_fields: 30,
            avg_num_array_elements: 3,
            chance_of_base: 5,
            chance_of_vbase: 30,
            chance_of_array: 15,
            chance_of_anon_field: 40,
            chance_of_bitfield: 10,
            chance_of_own_method: 20,
            chance_of_override_method: 20,
            chance_of_class_aligned: 10,
            chance_of_class_packed: 10,
            chance_of_vtordisp: 10,
            chance_of_field_aligned: 10,
            check_vptrs: false,
            dialect: Dialect::Microsoft,
        }
    }
}

impl Config {
    /// Config with every probability set to zero.
    pub fn never() -> Self {
        Self {
            chance_of_base: 0,
            chance_of_vbase: 0,
            chance_of_array: 0,
            chance_of_anon_field: 0,
            chance_of_bitfield: 0,
            chance_of_own_method: 0,
            chance_of_override_method: 0,
            chance_of_class_aligned: 0,
            chance_of_class_packed: 0,
            chance_of_vtordisp: 0,
            chance_of_field_aligned: 0,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    pub fn with_field_range(mut self, min: usize, max: usize) -> Self {
        self.min_num_fields = min;
        self.max_num_fields = max;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn percentages(&self) -> [(&'static str, u32); 11] {
        [
            ("chance-of-base", self.chance_of_base),
            ("chance-of-vbase", self.chance_of_vbase),
            ("chance-of-array", self.chance_of_array),
            ("chance-of-anon-field", self.chance_of_anon_field),
            ("chance-of-bitfield", self.chance_of_bitfield),
            ("chance-of-own-method", self.chance_of_own_method),
            ("chance-of-override-method", self.chance_of_override_method),
            ("chance-of-class-aligned", self.chance_of_class_aligned),
            ("chance-of-class-packed", self.chance_of_class_packed),
            ("chance-of-vtordisp-packed", self.chance_of_vtordisp),
            ("chance-of-field-aligned", self.chance_of_field_aligned),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (option, value) in self.percentages() {
            if value > 100 {
                return Err(ConfigError::InvalidPercentage { option, value });
            }
        }
        if self.min_num_fields > self.max_num_fields {
            return Err(ConfigError::InvalidFieldRange {
                min: self.min_num_fields,
                max: self.max_num_fields,
            });
        }
        if self.avg_num_array_elements > MAX_AVG_ARRAY_ELEMENTS {
            return Err(ConfigError::InvalidAverage(self.avg_num_array_elements));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.num_classes, 30);
        assert_eq!(config.dialect, Dialect::Microsoft);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.chance_of_array = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPercentage { option: "chance-of-array", value: 101 })
        ));

        let config = Config::default().with_field_range(5, 2);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFieldRange { min: 5, max: 2 })));

        let mut config = Config::default();
        config.avg_num_array_elements = MAX_AVG_ARRAY_ELEMENTS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidAverage(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": 7, "dialect": "gnu"}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.dialect, Dialect::Gnu);
        assert_eq!(config.max_num_fields, 30);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/layout-fuzz.json").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("layout-fuzz-config-{}.json", std::process::id()));
        let config = Config::never().with_seed(99).with_dialect(Dialect::Gnu);
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_dialect_flags() {
        assert_eq!(Dialect::from_gnu_flag(true), Dialect::Gnu);
        assert!(Dialect::Gnu.permits_mixed_virtuality());
        assert!(!Dialect::Microsoft.permits_mixed_virtuality());
    }
}
