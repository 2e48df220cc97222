//! Model construction configuration
//!
//! [`ModelConfig`] is the user-facing, serializable configuration (presets, YAML).
//! It compiles into [`BuildOptions`], the compact options value every builder carries.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum length of a `string` value (1 MiB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1_048_576;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    /// Every builder rule is enforced.
    Strict,
    /// Builders assemble nodes without running any rule. Used to stage
    /// non-conformant input (e.g. round-tripping malformed payloads).
    Lenient,
    /// Structural rules are enforced, reference target types and control
    /// characters are not checked.
    Permissive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub validate: bool,
    pub check_reference_types: bool,
    pub check_control_chars: bool,
    pub max_string_length: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::preset(Preset::Strict)
    }
}

/// On-disk shape: an optional preset plus optional overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    preset: Option<Preset>,
    validate: Option<bool>,
    check_reference_types: Option<bool>,
    check_control_chars: Option<bool>,
    max_string_length: Option<usize>,
}

impl ModelConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self {
                validate: true,
                check_reference_types: true,
                check_control_chars: true,
                max_string_length: DEFAULT_MAX_STRING_LENGTH,
            },
            Preset::Lenient => Self {
                validate: false,
                check_reference_types: false,
                check_control_chars: false,
                max_string_length: DEFAULT_MAX_STRING_LENGTH,
            },
            Preset::Permissive => Self {
                validate: true,
                check_reference_types: false,
                check_control_chars: false,
                max_string_length: DEFAULT_MAX_STRING_LENGTH,
            },
        }
    }

    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Parse a YAML document. Unspecified settings come from `preset`
    /// (or [`Preset::Strict`] when no preset is named).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        let mut config = Self::preset(file.preset.unwrap_or(Preset::Strict));

        if let Some(validate) = file.validate {
            config.validate = validate;
        }
        if let Some(check) = file.check_reference_types {
            config.check_reference_types = check;
        }
        if let Some(check) = file.check_control_chars {
            config.check_control_chars = check;
        }
        if let Some(max) = file.max_string_length {
            config.max_string_length = max;
        }

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the configuration and produce the options handed to builders.
    pub fn compile(&self) -> Result<BuildOptions> {
        if self.max_string_length == 0 {
            return Err(Error::InvalidConfig(
                "max_string_length must be greater than zero".to_string(),
            ));
        }

        Ok(BuildOptions {
            validate: self.validate,
            check_reference_types: self.check_reference_types,
            check_control_chars: self.check_control_chars,
            max_string_length: self.max_string_length,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelConfigBuilder {
    preset: Option<Preset>,
    validate: Option<bool>,
    check_reference_types: Option<bool>,
    check_control_chars: Option<bool>,
    max_string_length: Option<usize>,
}

impl ModelConfigBuilder {
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn check_reference_types(mut self, check: bool) -> Self {
        self.check_reference_types = Some(check);
        self
    }

    pub fn check_control_chars(mut self, check: bool) -> Self {
        self.check_control_chars = Some(check);
        self
    }

    pub fn max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(max);
        self
    }

    pub fn build(self) -> ModelConfig {
        let base = ModelConfig::preset(self.preset.unwrap_or(Preset::Strict));
        ModelConfig {
            validate: self.validate.unwrap_or(base.validate),
            check_reference_types: self
                .check_reference_types
                .unwrap_or(base.check_reference_types),
            check_control_chars: self.check_control_chars.unwrap_or(base.check_control_chars),
            max_string_length: self.max_string_length.unwrap_or(base.max_string_length),
        }
    }
}

/// Options carried by every builder.
///
/// `validate == false` is the documented escape hatch for validation-suppressed
/// construction: `build()` then performs pure assembly and conformance becomes
/// the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub validate: bool,
    pub check_reference_types: bool,
    pub check_control_chars: bool,
    pub max_string_length: usize,
}

impl BuildOptions {
    pub const fn strict() -> Self {
        Self {
            validate: true,
            check_reference_types: true,
            check_control_chars: true,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }

    pub const fn unvalidated() -> Self {
        Self {
            validate: false,
            ..Self::strict()
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let strict = ModelConfig::preset(Preset::Strict);
        assert!(strict.validate);
        assert!(strict.check_reference_types);

        let lenient = ModelConfig::preset(Preset::Lenient);
        assert!(!lenient.validate);

        let permissive = ModelConfig::preset(Preset::Permissive);
        assert!(permissive.validate);
        assert!(!permissive.check_reference_types);
    }

    #[test]
    fn test_builder_overrides_preset() {
        let cfg = ModelConfig::builder()
            .preset(Preset::Permissive)
            .check_reference_types(true)
            .max_string_length(64)
            .build();

        assert!(cfg.validate);
        assert!(cfg.check_reference_types);
        assert!(!cfg.check_control_chars);
        assert_eq!(cfg.max_string_length, 64);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
preset: Lenient
check_reference_types: true
max_string_length: 4096
"#;
        let cfg = ModelConfig::from_yaml(yaml).unwrap();
        assert!(!cfg.validate);
        assert!(cfg.check_reference_types);
        assert_eq!(cfg.max_string_length, 4096);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        assert!(ModelConfig::from_yaml("preset: Strict\nfail_fast: true\n").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let cfg = ModelConfig::preset(Preset::Permissive);
        let yaml = cfg.to_yaml().unwrap();
        assert_eq!(ModelConfig::from_yaml(&yaml).unwrap(), cfg);
    }

    #[test]
    fn test_compile() {
        let options = ModelConfig::default().compile().unwrap();
        assert_eq!(options, BuildOptions::strict());

        let invalid = ModelConfig::builder().max_string_length(0).build();
        assert!(matches!(invalid.compile(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_unvalidated_options() {
        let options = BuildOptions::unvalidated();
        assert!(!options.validate);
        assert!(options.check_reference_types);
    }
}
