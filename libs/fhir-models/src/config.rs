//! Parser configuration
//!
//! A [`ParserConfig`] starts from a [`Preset`] and can be adjusted with the builder
//! or loaded from YAML:
//!
//! ```rust
//! use cobalt_models::config::{Handling, ParserConfig, Preset};
//!
//! let cfg = ParserConfig::builder()
//!     .preset(Preset::Lenient)
//!     .unknown_elements(Handling::Error)
//!     .pretty(true)
//!     .build();
//! assert_eq!(cfg.null_values, Handling::Warn);
//!
//! let cfg = ParserConfig::from_yaml("preset: Lenient\nvalidate_ids: true\n").unwrap();
//! assert!(cfg.validate_ids);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the parser does when it meets JSON it cannot map losslessly.
///
/// With `Warn` and `Ignore` the offending JSON is dropped, or for numbers written in
/// their canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Handling {
    #[default]
    Error,
    Warn,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    /// Reject anything that would not survive a round trip.
    #[default]
    Strict,
    /// Accept real-world documents, logging what gets dropped.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Properties that are not part of the model.
    pub unknown_elements: Handling,
    /// `null` outside of aligned primitive arrays.
    pub null_values: Handling,
    /// `[]` for repeating elements.
    pub empty_arrays: Handling,
    /// Numbers whose JSON text the model writes back differently (`1.5e2`, `-0.0`).
    pub number_rewrites: Handling,
    /// Check resource ids against `[A-Za-z0-9\-\.]{1,64}`.
    pub validate_ids: bool,
    /// Pretty-print JSON produced by `from_fhir`.
    pub pretty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::preset(Preset::Strict)
    }
}

impl ParserConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self {
                unknown_elements: Handling::Error,
                null_values: Handling::Error,
                empty_arrays: Handling::Error,
                number_rewrites: Handling::Error,
                validate_ids: true,
                pretty: false,
            },
            Preset::Lenient => Self {
                unknown_elements: Handling::Warn,
                null_values: Handling::Warn,
                empty_arrays: Handling::Warn,
                number_rewrites: Handling::Warn,
                validate_ids: false,
                pretty: false,
            },
        }
    }

    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Loads a configuration. A `preset` key selects the base values, every other key
    /// overrides the preset.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        let mut cfg = Self::preset(raw.preset.unwrap_or_default());
        if let Some(handling) = raw.unknown_elements {
            cfg.unknown_elements = handling;
        }
        if let Some(handling) = raw.null_values {
            cfg.null_values = handling;
        }
        if let Some(handling) = raw.empty_arrays {
            cfg.empty_arrays = handling;
        }
        if let Some(handling) = raw.number_rewrites {
            cfg.number_rewrites = handling;
        }
        if let Some(validate) = raw.validate_ids {
            cfg.validate_ids = validate;
        }
        if let Some(pretty) = raw.pretty {
            cfg.pretty = pretty;
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// True when no input can be dropped silently or with a warning.
    pub fn is_lossless(&self) -> bool {
        self.unknown_elements == Handling::Error
            && self.null_values == Handling::Error
            && self.empty_arrays == Handling::Error
            && self.number_rewrites == Handling::Error
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    preset: Option<Preset>,
    unknown_elements: Option<Handling>,
    null_values: Option<Handling>,
    empty_arrays: Option<Handling>,
    number_rewrites: Option<Handling>,
    validate_ids: Option<bool>,
    pretty: Option<bool>,
}

#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    preset: Preset,
    unknown_elements: Option<Handling>,
    null_values: Option<Handling>,
    empty_arrays: Option<Handling>,
    number_rewrites: Option<Handling>,
    validate_ids: Option<bool>,
    pretty: Option<bool>,
}

impl ParserConfigBuilder {
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    pub fn unknown_elements(mut self, handling: Handling) -> Self {
        self.unknown_elements = Some(handling);
        self
    }

    pub fn null_values(mut self, handling: Handling) -> Self {
        self.null_values = Some(handling);
        self
    }

    pub fn empty_arrays(mut self, handling: Handling) -> Self {
        self.empty_arrays = Some(handling);
        self
    }

    pub fn number_rewrites(mut self, handling: Handling) -> Self {
        self.number_rewrites = Some(handling);
        self
    }

    pub fn validate_ids(mut self, validate: bool) -> Self {
        self.validate_ids = Some(validate);
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    pub fn build(self) -> ParserConfig {
        let base = ParserConfig::preset(self.preset);
        ParserConfig {
            unknown_elements: self.unknown_elements.unwrap_or(base.unknown_elements),
            null_values: self.null_values.unwrap_or(base.null_values),
            empty_arrays: self.empty_arrays.unwrap_or(base.empty_arrays),
            number_rewrites: self.number_rewrites.unwrap_or(base.number_rewrites),
            validate_ids: self.validate_ids.unwrap_or(base.validate_ids),
            pretty: self.pretty.unwrap_or(base.pretty),
        }
    }
}
