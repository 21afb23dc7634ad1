//! Entry point for mapping R4 resources to and from FHIR JSON.

use serde_json::Value;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::json::{Context, FhirElement};
use crate::r4::{FhirResource, Resource};

/// Parses FHIR R4 JSON into typed resources and serialises them back.
///
/// ```
/// use cobalt_models::r4::{Account, FhirR4Parser};
///
/// let parser = FhirR4Parser::new();
/// let account: Account = parser
///     .to_fhir(r#"{"resourceType":"Account","id":"a1","status":"active"}"#)
///     .unwrap();
/// assert_eq!(account.name, None);
/// assert_eq!(
///     parser.from_fhir(&account).unwrap(),
///     r#"{"resourceType":"Account","id":"a1","status":"active"}"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct FhirR4Parser {
    config: ParserConfig,
}

impl FhirR4Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a resource of a statically known type.
    pub fn to_fhir<T: FhirResource>(&self, json: &str) -> Result<T> {
        let value: Value = serde_json::from_str(json)?;
        self.to_fhir_value(&value)
    }

    pub fn to_fhir_value<T: FhirResource>(&self, value: &Value) -> Result<T> {
        let expected = T::RESOURCE_TYPE.as_str();
        match value.get("resourceType") {
            Some(Value::String(found)) if found == expected => {}
            Some(Value::String(found)) => {
                return Err(Error::ResourceTypeMismatch {
                    expected: expected.to_string(),
                    found: found.clone(),
                })
            }
            Some(_) | None if !value.is_object() => {
                return Err(Error::ExpectedObject(expected.to_string()))
            }
            Some(_) => {
                let cx = Context::new(&self.config, expected);
                return Err(cx.field("resourceType").invalid("expected a JSON string"));
            }
            None => return Err(Error::MissingResourceType),
        }

        let resource = T::decode(Some(value), None, &Context::new(&self.config, expected))?;
        debug!(resource_type = expected, id = ?resource.id(), "decoded resource");
        Ok(resource)
    }

    /// Parses any supported resource, dispatching on `resourceType`.
    pub fn parse_resource(&self, json: &str) -> Result<Resource> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_resource_value(&value)
    }

    pub fn parse_resource_value(&self, value: &Value) -> Result<Resource> {
        let resource = Resource::decode(Some(value), None, &Context::new(&self.config, "Resource"))?;
        debug!(
            resource_type = %resource.resource_type(),
            id = ?resource.id(),
            "decoded resource"
        );
        Ok(resource)
    }

    /// Serialises a resource to JSON text, pretty-printed when the configuration asks
    /// for it.
    pub fn from_fhir<T: FhirElement>(&self, resource: &T) -> Result<String> {
        let value = self.from_fhir_value(resource);
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    pub fn from_fhir_value<T: FhirElement>(&self, resource: &T) -> Value {
        let value = resource.encode().value.unwrap_or(Value::Null);
        debug!(
            resource_type = value.get("resourceType").and_then(serde_json::Value::as_str).unwrap_or_default(),
            "encoded resource"
        );
        value
    }
}
