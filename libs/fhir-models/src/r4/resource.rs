//! Resource polymorphism
//!
//! [`Resource`] holds any supported resource and dispatches on `resourceType` when
//! decoding. [`ResourceType`] names the supported types.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::json::{self, Context, Encoded, FhirElement};
use crate::r4::extension::{Extension, Meta, Narrative};
use crate::r4::resources::*;

/// Behaviour shared by every resource type.
pub trait FhirResource: FhirElement {
    const RESOURCE_TYPE: ResourceType;

    /// Logical id, if the resource has one.
    fn id(&self) -> Option<&str>;
    fn meta(&self) -> Option<&Meta>;
    fn into_resource(self) -> Resource;
    /// Hands the resource back unchanged when it is of another type.
    fn try_from_resource(resource: Resource) -> std::result::Result<Self, Resource>;
}

/// A resource with narrative, extensions and contained resources.
pub trait DomainResource {
    fn text(&self) -> Option<&Narrative>;
    fn contained(&self) -> &[Resource];
    fn extension(&self) -> &[Extension];
    fn modifier_extension(&self) -> &[Extension];

    /// Resolves a local reference such as `#med1` to the contained resource with
    /// that id.
    fn resolve_contained(&self, reference: &str) -> Option<&Resource> {
        let id = reference.strip_prefix('#')?;
        self.contained().iter().find(|r| r.id() == Some(id))
    }

    /// Extensions with the given url.
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> Box<dyn Iterator<Item = &'a Extension> + 'a> {
        Box::new(self.extension().iter().filter(move |ext| ext.url == url))
    }
}

macro_rules! is_domain {
    (domain) => {
        true
    };
    (resource) => {
        false
    };
}

macro_rules! as_domain {
    (domain, $resource:expr) => {
        Some($resource as &dyn DomainResource)
    };
    (resource, $resource:expr) => {{
        let _ = $resource;
        None
    }};
}

macro_rules! resource_registry {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            $($name,)+
        }

        impl ResourceType {
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$name,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ResourceType::$name => stringify!($name),)+
                }
            }

            /// Case-insensitive lookup, e.g. `medicationstatement`.
            pub fn from_name_ignore_case(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|t| t.as_str().eq_ignore_ascii_case(name))
            }

            pub fn is_domain_resource(&self) -> bool {
                match self {
                    $(ResourceType::$name => is_domain!($kind),)+
                }
            }
        }

        /// Any supported resource.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $($name($name),)+
        }

        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    $(Resource::$name(_) => ResourceType::$name,)+
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $(Resource::$name(resource) => FhirResource::id(resource),)+
                }
            }

            pub fn meta(&self) -> Option<&Meta> {
                match self {
                    $(Resource::$name(resource) => FhirResource::meta(resource),)+
                }
            }

            /// `None` for resources that are not domain resources, such as `Bundle`.
            pub fn as_domain_resource(&self) -> Option<&dyn DomainResource> {
                match self {
                    $(Resource::$name(resource) => as_domain!($kind, resource),)+
                }
            }
        }

        impl FhirElement for Resource {
            fn decode(value: Option<&Value>, meta: Option<&Value>, cx: &Context<'_>) -> Result<Self> {
                let object = json::expect_object(value, cx)?;
                let name = match object.get("resourceType") {
                    Some(Value::String(name)) => name,
                    Some(_) => {
                        return Err(cx.field("resourceType").invalid("expected a JSON string"))
                    }
                    None => return Err(Error::MissingResourceType),
                };
                match name.parse::<ResourceType>()? {
                    $(ResourceType::$name => $name::decode(value, meta, cx).map(Resource::$name),)+
                }
            }

            /// Contained and bundled resources of an unsupported type follow the unknown
            /// element policy.
            fn decode_nested(
                value: Option<&Value>,
                meta: Option<&Value>,
                cx: &Context<'_>,
            ) -> Result<Option<Self>> {
                if let Some(Value::String(name)) = value.and_then(|v| v.get("resourceType")) {
                    if name.parse::<ResourceType>().is_err() {
                        cx.tolerate(
                            cx.config().unknown_elements,
                            Error::UnknownResourceType(name.clone()),
                        )?;
                        return Ok(None);
                    }
                }
                Self::decode(value, meta, cx).map(Some)
            }

            fn encode(&self) -> Encoded {
                match self {
                    $(Resource::$name(resource) => resource.encode(),)+
                }
            }
        }
    };
}

resource_registry! {
    Account => domain,
    AdverseEvent => domain,
    AllergyIntolerance => domain,
    Basic => domain,
    Bundle => resource,
    CareTeam => domain,
    Condition => domain,
    DocumentReference => domain,
    Flag => domain,
    Goal => domain,
    Medication => domain,
    MedicationRequest => domain,
    MedicationStatement => domain,
    Observation => domain,
    OperationOutcome => domain,
    Organization => domain,
    Patient => domain,
    Practitioner => domain,
    StructureMap => domain,
    Subscription => domain,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownResourceType(s.to_string()))
    }
}

impl serde::Serialize for Resource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        json::serialize_element(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        json::deserialize_element(deserializer, "Resource")
    }
}
