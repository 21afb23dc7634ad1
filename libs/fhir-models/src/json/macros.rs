//! Declarative macros generating the model types together with their JSON codecs.
//!
//! Field declarations read `name: Type = "jsonName"` with an optional mode:
//!
//! - no mode: `Option<T>` or `Vec<T>`, read through [`Property`](crate::json::Property)
//! - `[required]`: singular `1..1` element
//! - `[nonempty]`: repeating `1..*` element
//! - `[choice]`, `[required choice]`: `name[x]` slot stored as `Option<C>`

/// Defines a code system enum for a required binding.
#[macro_export]
macro_rules! fhir_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            system = $system:literal;
            value_set = $value_set:literal;
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const SYSTEM: &'static str = $system;
            pub const VALUE_SET: &'static str = $value_set;
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            pub fn system(&self) -> &'static str {
                Self::SYSTEM
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::from_code(s).ok_or_else(|| $crate::Error::UnknownCode {
                    path: stringify!($name).to_string(),
                    code: s.to_string(),
                    value_set: $value_set,
                })
            }
        }

        impl $crate::primitive::PrimitiveValue for $name {
            fn from_json(
                value: &::serde_json::Value,
                cx: &$crate::json::Context<'_>,
            ) -> $crate::Result<Self> {
                let code = value
                    .as_str()
                    .ok_or_else(|| cx.invalid("expected a code string"))?;
                Self::from_code(code).ok_or_else(|| $crate::Error::UnknownCode {
                    path: cx.path(),
                    code: code.to_string(),
                    value_set: $value_set,
                })
            }

            fn to_json(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.code().to_string())
            }
        }
    };
}

/// Defines a `name[x]` choice enum. Each variant names the type suffix of its JSON key.
#[macro_export]
macro_rules! fhir_choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident ( $ty:ty ) = $suffix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl $crate::json::Choice for $name {
            fn read_choice(
                reader: &mut $crate::json::ObjectReader<'_, '_>,
                prefix: &str,
            ) -> $crate::Result<Option<Self>> {
                let mut found: Option<Self> = None;
                $(
                    let key = format!("{}{}", prefix, $suffix);
                    if let Some(value) = reader.optional::<$ty>(&key)? {
                        if found.is_some() {
                            return Err($crate::Error::MultipleChoiceValues(format!(
                                "{}[x]",
                                reader.context().field(prefix).path()
                            )));
                        }
                        found = Some($name::$variant(value));
                    }
                )+
                Ok(found)
            }

            fn write_choice(&self, writer: &mut $crate::json::ObjectWriter, prefix: &str) {
                match self {
                    $( $name::$variant(value) => writer.element(&format!("{}{}", prefix, $suffix), value), )+
                }
            }

            fn type_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $suffix, )+
                }
            }
        }
    };
}

/// Defines a complex data type: `id` and `extension` come first.
#[macro_export]
macro_rules! fhir_element {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $json:literal $([$($mode:tt)+])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Unique id for inter-element referencing
            pub id: Option<String>,
            /// Additional content defined by implementations
            pub extension: Vec<$crate::r4::Extension>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::__fhir_codec! {
            @element $name,
            id: "id",
            extension: "extension",
            $( $field: $json $([$($mode)+])?, )*
        }
    };
}

/// Defines a backbone element: like [`fhir_element!`] plus `modifierExtension`.
#[macro_export]
macro_rules! fhir_backbone {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $json:literal $([$($mode:tt)+])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Unique id for inter-element referencing
            pub id: Option<String>,
            /// Additional content defined by implementations
            pub extension: Vec<$crate::r4::Extension>,
            /// Extensions that cannot be ignored even if unrecognized
            pub modifier_extension: Vec<$crate::r4::Extension>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::__fhir_codec! {
            @element $name,
            id: "id",
            extension: "extension",
            modifier_extension: "modifierExtension",
            $( $field: $json $([$($mode)+])?, )*
        }
    };
}

/// Defines a resource that is not a domain resource (no narrative, contained
/// resources or extensions), such as `Bundle`.
#[macro_export]
macro_rules! fhir_resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $rt:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $json:literal $([$($mode:tt)+])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Logical id of this artifact
            pub id: Option<$crate::primitive::Id>,
            /// Metadata about the resource
            pub meta: Option<$crate::r4::Meta>,
            /// A set of rules under which this content was created
            pub implicit_rules: Option<$crate::primitive::Uri>,
            /// Language of the resource content
            pub language: Option<$crate::primitive::Code>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::__fhir_codec! {
            @resource $name, $rt,
            id: "id" [resource_id],
            meta: "meta",
            implicit_rules: "implicitRules",
            language: "language",
            $( $field: $json $([$($mode)+])?, )*
        }

        $crate::__fhir_resource_impl!($name);
    };
}

/// Defines a domain resource: resource base elements followed by `text`,
/// `contained`, `extension` and `modifierExtension`.
#[macro_export]
macro_rules! fhir_domain_resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $rt:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $json:literal $([$($mode:tt)+])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Logical id of this artifact
            pub id: Option<$crate::primitive::Id>,
            /// Metadata about the resource
            pub meta: Option<$crate::r4::Meta>,
            /// A set of rules under which this content was created
            pub implicit_rules: Option<$crate::primitive::Uri>,
            /// Language of the resource content
            pub language: Option<$crate::primitive::Code>,
            /// Text summary of the resource, for human interpretation
            pub text: Option<$crate::r4::Narrative>,
            /// Contained, inline resources
            pub contained: Vec<$crate::r4::Resource>,
            /// Additional content defined by implementations
            pub extension: Vec<$crate::r4::Extension>,
            /// Extensions that cannot be ignored
            pub modifier_extension: Vec<$crate::r4::Extension>,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::__fhir_codec! {
            @resource $name, $rt,
            id: "id" [resource_id],
            meta: "meta",
            implicit_rules: "implicitRules",
            language: "language",
            text: "text",
            contained: "contained",
            extension: "extension",
            modifier_extension: "modifierExtension",
            $( $field: $json $([$($mode)+])?, )*
        }

        $crate::__fhir_resource_impl!($name);

        impl $crate::r4::DomainResource for $name {
            fn text(&self) -> Option<&$crate::r4::Narrative> {
                self.text.as_ref()
            }

            fn contained(&self) -> &[$crate::r4::Resource] {
                &self.contained
            }

            fn extension(&self) -> &[$crate::r4::Extension] {
                &self.extension
            }

            fn modifier_extension(&self) -> &[$crate::r4::Extension] {
                &self.modifier_extension
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_codec {
    (
        @element $name:ident,
        $( $field:ident : $json:literal $([$($mode:tt)+])? ),* $(,)?
    ) => {
        impl $crate::json::FhirElement for $name {
            fn decode(
                value: Option<&::serde_json::Value>,
                _meta: Option<&::serde_json::Value>,
                cx: &$crate::json::Context<'_>,
            ) -> $crate::Result<Self> {
                let object = $crate::json::expect_object(value, cx)?;
                let mut reader = $crate::json::ObjectReader::new(object, *cx);
                let element = Self::read_fields(&mut reader)?;
                reader.finish()?;
                Ok(element)
            }

            fn encode(&self) -> $crate::json::Encoded {
                let mut writer = $crate::json::ObjectWriter::new();
                self.write_fields(&mut writer);
                $crate::json::Encoded::value(writer.into_value())
            }
        }

        $crate::__fhir_codec!(@fields $name, $( $field: $json $([$($mode)+])?, )*);
    };

    (
        @resource $name:ident, $rt:literal,
        $( $field:ident : $json:literal $([$($mode:tt)+])? ),* $(,)?
    ) => {
        impl $crate::json::FhirElement for $name {
            fn decode(
                value: Option<&::serde_json::Value>,
                _meta: Option<&::serde_json::Value>,
                cx: &$crate::json::Context<'_>,
            ) -> $crate::Result<Self> {
                let object = $crate::json::expect_object(value, cx)?;
                let mut reader = $crate::json::ObjectReader::new(object, *cx);
                reader.resource_type($rt)?;
                let resource = Self::read_fields(&mut reader)?;
                reader.finish()?;
                Ok(resource)
            }

            fn encode(&self) -> $crate::json::Encoded {
                let mut writer = $crate::json::ObjectWriter::new();
                writer.put("resourceType", ::serde_json::Value::String($rt.to_string()));
                self.write_fields(&mut writer);
                $crate::json::Encoded::value(writer.into_value())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::json::serialize_element(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                $crate::json::deserialize_element(deserializer, $rt)
            }
        }

        $crate::__fhir_codec!(@fields $name, $( $field: $json $([$($mode)+])?, )*);
    };

    (
        @fields $name:ident,
        $( $field:ident : $json:literal $([$($mode:tt)+])? ),* $(,)?
    ) => {
        impl $name {
            fn read_fields(
                reader: &mut $crate::json::ObjectReader<'_, '_>,
            ) -> $crate::Result<Self> {
                Ok(Self {
                    $( $field: $crate::__fhir_read!(reader, $json $(, $($mode)+)?), )*
                })
            }

            fn write_fields(&self, writer: &mut $crate::json::ObjectWriter) {
                $( $crate::__fhir_write!(writer, self.$field, $json $(, $($mode)+)?); )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_read {
    ($reader:ident, $json:literal) => {
        $crate::json::Property::read($reader, $json)?
    };
    ($reader:ident, $json:literal, required) => {
        $reader.required($json)?
    };
    ($reader:ident, $json:literal, nonempty) => {
        $reader.required_list($json)?
    };
    ($reader:ident, $json:literal, choice) => {
        $reader.choice($json)?
    };
    ($reader:ident, $json:literal, required choice) => {
        $reader.required_choice($json)?
    };
    ($reader:ident, $json:literal, resource_id) => {
        $reader.resource_id($json)?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_write {
    ($writer:ident, $value:expr, $json:literal) => {
        $crate::json::Property::write(&$value, $writer, $json)
    };
    ($writer:ident, $value:expr, $json:literal, required) => {
        $writer.element($json, &$value)
    };
    ($writer:ident, $value:expr, $json:literal, nonempty) => {
        $writer.list($json, &$value)
    };
    ($writer:ident, $value:expr, $json:literal, choice) => {
        $writer.choice($json, &$value)
    };
    ($writer:ident, $value:expr, $json:literal, required choice) => {
        $writer.choice($json, &$value)
    };
    ($writer:ident, $value:expr, $json:literal, resource_id) => {
        $crate::json::Property::write(&$value, $writer, $json)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_resource_impl {
    ($name:ident) => {
        impl $crate::r4::FhirResource for $name {
            const RESOURCE_TYPE: $crate::r4::ResourceType = $crate::r4::ResourceType::$name;

            fn id(&self) -> Option<&str> {
                self.id.as_ref().and_then(|id| id.value.as_deref())
            }

            fn meta(&self) -> Option<&$crate::r4::Meta> {
                self.meta.as_ref()
            }

            fn into_resource(self) -> $crate::r4::Resource {
                $crate::r4::Resource::$name(self)
            }

            fn try_from_resource(
                resource: $crate::r4::Resource,
            ) -> ::std::result::Result<Self, $crate::r4::Resource> {
                match resource {
                    $crate::r4::Resource::$name(resource) => Ok(resource),
                    other => Err(other),
                }
            }
        }

        impl From<$name> for $crate::r4::Resource {
            fn from(resource: $name) -> Self {
                $crate::r4::Resource::$name(resource)
            }
        }
    };
}
