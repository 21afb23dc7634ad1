//! FHIR primitive elements
//!
//! A primitive element holds an optional value plus optional element metadata
//! (`id`, `extension`). In JSON the value sits under `name` and the metadata under
//! `_name`:
//!
//! ```json
//! { "birthDate": "1974-12-25", "_birthDate": { "extension": [ ... ] } }
//! ```

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Number, Value};

use crate::datetime::{XsDate, XsDateTime, XsTime};
use crate::error::Result;
use crate::json::{Context, Encoded, FhirElement, ObjectReader, ObjectWriter, Property};
use crate::r4::Extension;

/// Checks a resource id against the FHIR `id` syntax, `[A-Za-z0-9\-\.]{1,64}`.
pub fn is_valid_id(id: &str) -> bool {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    let re = ID_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9\-.]{1,64}$").expect("id regex must compile"));
    re.is_match(id)
}

/// A JSON value type that a FHIR primitive can carry.
pub trait PrimitiveValue: Sized {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self>;
    fn to_json(&self) -> Value;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T> {
    pub value: Option<T>,
    /// Element id from `_name.id`
    pub id: Option<String>,
    /// Extensions from `_name.extension`
    pub extension: Vec<Extension>,
}

impl<T> Default for Primitive<T> {
    fn default() -> Self {
        Self {
            value: None,
            id: None,
            extension: Vec::new(),
        }
    }
}

impl<T> Primitive<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        self.extension.push(extension);
        self
    }

    pub fn has_metadata(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }
}

impl Primitive<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<T> From<T> for Primitive<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Primitive<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: PrimitiveValue> FhirElement for Primitive<T> {
    const PRIMITIVE: bool = true;

    fn decode(value: Option<&Value>, meta: Option<&Value>, cx: &Context<'_>) -> Result<Self> {
        let value = value.map(|v| T::from_json(v, cx)).transpose()?;
        let (id, extension) = match meta {
            None => (None, Vec::new()),
            Some(Value::Object(map)) => {
                let mut reader = ObjectReader::new(map, *cx);
                let id = reader.optional("id")?;
                let extension = reader.list("extension")?;
                reader.finish()?;
                (id, extension)
            }
            Some(_) => return Err(cx.invalid("primitive metadata must be a JSON object")),
        };
        if value.is_none() && id.is_none() && extension.is_empty() {
            return Err(cx.invalid("primitive element has neither a value nor extensions"));
        }
        Ok(Self {
            value,
            id,
            extension,
        })
    }

    fn encode(&self) -> Encoded {
        let value = self.value.as_ref().map(T::to_json);
        let meta = if self.has_metadata() {
            let mut writer = ObjectWriter::new();
            self.id.write(&mut writer, "id");
            writer.list("extension", &self.extension);
            Some(writer.into_value())
        } else {
            None
        };
        Encoded { value, meta }
    }
}

impl PrimitiveValue for bool {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| cx.invalid("expected a JSON boolean"))
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Fails unless `written` is the text `number` was read from. Lenient configurations
/// keep the value and write it back as `written`.
fn check_canonical(number: &Number, written: &str, cx: &Context<'_>) -> Result<()> {
    let text = number.to_string();
    if text == written {
        return Ok(());
    }
    cx.rewrite(
        cx.config().number_rewrites,
        cx.invalid(format!("number {} would be written back as {}", text, written)),
    )
}

impl PrimitiveValue for i32 {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
        let n = value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| cx.invalid(format!("expected a 32-bit integer, found {}", value)))?;
        if let Value::Number(number) = value {
            check_canonical(number, &n.to_string(), cx)?;
        }
        Ok(n)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl PrimitiveValue for u32 {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
        let n = value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                cx.invalid(format!("expected a non-negative integer, found {}", value))
            })?;
        if let Value::Number(number) = value {
            check_canonical(number, &n.to_string(), cx)?;
        }
        Ok(n)
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Decimals keep the scale they were written with: `1.50` stays `1.50`. Exponent
/// notation and negative zero have no exact counterpart and count as rewrites.
impl PrimitiveValue for rust_decimal::Decimal {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
        let Value::Number(number) = value else {
            return Err(cx.invalid("expected a JSON number"));
        };
        let text = number.to_string();
        let decimal = rust_decimal::Decimal::from_str(&text)
            .or_else(|_| rust_decimal::Decimal::from_scientific(&text))
            .map_err(|err| cx.invalid(format!("invalid decimal '{}': {}", text, err)))?;
        check_canonical(number, &decimal.to_string(), cx)?;
        Ok(decimal)
    }

    fn to_json(&self) -> Value {
        let text = self.to_string();
        match Number::from_str(&text) {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(text),
        }
    }
}

impl PrimitiveValue for String {
    fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| cx.invalid("expected a JSON string"))
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! temporal_value {
    ($ty:ty, $kind:literal) => {
        impl PrimitiveValue for $ty {
            fn from_json(value: &Value, cx: &Context<'_>) -> Result<Self> {
                let text = value
                    .as_str()
                    .ok_or_else(|| cx.invalid(concat!("expected a ", $kind, " string")))?;
                text.parse().map_err(|err| cx.invalid(format!("{}", err)))
            }

            fn to_json(&self) -> Value {
                Value::String(self.to_string())
            }
        }
    };
}

temporal_value!(XsDate, "date");
temporal_value!(XsDateTime, "dateTime");
temporal_value!(XsTime, "time");

pub type Boolean = Primitive<bool>;
pub type Integer = Primitive<i32>;
pub type PositiveInt = Primitive<u32>;
pub type UnsignedInt = Primitive<u32>;
pub type FhirDecimal = Primitive<rust_decimal::Decimal>;
pub type FhirString = Primitive<String>;
pub type Code = Primitive<String>;
pub type Id = Primitive<String>;
pub type Markdown = Primitive<String>;
pub type Uri = Primitive<String>;
pub type Url = Primitive<String>;
pub type Canonical = Primitive<String>;
pub type Oid = Primitive<String>;
pub type Uuid = Primitive<String>;
pub type Base64Binary = Primitive<String>;
pub type Date = Primitive<XsDate>;
pub type DateTime = Primitive<XsDateTime>;
pub type Instant = Primitive<XsDateTime>;
pub type Time = Primitive<XsTime>;
