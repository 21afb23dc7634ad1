//! JSON mapping engine
//!
//! FHIR JSON is mapped onto the typed model through a small set of traits:
//!
//! - [`FhirElement`]: one element value. Primitives decode from a value and its
//!   `_name` metadata, complex types from a JSON object.
//! - [`Property`]: how a field of a given cardinality is read from and written to
//!   its parent object (`Option<T>`, `Vec<T>`).
//! - [`Choice`]: a `name[x]` slot whose JSON key carries the type name.
//!
//! [`ObjectReader`] tracks which properties of an object were consumed so that
//! anything left over can be reported as an unknown element.

#[macro_use]
mod macros;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::{Handling, ParserConfig};
use crate::error::{Error, Result};
use crate::primitive::{is_valid_id, Id};

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Root(&'a str),
    Field(&'a str),
    Index(usize),
}

/// Location of an element inside the document being decoded, rendered as
/// `Account.coverage[0].priority`.
#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    parent: Option<&'a Path<'a>>,
    segment: Segment<'a>,
}

impl<'a> Path<'a> {
    pub fn root(name: &'a str) -> Self {
        Self {
            parent: None,
            segment: Segment::Root(name),
        }
    }

    pub fn field<'b>(&'b self, name: &'b str) -> Path<'b> {
        Path {
            parent: Some(self),
            segment: Segment::Field(name),
        }
    }

    pub fn index(&self, index: usize) -> Path<'_> {
        Path {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            write!(f, "{}", parent)?;
        }
        match self.segment {
            Segment::Root(name) => f.write_str(name),
            Segment::Field(name) if self.parent.is_some() => write!(f, ".{}", name),
            Segment::Field(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Decoding state handed down the element tree.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    config: &'a ParserConfig,
    path: Path<'a>,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a ParserConfig, root: &'a str) -> Self {
        Self {
            config,
            path: Path::root(root),
        }
    }

    pub fn field<'b>(&'b self, name: &'b str) -> Context<'b> {
        Context {
            config: self.config,
            path: self.path.field(name),
        }
    }

    pub fn index(&self, index: usize) -> Context<'_> {
        Context {
            config: self.config,
            path: self.path.index(index),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        self.config
    }

    pub fn path(&self) -> String {
        self.path.to_string()
    }

    pub fn invalid(&self, message: impl Into<String>) -> Error {
        Error::InvalidValue {
            path: self.path(),
            message: message.into(),
        }
    }

    /// Applies a handling policy to a recoverable problem. `Ok(())` means the caller
    /// drops the offending JSON and carries on.
    pub fn tolerate(&self, handling: Handling, error: Error) -> Result<()> {
        match handling {
            Handling::Error => Err(error),
            Handling::Warn => {
                tracing::warn!(path = %self.path, "dropping input: {}", error);
                Ok(())
            }
            Handling::Ignore => Ok(()),
        }
    }

    /// Like [`tolerate`](Self::tolerate), for input the caller keeps in a rewritten form.
    pub fn rewrite(&self, handling: Handling, error: Error) -> Result<()> {
        match handling {
            Handling::Error => Err(error),
            Handling::Warn => {
                tracing::warn!(path = %self.path, "rewriting input: {}", error);
                Ok(())
            }
            Handling::Ignore => Ok(()),
        }
    }
}

/// JSON produced for one element: the value under `name` and, for primitives, the
/// metadata object under `_name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoded {
    pub value: Option<Value>,
    pub meta: Option<Value>,
}

impl Encoded {
    pub fn value(value: Value) -> Self {
        Self {
            value: Some(value),
            meta: None,
        }
    }
}

/// A value that maps to one FHIR element.
pub trait FhirElement: Sized {
    /// Whether the element is a FHIR primitive with `_name` metadata.
    const PRIMITIVE: bool = false;

    /// `value` and `meta` are never both `None`.
    fn decode(value: Option<&Value>, meta: Option<&Value>, cx: &Context<'_>) -> Result<Self>;

    /// Decodes the element as a property of another element. `Ok(None)` drops it.
    fn decode_nested(
        value: Option<&Value>,
        meta: Option<&Value>,
        cx: &Context<'_>,
    ) -> Result<Option<Self>> {
        Self::decode(value, meta, cx).map(Some)
    }

    fn encode(&self) -> Encoded;
}

/// A field of a given cardinality inside its parent object.
pub trait Property: Sized {
    fn read(reader: &mut ObjectReader<'_, '_>, name: &str) -> Result<Self>;
    fn write(&self, writer: &mut ObjectWriter, name: &str);
}

impl<T: FhirElement> Property for Option<T> {
    fn read(reader: &mut ObjectReader<'_, '_>, name: &str) -> Result<Self> {
        reader.optional(name)
    }

    fn write(&self, writer: &mut ObjectWriter, name: &str) {
        if let Some(element) = self {
            writer.element(name, element);
        }
    }
}

impl<T: FhirElement> Property for Vec<T> {
    fn read(reader: &mut ObjectReader<'_, '_>, name: &str) -> Result<Self> {
        reader.list(name)
    }

    fn write(&self, writer: &mut ObjectWriter, name: &str) {
        writer.list(name, self);
    }
}

/// A `name[x]` slot. Each variant is stored under `prefix` followed by its type name.
pub trait Choice: Sized {
    fn read_choice(reader: &mut ObjectReader<'_, '_>, prefix: &str) -> Result<Option<Self>>;
    fn write_choice(&self, writer: &mut ObjectWriter, prefix: &str);
    /// Type name used in the JSON key, e.g. `Quantity` for `valueQuantity`.
    fn type_name(&self) -> &'static str;
}

impl FhirElement for String {
    fn decode(value: Option<&Value>, _meta: Option<&Value>, cx: &Context<'_>) -> Result<Self> {
        match value {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(cx.invalid("expected a JSON string")),
        }
    }

    fn encode(&self) -> Encoded {
        Encoded::value(Value::String(self.clone()))
    }
}

impl<T: FhirElement> FhirElement for Box<T> {
    const PRIMITIVE: bool = T::PRIMITIVE;

    fn decode(value: Option<&Value>, meta: Option<&Value>, cx: &Context<'_>) -> Result<Self> {
        T::decode(value, meta, cx).map(Box::new)
    }

    fn decode_nested(
        value: Option<&Value>,
        meta: Option<&Value>,
        cx: &Context<'_>,
    ) -> Result<Option<Self>> {
        T::decode_nested(value, meta, cx).map(|element| element.map(Box::new))
    }

    fn encode(&self) -> Encoded {
        (**self).encode()
    }
}

/// Returns the JSON object a complex element decodes from.
pub fn expect_object<'v>(
    value: Option<&'v Value>,
    cx: &Context<'_>,
) -> Result<&'v Map<String, Value>> {
    match value {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(Error::ExpectedObject(cx.path())),
    }
}

/// `Serialize` through the FHIR JSON encoding.
pub fn serialize_element<T, S>(element: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: FhirElement,
    S: Serializer,
{
    element
        .encode()
        .value
        .unwrap_or(Value::Null)
        .serialize(serializer)
}

/// `Deserialize` through the FHIR JSON decoding, using the default configuration.
pub fn deserialize_element<'de, T, D>(deserializer: D, root: &str) -> std::result::Result<T, D::Error>
where
    T: FhirElement,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let config = ParserConfig::default();
    T::decode(Some(&value), None, &Context::new(&config, root)).map_err(serde::de::Error::custom)
}

/// Reads the properties of one JSON object.
pub struct ObjectReader<'a, 'c> {
    object: &'a Map<String, Value>,
    cx: Context<'c>,
    consumed: HashSet<&'a str>,
}

impl<'a, 'c> ObjectReader<'a, 'c> {
    pub fn new(object: &'a Map<String, Value>, cx: Context<'c>) -> Self {
        Self {
            object,
            cx,
            consumed: HashSet::with_capacity(object.len()),
        }
    }

    pub fn context(&self) -> &Context<'c> {
        &self.cx
    }

    fn lookup(&mut self, key: &str) -> Option<&'a Value> {
        let object = self.object;
        let (key, value) = object.get_key_value(key)?;
        self.consumed.insert(key.as_str());
        Some(value)
    }

    /// Looks up `name` and, for primitives, `_name`. Top level `null`s are treated
    /// according to the null handling policy.
    fn take(&mut self, name: &str, primitive: bool) -> Result<(Option<&'a Value>, Option<&'a Value>)> {
        let value = self.lookup(name);
        let meta = if primitive {
            self.lookup(&format!("_{}", name))
        } else {
            None
        };
        let value = self.drop_null(name, value)?;
        let meta = match meta {
            Some(Value::Null) => self.drop_null(&format!("_{}", name), meta)?,
            other => other,
        };
        Ok((value, meta))
    }

    fn drop_null(&self, name: &str, value: Option<&'a Value>) -> Result<Option<&'a Value>> {
        match value {
            Some(Value::Null) => {
                let cx = self.cx.field(name);
                cx.tolerate(self.cx.config.null_values, Error::NullValue(cx.path()))?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Reads the raw JSON of a property that is not mapped through [`FhirElement`].
    pub fn raw(&mut self, name: &str) -> Option<&'a Value> {
        self.lookup(name)
    }

    pub fn optional<T: FhirElement>(&mut self, name: &str) -> Result<Option<T>> {
        let (value, meta) = self.take(name, T::PRIMITIVE)?;
        if value.is_none() && meta.is_none() {
            return Ok(None);
        }
        T::decode_nested(value, meta, &self.cx.field(name))
    }

    pub fn required<T: FhirElement>(&mut self, name: &str) -> Result<T> {
        match self.optional(name)? {
            Some(element) => Ok(element),
            None => Err(Error::MissingElement(self.cx.field(name).path())),
        }
    }

    /// Reads a repeating element. Primitive values and their metadata are two
    /// index-aligned arrays with `null` placeholders.
    pub fn list<T: FhirElement>(&mut self, name: &str) -> Result<Vec<T>> {
        let (values, metas) = self.take(name, T::PRIMITIVE)?;
        let cx = self.cx.field(name);
        let values = match values {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => return Err(cx.invalid("expected a JSON array")),
        };
        let metas = match metas {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => return Err(cx.invalid("expected a JSON array for primitive metadata")),
        };

        let len = match (values, metas) {
            (None, None) => return Ok(Vec::new()),
            (Some(values), Some(metas)) if values.len() != metas.len() => {
                return Err(cx.invalid(format!(
                    "{} values but {} metadata entries",
                    values.len(),
                    metas.len()
                )));
            }
            (Some(values), _) => values.len(),
            (None, Some(metas)) => metas.len(),
        };
        if len == 0 {
            cx.tolerate(self.cx.config.empty_arrays, Error::EmptyArray(cx.path()))?;
            return Ok(Vec::new());
        }

        let mut items = Vec::with_capacity(len);
        for index in 0..len {
            let item_cx = cx.index(index);
            let value = values.and_then(|v| v.get(index)).filter(|v| !v.is_null());
            let meta = metas.and_then(|m| m.get(index)).filter(|m| !m.is_null());
            if value.is_none() && meta.is_none() {
                item_cx.tolerate(
                    self.cx.config.null_values,
                    Error::NullValue(item_cx.path()),
                )?;
                continue;
            }
            if let Some(item) = T::decode_nested(value, meta, &item_cx)? {
                items.push(item);
            }
        }
        Ok(items)
    }

    /// Reads a `1..*` element.
    pub fn required_list<T: FhirElement>(&mut self, name: &str) -> Result<Vec<T>> {
        let items = self.list(name)?;
        if items.is_empty() {
            return Err(Error::MissingElement(self.cx.field(name).path()));
        }
        Ok(items)
    }

    pub fn choice<C: Choice>(&mut self, prefix: &str) -> Result<Option<C>> {
        C::read_choice(self, prefix)
    }

    pub fn required_choice<C: Choice>(&mut self, prefix: &str) -> Result<Option<C>> {
        match C::read_choice(self, prefix)? {
            Some(choice) => Ok(Some(choice)),
            None => Err(Error::MissingElement(format!(
                "{}[x]",
                self.cx.field(prefix).path()
            ))),
        }
    }

    /// Consumes `resourceType` and checks it names the expected resource.
    pub fn resource_type(&mut self, expected: &str) -> Result<()> {
        match self.lookup("resourceType") {
            None => Err(Error::MissingResourceType),
            Some(Value::String(found)) if found == expected => Ok(()),
            Some(Value::String(found)) => Err(Error::ResourceTypeMismatch {
                expected: expected.to_string(),
                found: found.clone(),
            }),
            Some(_) => Err(self.cx.field("resourceType").invalid("expected a JSON string")),
        }
    }

    /// Reads a resource `id`, checking its syntax when the configuration asks for it.
    pub fn resource_id(&mut self, name: &str) -> Result<Option<Id>> {
        let id: Option<Id> = self.optional(name)?;
        if self.cx.config.validate_ids {
            if let Some(value) = id.as_ref().and_then(|id| id.value.as_deref()) {
                if !is_valid_id(value) {
                    return Err(self
                        .cx
                        .field(name)
                        .invalid(format!("'{}' is not a valid resource id", value)));
                }
            }
        }
        Ok(id)
    }

    /// Checks that every property of the object was consumed.
    pub fn finish(self) -> Result<()> {
        for key in self.object.keys() {
            if self.consumed.contains(key.as_str()) {
                continue;
            }
            let cx = self.cx.field(key);
            cx.tolerate(
                self.cx.config.unknown_elements,
                Error::UnknownElement(cx.path()),
            )?;
        }
        Ok(())
    }
}

/// Builds one JSON object, property by property, in definition order.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &str, value: Value) {
        self.object.insert(key.to_string(), value);
    }

    pub fn element<T: FhirElement>(&mut self, name: &str, element: &T) {
        let Encoded { value, meta } = element.encode();
        if let Some(value) = value {
            self.put(name, value);
        }
        if let Some(meta) = meta {
            self.object.insert(format!("_{}", name), meta);
        }
    }

    pub fn list<T: FhirElement>(&mut self, name: &str, items: &[T]) {
        if items.is_empty() {
            return;
        }
        let mut values = Vec::with_capacity(items.len());
        let mut metas = Vec::with_capacity(items.len());
        for item in items {
            let Encoded { value, meta } = item.encode();
            values.push(value.unwrap_or(Value::Null));
            metas.push(meta.unwrap_or(Value::Null));
        }
        if values.iter().any(|v| !v.is_null()) {
            self.put(name, Value::Array(values));
        }
        if metas.iter().any(|m| !m.is_null()) {
            self.object.insert(format!("_{}", name), Value::Array(metas));
        }
    }

    pub fn choice<C: Choice>(&mut self, prefix: &str, choice: &Option<C>) {
        if let Some(choice) = choice {
            choice.write_choice(self, prefix);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.object.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.object
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}
