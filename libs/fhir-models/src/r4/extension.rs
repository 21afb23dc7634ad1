//! Extension, Narrative and Meta

use crate::primitive::{
    Base64Binary, Boolean, Canonical, Code, Date, DateTime, FhirDecimal, FhirString, Id, Instant,
    Integer, Markdown, Oid, PositiveInt, Primitive, Time, UnsignedInt, Uri, Url, Uuid,
};
use crate::r4::codesystem::NarrativeStatus;
use crate::r4::datatypes::{
    Address, Age, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, Count, Distance,
    Dosage, Duration, HumanName, Identifier, Money, Period, Quantity, Range, Ratio, Reference,
    SampledData, Signature, Timing,
};
use crate::r4::metadata::{ContactDetail, Expression, RelatedArtifact, UsageContext};

fhir_element! {
    /// Optional extension element
    ///
    /// An extension carries a `url` identifying its definition and either a value
    /// or nested extensions.
    pub struct Extension {
        /// identifies the meaning of the extension
        url: String = "url" [required],
        /// Value of extension
        value: Option<ExtensionValue> = "value" [choice],
    }
}

impl Extension {
    pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Nested extensions with the given url.
    pub fn extensions_by_url<'a>(&'a self, url: &'a str) -> impl Iterator<Item = &'a Extension> {
        self.extension.iter().filter(move |ext| ext.url == url)
    }
}

fhir_choice! {
    /// `Extension.value[x]`. `DataRequirement`, `ParameterDefinition`,
    /// `TriggerDefinition` and `Contributor` values are not modelled.
    pub enum ExtensionValue {
        Base64Binary(Base64Binary) = "Base64Binary",
        Boolean(Boolean) = "Boolean",
        Canonical(Canonical) = "Canonical",
        Code(Code) = "Code",
        Date(Date) = "Date",
        DateTime(DateTime) = "DateTime",
        Decimal(FhirDecimal) = "Decimal",
        Id(Id) = "Id",
        Instant(Instant) = "Instant",
        Integer(Integer) = "Integer",
        Markdown(Markdown) = "Markdown",
        Oid(Oid) = "Oid",
        PositiveInt(PositiveInt) = "PositiveInt",
        String(FhirString) = "String",
        Time(Time) = "Time",
        UnsignedInt(UnsignedInt) = "UnsignedInt",
        Uri(Uri) = "Uri",
        Url(Url) = "Url",
        Uuid(Uuid) = "Uuid",
        Address(Box<Address>) = "Address",
        Age(Age) = "Age",
        Annotation(Annotation) = "Annotation",
        Attachment(Box<Attachment>) = "Attachment",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Coding(Coding) = "Coding",
        ContactPoint(ContactPoint) = "ContactPoint",
        Count(Count) = "Count",
        Distance(Distance) = "Distance",
        Duration(Duration) = "Duration",
        HumanName(Box<HumanName>) = "HumanName",
        Identifier(Box<Identifier>) = "Identifier",
        Money(Money) = "Money",
        Period(Period) = "Period",
        Quantity(Quantity) = "Quantity",
        Range(Box<Range>) = "Range",
        Ratio(Box<Ratio>) = "Ratio",
        Reference(Box<Reference>) = "Reference",
        SampledData(Box<SampledData>) = "SampledData",
        Signature(Box<Signature>) = "Signature",
        Timing(Box<Timing>) = "Timing",
        ContactDetail(Box<ContactDetail>) = "ContactDetail",
        Expression(Box<Expression>) = "Expression",
        RelatedArtifact(Box<RelatedArtifact>) = "RelatedArtifact",
        UsageContext(Box<UsageContext>) = "UsageContext",
        Dosage(Box<Dosage>) = "Dosage",
        Meta(Box<Meta>) = "Meta",
    }
}

impl ExtensionValue {
    /// The value as text, for the string-like primitive variants.
    pub fn as_str(&self) -> Option<&str> {
        let primitive: &Primitive<String> = match self {
            ExtensionValue::Base64Binary(v)
            | ExtensionValue::Canonical(v)
            | ExtensionValue::Code(v)
            | ExtensionValue::Id(v)
            | ExtensionValue::Markdown(v)
            | ExtensionValue::Oid(v)
            | ExtensionValue::String(v)
            | ExtensionValue::Uri(v)
            | ExtensionValue::Url(v)
            | ExtensionValue::Uuid(v) => v,
            _ => return None,
        };
        primitive.as_str()
    }
}

fhir_element! {
    /// Human-readable summary of the resource
    pub struct Narrative {
        /// generated | extensions | additional | empty
        status: Primitive<NarrativeStatus> = "status" [required],
        /// Limited xhtml content
        div: String = "div" [required],
    }
}

fhir_element! {
    /// Metadata about a resource
    pub struct Meta {
        /// Version specific identifier
        version_id: Option<Id> = "versionId",
        /// When the resource version last changed
        last_updated: Option<Instant> = "lastUpdated",
        /// Identifies where the resource comes from
        source: Option<Uri> = "source",
        /// Profiles this resource claims to conform to
        profile: Vec<Canonical> = "profile",
        /// Security Labels applied to this resource
        security: Vec<Coding> = "security",
        /// Tags applied to this resource
        tag: Vec<Coding> = "tag",
    }
}
