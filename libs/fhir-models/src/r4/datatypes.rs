//! General-purpose data types

use crate::primitive::{
    Base64Binary, Boolean, Code, DateTime, FhirDecimal, FhirString, Instant, Integer, Markdown,
    PositiveInt, Primitive, Time, UnsignedInt, Uri, Url,
};
use crate::r4::codesystem::{
    AddressType, AddressUse, ContactPointSystem, ContactPointUse, DaysOfWeek, EventTiming,
    IdentifierUse, NameUse, QuantityComparator, UnitsOfTime,
};

fhir_element! {
    /// A reference to a code defined by a terminology system
    pub struct Coding {
        /// Identity of the terminology system
        system: Option<Uri> = "system",
        /// Version of the system - if relevant
        version: Option<FhirString> = "version",
        /// Symbol in syntax defined by the system
        code: Option<Code> = "code",
        /// Representation defined by the system
        display: Option<FhirString> = "display",
        /// If this coding was chosen directly by the user
        user_selected: Option<Boolean> = "userSelected",
    }
}

impl Coding {
    pub fn new(system: &str, code: &str) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn is(&self, system: &str, code: &str) -> bool {
        self.system.as_ref().and_then(Primitive::as_str) == Some(system)
            && self.code.as_ref().and_then(Primitive::as_str) == Some(code)
    }
}

fhir_element! {
    /// Concept - reference to a terminology or just text
    pub struct CodeableConcept {
        /// Code defined by a terminology system
        coding: Vec<Coding> = "coding",
        /// Plain text representation of the concept
        text: Option<FhirString> = "text",
    }
}

impl CodeableConcept {
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding.iter().any(|c| c.is(system, code))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(Primitive::as_str)
    }
}

fhir_element! {
    /// An identifier intended for computation
    pub struct Identifier {
        /// usual | official | temp | secondary | old (If known)
        identifier_use: Option<Primitive<IdentifierUse>> = "use",
        /// Description of identifier
        identifier_type: Option<CodeableConcept> = "type",
        /// The namespace for the identifier value
        system: Option<Uri> = "system",
        /// The value that is unique
        value: Option<FhirString> = "value",
        /// Time period when id is/was valid for use
        period: Option<Period> = "period",
        /// Organization that issued id (may be just text)
        assigner: Option<Box<Reference>> = "assigner",
    }
}

fhir_element! {
    /// A reference from one resource to another
    pub struct Reference {
        /// Literal reference, Relative, internal or absolute URL
        reference: Option<FhirString> = "reference",
        /// Type the reference refers to (e.g. "Patient")
        reference_type: Option<Uri> = "type",
        /// Logical reference, when literal reference is not known
        identifier: Option<Identifier> = "identifier",
        /// Text alternative for the resource
        display: Option<FhirString> = "display",
    }
}

impl Reference {
    pub fn new(reference: &str) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_ref().and_then(Primitive::as_str)
    }

    /// The id a local reference (`#id`) points to.
    pub fn local_id(&self) -> Option<&str> {
        self.reference()?.strip_prefix('#')
    }
}

fhir_element! {
    /// Time range defined by start and end date/time
    pub struct Period {
        /// Starting time with inclusive boundary
        start: Option<DateTime> = "start",
        /// End time with inclusive boundary, if not ongoing
        end: Option<DateTime> = "end",
    }
}

fhir_element! {
    /// A measured or measurable amount
    pub struct Quantity {
        /// Numerical value (with implicit precision)
        value: Option<FhirDecimal> = "value",
        /// < | <= | >= | > - how to understand the value
        comparator: Option<Primitive<QuantityComparator>> = "comparator",
        /// Unit representation
        unit: Option<FhirString> = "unit",
        /// System that defines coded unit form
        system: Option<Uri> = "system",
        /// Coded form of the unit
        code: Option<Code> = "code",
    }
}

/// A duration of time during which an organism has existed.
pub type Age = Quantity;
/// A measured amount of discrete items.
pub type Count = Quantity;
/// A length, with UCUM units.
pub type Distance = Quantity;
/// A length of time.
pub type Duration = Quantity;
/// A quantity without a comparator.
pub type SimpleQuantity = Quantity;

fhir_element! {
    /// An amount of economic utility in some recognized currency
    pub struct Money {
        /// Numerical value (with implicit precision)
        value: Option<FhirDecimal> = "value",
        /// ISO 4217 Currency Code
        currency: Option<Code> = "currency",
    }
}

fhir_element! {
    /// Set of values bounded by low and high
    pub struct Range {
        low: Option<Quantity> = "low",
        high: Option<Quantity> = "high",
    }
}

fhir_element! {
    /// A ratio of two Quantity values - a numerator and a denominator
    pub struct Ratio {
        numerator: Option<Quantity> = "numerator",
        denominator: Option<Quantity> = "denominator",
    }
}

fhir_element! {
    /// A series of measurements taken by a device
    pub struct SampledData {
        /// Zero value and units
        origin: Quantity = "origin" [required],
        /// Number of milliseconds between samples
        period: FhirDecimal = "period" [required],
        /// Multiply data by this before adding to origin
        factor: Option<FhirDecimal> = "factor",
        /// Lower limit of detection
        lower_limit: Option<FhirDecimal> = "lowerLimit",
        /// Upper limit of detection
        upper_limit: Option<FhirDecimal> = "upperLimit",
        /// Number of sample points at each time point
        dimensions: PositiveInt = "dimensions" [required],
        /// Decimal values with spaces, or "E" | "U" | "L"
        data: Option<FhirString> = "data",
    }
}

fhir_element! {
    /// Content in a format defined elsewhere
    pub struct Attachment {
        /// Mime type of the content, with charset etc.
        content_type: Option<Code> = "contentType",
        /// Human language of the content (BCP-47)
        language: Option<Code> = "language",
        /// Data inline, base64ed
        data: Option<Base64Binary> = "data",
        /// Uri where the data can be found
        url: Option<Url> = "url",
        /// Number of bytes of content (if url provided)
        size: Option<UnsignedInt> = "size",
        /// Hash of the data (sha-1, base64ed)
        hash: Option<Base64Binary> = "hash",
        /// Label to display in place of the data
        title: Option<FhirString> = "title",
        /// Date attachment was first created
        creation: Option<DateTime> = "creation",
    }
}

fhir_element! {
    /// Text node with attribution
    pub struct Annotation {
        /// Individual responsible for the annotation
        author: Option<AnnotationAuthor> = "author" [choice],
        /// When the annotation was made
        time: Option<DateTime> = "time",
        /// The annotation - text content (as markdown)
        text: Markdown = "text" [required],
    }
}

fhir_choice! {
    pub enum AnnotationAuthor {
        Reference(Reference) = "Reference",
        String(FhirString) = "String",
    }
}

fhir_element! {
    /// Name of a human - parts and usage
    pub struct HumanName {
        /// usual | official | temp | nickname | anonymous | old | maiden
        name_use: Option<Primitive<NameUse>> = "use",
        /// Text representation of the full name
        text: Option<FhirString> = "text",
        /// Family name (often called 'Surname')
        family: Option<FhirString> = "family",
        /// Given names (not always 'first'). Includes middle names
        given: Vec<FhirString> = "given",
        /// Parts that come before the name
        prefix: Vec<FhirString> = "prefix",
        /// Parts that come after the name
        suffix: Vec<FhirString> = "suffix",
        /// Time period when name was/is in use
        period: Option<Period> = "period",
    }
}

fhir_element! {
    /// An address expressed using postal conventions
    pub struct Address {
        /// home | work | temp | old | billing - purpose of this address
        address_use: Option<Primitive<AddressUse>> = "use",
        /// postal | physical | both
        address_type: Option<Primitive<AddressType>> = "type",
        /// Text representation of the address
        text: Option<FhirString> = "text",
        /// Street name, number, direction & P.O. Box etc.
        line: Vec<FhirString> = "line",
        /// Name of city, town etc.
        city: Option<FhirString> = "city",
        /// District name (aka county)
        district: Option<FhirString> = "district",
        /// Sub-unit of country (abbreviations ok)
        state: Option<FhirString> = "state",
        /// Postal code for area
        postal_code: Option<FhirString> = "postalCode",
        /// Country (e.g. can be ISO 3166 2 or 3 letter code)
        country: Option<FhirString> = "country",
        /// Time period when address was/is in use
        period: Option<Period> = "period",
    }
}

fhir_element! {
    /// Details of a Technology mediated contact point (phone, fax, email, etc.)
    pub struct ContactPoint {
        /// phone | fax | email | pager | url | sms | other
        system: Option<Primitive<ContactPointSystem>> = "system",
        /// The actual contact point details
        value: Option<FhirString> = "value",
        /// home | work | temp | old | mobile - purpose of this contact point
        contact_use: Option<Primitive<ContactPointUse>> = "use",
        /// Specify preferred order of use (1 = highest)
        rank: Option<PositiveInt> = "rank",
        /// Time period when the contact point was/is in use
        period: Option<Period> = "period",
    }
}

fhir_element! {
    /// A Signature - XML DigSig, JWS, Graphical image of signature, etc.
    pub struct Signature {
        /// Indication of the reason the entity signed the object(s)
        signature_type: Vec<Coding> = "type" [nonempty],
        /// When the signature was created
        when: Instant = "when" [required],
        /// Who signed
        who: Reference = "who" [required],
        /// The party represented
        on_behalf_of: Option<Reference> = "onBehalfOf",
        /// The technical format of the signed resources
        target_format: Option<Code> = "targetFormat",
        /// The technical format of the signature
        sig_format: Option<Code> = "sigFormat",
        /// The actual signature content (XML DigSig. JWS, picture, etc.)
        data: Option<Base64Binary> = "data",
    }
}

fhir_backbone! {
    /// A timing schedule that specifies an event that may occur multiple times
    pub struct Timing {
        /// When the event occurs
        event: Vec<DateTime> = "event",
        /// When the event is to occur
        repeat: Option<TimingRepeat> = "repeat",
        /// BID | TID | QID | AM | PM | QD | QOD | +
        code: Option<CodeableConcept> = "code",
    }
}

fhir_element! {
    /// When the event is to occur
    pub struct TimingRepeat {
        /// Length/Range of lengths, or (Start and/or end) limits
        bounds: Option<TimingRepeatBounds> = "bounds" [choice],
        /// Number of times to repeat
        count: Option<PositiveInt> = "count",
        /// Maximum number of times to repeat
        count_max: Option<PositiveInt> = "countMax",
        /// How long when it happens
        duration: Option<FhirDecimal> = "duration",
        /// How long when it happens (Max)
        duration_max: Option<FhirDecimal> = "durationMax",
        /// s | min | h | d | wk | mo | a - unit of time (UCUM)
        duration_unit: Option<Primitive<UnitsOfTime>> = "durationUnit",
        /// Event occurs frequency times per period
        frequency: Option<PositiveInt> = "frequency",
        /// Event occurs up to frequencyMax times per period
        frequency_max: Option<PositiveInt> = "frequencyMax",
        /// Event occurs frequency times per period
        period: Option<FhirDecimal> = "period",
        /// Upper limit of period (3-4 hours)
        period_max: Option<FhirDecimal> = "periodMax",
        /// s | min | h | d | wk | mo | a - unit of time (UCUM)
        period_unit: Option<Primitive<UnitsOfTime>> = "periodUnit",
        /// mon | tue | wed | thu | fri | sat | sun
        day_of_week: Vec<Primitive<DaysOfWeek>> = "dayOfWeek",
        /// Time of day for action
        time_of_day: Vec<Time> = "timeOfDay",
        /// Code for time period of occurrence
        when: Vec<Primitive<EventTiming>> = "when",
        /// Minutes from event (before or after)
        offset: Option<UnsignedInt> = "offset",
    }
}

fhir_choice! {
    pub enum TimingRepeatBounds {
        Duration(Duration) = "Duration",
        Range(Range) = "Range",
        Period(Period) = "Period",
    }
}

fhir_backbone! {
    /// How the medication is/was taken or should be taken
    pub struct Dosage {
        /// The order of the dosage instructions
        sequence: Option<Integer> = "sequence",
        /// Free text dosage instructions e.g. SIG
        text: Option<FhirString> = "text",
        /// Supplemental instruction or warnings to the patient
        additional_instruction: Vec<CodeableConcept> = "additionalInstruction",
        /// Patient or consumer oriented instructions
        patient_instruction: Option<FhirString> = "patientInstruction",
        /// When medication should be administered
        timing: Option<Timing> = "timing",
        /// Take "as needed" (for x)
        as_needed: Option<DosageAsNeeded> = "asNeeded" [choice],
        /// Body site to administer to
        site: Option<CodeableConcept> = "site",
        /// How drug should enter body
        route: Option<CodeableConcept> = "route",
        /// Technique for administering medication
        method: Option<CodeableConcept> = "method",
        /// Amount of medication administered
        dose_and_rate: Vec<DosageDoseAndRate> = "doseAndRate",
        /// Upper limit on medication per unit of time
        max_dose_per_period: Option<Ratio> = "maxDosePerPeriod",
        /// Upper limit on medication per administration
        max_dose_per_administration: Option<SimpleQuantity> = "maxDosePerAdministration",
        /// Upper limit on medication per lifetime of the patient
        max_dose_per_lifetime: Option<SimpleQuantity> = "maxDosePerLifetime",
    }
}

fhir_choice! {
    pub enum DosageAsNeeded {
        Boolean(Boolean) = "Boolean",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
    }
}

fhir_element! {
    /// Amount of medication administered
    pub struct DosageDoseAndRate {
        /// The kind of dose or rate specified
        dose_and_rate_type: Option<CodeableConcept> = "type",
        /// Amount of medication per dose
        dose: Option<DosageDose> = "dose" [choice],
        /// Amount of medication per unit of time
        rate: Option<DosageRate> = "rate" [choice],
    }
}

fhir_choice! {
    pub enum DosageDose {
        Range(Range) = "Range",
        Quantity(SimpleQuantity) = "Quantity",
    }
}

fhir_choice! {
    pub enum DosageRate {
        Ratio(Ratio) = "Ratio",
        Range(Range) = "Range",
        Quantity(SimpleQuantity) = "Quantity",
    }
}
