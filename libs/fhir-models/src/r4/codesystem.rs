//! Code systems for elements with a required binding
//!
//! Each enum maps the codes of one value set. Decoding any other code fails with
//! [`Error::UnknownCode`](crate::Error::UnknownCode).

// ============================================================================
// Data types
// ============================================================================

fhir_codes! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus {
        system = "http://hl7.org/fhir/narrative-status";
        value_set = "http://hl7.org/fhir/ValueSet/narrative-status";
        /// The contents of the narrative are entirely generated from the core elements.
        Generated = "generated",
        /// Generated from core elements and extensions.
        Extensions = "extensions",
        /// Contains information in addition to the structured data.
        Additional = "additional",
        /// The narrative is a placeholder with no useful content.
        Empty = "empty",
    }
}

fhir_codes! {
    /// Identifies the purpose for this identifier, if known.
    pub enum IdentifierUse {
        system = "http://hl7.org/fhir/identifier-use";
        value_set = "http://hl7.org/fhir/ValueSet/identifier-use";
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
        Old = "old",
    }
}

fhir_codes! {
    /// How the Quantity should be understood and represented.
    pub enum QuantityComparator {
        system = "http://hl7.org/fhir/quantity-comparator";
        value_set = "http://hl7.org/fhir/ValueSet/quantity-comparator";
        LessThan = "<",
        LessOrEqual = "<=",
        GreaterOrEqual = ">=",
        GreaterThan = ">",
    }
}

fhir_codes! {
    /// The use of a human name.
    pub enum NameUse {
        system = "http://hl7.org/fhir/name-use";
        value_set = "http://hl7.org/fhir/ValueSet/name-use";
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Nickname = "nickname",
        Anonymous = "anonymous",
        Old = "old",
        Maiden = "maiden",
    }
}

fhir_codes! {
    pub enum AddressUse {
        system = "http://hl7.org/fhir/address-use";
        value_set = "http://hl7.org/fhir/ValueSet/address-use";
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Billing = "billing",
    }
}

fhir_codes! {
    pub enum AddressType {
        system = "http://hl7.org/fhir/address-type";
        value_set = "http://hl7.org/fhir/ValueSet/address-type";
        Postal = "postal",
        Physical = "physical",
        Both = "both",
    }
}

fhir_codes! {
    /// Telecommunications form for contact point.
    pub enum ContactPointSystem {
        system = "http://hl7.org/fhir/contact-point-system";
        value_set = "http://hl7.org/fhir/ValueSet/contact-point-system";
        Phone = "phone",
        Fax = "fax",
        Email = "email",
        Pager = "pager",
        Url = "url",
        Sms = "sms",
        Other = "other",
    }
}

fhir_codes! {
    pub enum ContactPointUse {
        system = "http://hl7.org/fhir/contact-point-use";
        value_set = "http://hl7.org/fhir/ValueSet/contact-point-use";
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Mobile = "mobile",
    }
}

fhir_codes! {
    /// Real world event relating to the schedule.
    pub enum EventTiming {
        system = "http://hl7.org/fhir/event-timing";
        value_set = "http://hl7.org/fhir/ValueSet/event-timing";
        Morning = "MORN",
        EarlyMorning = "MORN.early",
        LateMorning = "MORN.late",
        Noon = "NOON",
        Afternoon = "AFT",
        EarlyAfternoon = "AFT.early",
        LateAfternoon = "AFT.late",
        Evening = "EVE",
        EarlyEvening = "EVE.early",
        LateEvening = "EVE.late",
        Night = "NIGHT",
        AfterSleep = "PHS",
        BeforeSleep = "HS",
        Wake = "WAKE",
        Meal = "C",
        Breakfast = "CM",
        Lunch = "CD",
        Dinner = "CV",
        BeforeMeal = "AC",
        BeforeBreakfast = "ACM",
        BeforeLunch = "ACD",
        BeforeDinner = "ACV",
        AfterMeal = "PC",
        AfterBreakfast = "PCM",
        AfterLunch = "PCD",
        AfterDinner = "PCV",
    }
}

fhir_codes! {
    /// A unit of time (units from UCUM).
    pub enum UnitsOfTime {
        system = "http://unitsofmeasure.org";
        value_set = "http://hl7.org/fhir/ValueSet/units-of-time";
        Second = "s",
        Minute = "min",
        Hour = "h",
        Day = "d",
        Week = "wk",
        Month = "mo",
        Year = "a",
    }
}

fhir_codes! {
    pub enum DaysOfWeek {
        system = "http://hl7.org/fhir/days-of-week";
        value_set = "http://hl7.org/fhir/ValueSet/days-of-week";
        Monday = "mon",
        Tuesday = "tue",
        Wednesday = "wed",
        Thursday = "thu",
        Friday = "fri",
        Saturday = "sat",
        Sunday = "sun",
    }
}

fhir_codes! {
    /// The type of relationship to the related artifact.
    pub enum RelatedArtifactType {
        system = "http://hl7.org/fhir/related-artifact-type";
        value_set = "http://hl7.org/fhir/ValueSet/related-artifact-type";
        Documentation = "documentation",
        Justification = "justification",
        Citation = "citation",
        Predecessor = "predecessor",
        Successor = "successor",
        DerivedFrom = "derived-from",
        DependsOn = "depends-on",
        ComposedOf = "composed-of",
    }
}

// ============================================================================
// Resources
// ============================================================================

fhir_codes! {
    /// Indicates whether the account is available to be used.
    pub enum AccountStatus {
        system = "http://hl7.org/fhir/account-status";
        value_set = "http://hl7.org/fhir/ValueSet/account-status";
        /// This account is active and may be used.
        Active = "active",
        /// This account is inactive and should not be used to track financial information.
        Inactive = "inactive",
        /// This instance should not have been part of this patient's medical record.
        EnteredInError = "entered-in-error",
        /// This account is on hold.
        OnHold = "on-hold",
        /// The account status is unknown.
        Unknown = "unknown",
    }
}

fhir_codes! {
    /// Whether the adverse event actually happened or only potentially could have.
    pub enum AdverseEventActuality {
        system = "http://hl7.org/fhir/adverse-event-actuality";
        value_set = "http://hl7.org/fhir/ValueSet/adverse-event-actuality";
        Actual = "actual",
        Potential = "potential",
    }
}

fhir_codes! {
    pub enum AllergyIntoleranceType {
        system = "http://hl7.org/fhir/allergy-intolerance-type";
        value_set = "http://hl7.org/fhir/ValueSet/allergy-intolerance-type";
        Allergy = "allergy",
        Intolerance = "intolerance",
    }
}

fhir_codes! {
    pub enum AllergyIntoleranceCategory {
        system = "http://hl7.org/fhir/allergy-intolerance-category";
        value_set = "http://hl7.org/fhir/ValueSet/allergy-intolerance-category";
        Food = "food",
        Medication = "medication",
        Environment = "environment",
        Biologic = "biologic",
    }
}

fhir_codes! {
    /// Estimate of the potential clinical harm of a future reaction.
    pub enum AllergyIntoleranceCriticality {
        system = "http://hl7.org/fhir/allergy-intolerance-criticality";
        value_set = "http://hl7.org/fhir/ValueSet/allergy-intolerance-criticality";
        Low = "low",
        High = "high",
        UnableToAssess = "unable-to-assess",
    }
}

fhir_codes! {
    pub enum AllergyIntoleranceSeverity {
        system = "http://hl7.org/fhir/reaction-event-severity";
        value_set = "http://hl7.org/fhir/ValueSet/reaction-event-severity";
        Mild = "mild",
        Moderate = "moderate",
        Severe = "severe",
    }
}

fhir_codes! {
    /// Indicates the purpose of a bundle.
    pub enum BundleType {
        system = "http://hl7.org/fhir/bundle-type";
        value_set = "http://hl7.org/fhir/ValueSet/bundle-type";
        Document = "document",
        Message = "message",
        Transaction = "transaction",
        TransactionResponse = "transaction-response",
        Batch = "batch",
        BatchResponse = "batch-response",
        History = "history",
        Searchset = "searchset",
        Collection = "collection",
    }
}

fhir_codes! {
    /// Why an entry is in the result set.
    pub enum SearchEntryMode {
        system = "http://hl7.org/fhir/search-entry-mode";
        value_set = "http://hl7.org/fhir/ValueSet/search-entry-mode";
        Match = "match",
        Include = "include",
        Outcome = "outcome",
    }
}

fhir_codes! {
    pub enum HttpVerb {
        system = "http://hl7.org/fhir/http-verb";
        value_set = "http://hl7.org/fhir/ValueSet/http-verb";
        Get = "GET",
        Head = "HEAD",
        Post = "POST",
        Put = "PUT",
        Delete = "DELETE",
        Patch = "PATCH",
    }
}

fhir_codes! {
    pub enum CareTeamStatus {
        system = "http://hl7.org/fhir/care-team-status";
        value_set = "http://hl7.org/fhir/ValueSet/care-team-status";
        Proposed = "proposed",
        Active = "active",
        Suspended = "suspended",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_codes! {
    pub enum DocumentReferenceStatus {
        system = "http://hl7.org/fhir/document-reference-status";
        value_set = "http://hl7.org/fhir/ValueSet/document-reference-status";
        Current = "current",
        Superseded = "superseded",
        EnteredInError = "entered-in-error",
    }
}

fhir_codes! {
    /// The workflow/clinical status of a composition.
    pub enum CompositionStatus {
        system = "http://hl7.org/fhir/composition-status";
        value_set = "http://hl7.org/fhir/ValueSet/composition-status";
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        EnteredInError = "entered-in-error",
    }
}

fhir_codes! {
    /// The type of relationship between documents.
    pub enum DocumentRelationshipType {
        system = "http://hl7.org/fhir/document-relationship-type";
        value_set = "http://hl7.org/fhir/ValueSet/document-relationship-type";
        Replaces = "replaces",
        Transforms = "transforms",
        Signs = "signs",
        Appends = "appends",
    }
}

fhir_codes! {
    pub enum FlagStatus {
        system = "http://hl7.org/fhir/flag-status";
        value_set = "http://hl7.org/fhir/ValueSet/flag-status";
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_codes! {
    /// Codes that reflect the current state of a goal.
    pub enum GoalLifecycleStatus {
        system = "http://hl7.org/fhir/goal-status";
        value_set = "http://hl7.org/fhir/ValueSet/goal-status";
        Proposed = "proposed",
        Planned = "planned",
        Accepted = "accepted",
        Active = "active",
        OnHold = "on-hold",
        Completed = "completed",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Rejected = "rejected",
    }
}

fhir_codes! {
    pub enum MedicationStatusCodes {
        system = "http://hl7.org/fhir/CodeSystem/medication-status";
        value_set = "http://hl7.org/fhir/ValueSet/medication-status";
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_codes! {
    /// The status of a medication request.
    pub enum MedicationrequestStatus {
        system = "http://hl7.org/fhir/CodeSystem/medicationrequest-status";
        value_set = "http://hl7.org/fhir/ValueSet/medicationrequest-status";
        Active = "active",
        OnHold = "on-hold",
        Cancelled = "cancelled",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Stopped = "stopped",
        Draft = "draft",
        Unknown = "unknown",
    }
}

fhir_codes! {
    /// The kind of medication order.
    pub enum MedicationRequestIntent {
        system = "http://hl7.org/fhir/CodeSystem/medicationrequest-intent";
        value_set = "http://hl7.org/fhir/ValueSet/medicationrequest-intent";
        Proposal = "proposal",
        Plan = "plan",
        Order = "order",
        OriginalOrder = "original-order",
        ReflexOrder = "reflex-order",
        FillerOrder = "filler-order",
        InstanceOrder = "instance-order",
        Option = "option",
    }
}

fhir_codes! {
    pub enum RequestPriority {
        system = "http://hl7.org/fhir/request-priority";
        value_set = "http://hl7.org/fhir/ValueSet/request-priority";
        Routine = "routine",
        Urgent = "urgent",
        Asap = "asap",
        Stat = "stat",
    }
}

fhir_codes! {
    pub enum MedicationStatementStatusCodes {
        system = "http://hl7.org/fhir/CodeSystem/medication-statement-status";
        value_set = "http://hl7.org/fhir/ValueSet/medication-statement-status";
        Active = "active",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Intended = "intended",
        Stopped = "stopped",
        OnHold = "on-hold",
        Unknown = "unknown",
        NotTaken = "not-taken",
    }
}

fhir_codes! {
    /// Codes providing the status of an observation.
    pub enum ObservationStatus {
        system = "http://hl7.org/fhir/observation-status";
        value_set = "http://hl7.org/fhir/ValueSet/observation-status";
        Registered = "registered",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_codes! {
    pub enum IssueSeverity {
        system = "http://hl7.org/fhir/issue-severity";
        value_set = "http://hl7.org/fhir/ValueSet/issue-severity";
        Fatal = "fatal",
        Error = "error",
        Warning = "warning",
        Information = "information",
    }
}

fhir_codes! {
    /// A code that describes the type of issue.
    pub enum IssueType {
        system = "http://hl7.org/fhir/issue-type";
        value_set = "http://hl7.org/fhir/ValueSet/issue-type";
        Invalid = "invalid",
        Structure = "structure",
        Required = "required",
        Value = "value",
        Invariant = "invariant",
        Security = "security",
        Login = "login",
        Unknown = "unknown",
        Expired = "expired",
        Forbidden = "forbidden",
        Suppressed = "suppressed",
        Processing = "processing",
        NotSupported = "not-supported",
        Duplicate = "duplicate",
        MultipleMatches = "multiple-matches",
        NotFound = "not-found",
        Deleted = "deleted",
        TooLong = "too-long",
        CodeInvalid = "code-invalid",
        Extension = "extension",
        TooCostly = "too-costly",
        BusinessRule = "business-rule",
        Conflict = "conflict",
        Transient = "transient",
        LockError = "lock-error",
        NoStore = "no-store",
        Exception = "exception",
        Timeout = "timeout",
        Incomplete = "incomplete",
        Throttled = "throttled",
        Informational = "informational",
    }
}

fhir_codes! {
    pub enum AdministrativeGender {
        system = "http://hl7.org/fhir/administrative-gender";
        value_set = "http://hl7.org/fhir/ValueSet/administrative-gender";
        Male = "male",
        Female = "female",
        Other = "other",
        Unknown = "unknown",
    }
}

fhir_codes! {
    /// The type of link between two patient resources.
    pub enum LinkType {
        system = "http://hl7.org/fhir/link-type";
        value_set = "http://hl7.org/fhir/ValueSet/link-type";
        ReplacedBy = "replaced-by",
        Replaces = "replaces",
        Refer = "refer",
        Seealso = "seealso",
    }
}

fhir_codes! {
    /// The lifecycle status of an artifact.
    pub enum PublicationStatus {
        system = "http://hl7.org/fhir/publication-status";
        value_set = "http://hl7.org/fhir/ValueSet/publication-status";
        Draft = "draft",
        Active = "active",
        Retired = "retired",
        Unknown = "unknown",
    }
}

fhir_codes! {
    /// How the referenced structure is used in this mapping.
    pub enum StructureMapModelMode {
        system = "http://hl7.org/fhir/map-model-mode";
        value_set = "http://hl7.org/fhir/ValueSet/map-model-mode";
        Source = "source",
        Queried = "queried",
        Target = "target",
        Produced = "produced",
    }
}

fhir_codes! {
    /// If this is the default rule set to apply for the source type or this combination of types.
    pub enum StructureMapGroupTypeMode {
        system = "http://hl7.org/fhir/map-group-type-mode";
        value_set = "http://hl7.org/fhir/ValueSet/map-group-type-mode";
        None = "none",
        Types = "types",
        TypeAndTypes = "type-and-types",
    }
}

fhir_codes! {
    pub enum StructureMapInputMode {
        system = "http://hl7.org/fhir/map-input-mode";
        value_set = "http://hl7.org/fhir/ValueSet/map-input-mode";
        Source = "source",
        Target = "target",
    }
}

fhir_codes! {
    /// If field is a list, how to manage the source.
    pub enum StructureMapSourceListMode {
        system = "http://hl7.org/fhir/map-source-list-mode";
        value_set = "http://hl7.org/fhir/ValueSet/map-source-list-mode";
        First = "first",
        NotFirst = "not_first",
        Last = "last",
        NotLast = "not_last",
        OnlyOne = "only_one",
    }
}

fhir_codes! {
    pub enum StructureMapContextType {
        system = "http://hl7.org/fhir/map-context-type";
        value_set = "http://hl7.org/fhir/ValueSet/map-context-type";
        Type = "type",
        Variable = "variable",
    }
}

fhir_codes! {
    /// If field is a list, how to manage the list.
    pub enum StructureMapTargetListMode {
        system = "http://hl7.org/fhir/map-target-list-mode";
        value_set = "http://hl7.org/fhir/ValueSet/map-target-list-mode";
        First = "first",
        Share = "share",
        Last = "last",
        Collate = "collate",
    }
}

fhir_codes! {
    /// How data is copied or created.
    pub enum StructureMapTransform {
        system = "http://hl7.org/fhir/map-transform";
        value_set = "http://hl7.org/fhir/ValueSet/map-transform";
        Create = "create",
        Copy = "copy",
        Truncate = "truncate",
        Escape = "escape",
        Cast = "cast",
        Append = "append",
        Translate = "translate",
        Reference = "reference",
        DateOp = "dateOp",
        Uuid = "uuid",
        Pointer = "pointer",
        Evaluate = "evaluate",
        /// Create a CodeableConcept from the parameters
        Cc = "cc",
        /// Create a Coding from the parameters
        C = "c",
        Qty = "qty",
        Id = "id",
        Cp = "cp",
    }
}

fhir_codes! {
    pub enum SubscriptionStatus {
        system = "http://hl7.org/fhir/subscription-status";
        value_set = "http://hl7.org/fhir/ValueSet/subscription-status";
        Requested = "requested",
        Active = "active",
        Error = "error",
        Off = "off",
    }
}

fhir_codes! {
    pub enum SubscriptionChannelType {
        system = "http://hl7.org/fhir/subscription-channel-type";
        value_set = "http://hl7.org/fhir/ValueSet/subscription-channel-type";
        RestHook = "rest-hook",
        Websocket = "websocket",
        Email = "email",
        Sms = "sms",
        Message = "message",
    }
}
