use crate::primitive::{
    Boolean, Canonical, DateTime, FhirDecimal, FhirString, Id, Integer, Markdown, Primitive, Uri,
};
use crate::r4::codesystem::{
    PublicationStatus, StructureMapContextType, StructureMapGroupTypeMode, StructureMapInputMode,
    StructureMapModelMode, StructureMapSourceListMode, StructureMapTargetListMode,
    StructureMapTransform,
};
use crate::r4::datatypes::{CodeableConcept, Identifier};
use crate::r4::extension::ExtensionValue;
use crate::r4::metadata::{ContactDetail, UsageContext};

fhir_domain_resource! {
    /// A Map of relationships between 2 structures that can be used to transform data
    pub struct StructureMap: "StructureMap" {
        /// Canonical identifier for this structure map, represented as a URI (globally unique)
        url: Uri = "url" [required],
        /// Additional identifier for the structure map
        identifier: Vec<Identifier> = "identifier",
        /// Business version of the structure map
        version: Option<FhirString> = "version",
        /// Name for this structure map (computer friendly)
        name: FhirString = "name" [required],
        /// Name for this structure map (human friendly)
        title: Option<FhirString> = "title",
        /// draft | active | retired | unknown
        status: Primitive<PublicationStatus> = "status" [required],
        /// For testing purposes, not real usage
        experimental: Option<Boolean> = "experimental",
        /// Date last changed
        date: Option<DateTime> = "date",
        /// Name of the publisher (organization or individual)
        publisher: Option<FhirString> = "publisher",
        /// Contact details for the publisher
        contact: Vec<ContactDetail> = "contact",
        /// Natural language description of the structure map
        description: Option<Markdown> = "description",
        /// The context that the content is intended to support
        use_context: Vec<UsageContext> = "useContext",
        /// Intended jurisdiction for structure map (if applicable)
        jurisdiction: Vec<CodeableConcept> = "jurisdiction",
        /// Why this structure map is defined
        purpose: Option<Markdown> = "purpose",
        /// Use and/or publishing restrictions
        copyright: Option<Markdown> = "copyright",
        /// Structure Definition used by this map
        structure: Vec<StructureMapStructure> = "structure",
        /// Other maps used by this map (canonical URLs)
        import: Vec<Canonical> = "import",
        /// Named sections for reader convenience
        group: Vec<StructureMapGroup> = "group" [nonempty],
    }
}

fhir_backbone! {
    pub struct StructureMapStructure {
        /// Canonical reference to structure definition
        url: Canonical = "url" [required],
        /// source | queried | target | produced
        mode: Primitive<StructureMapModelMode> = "mode" [required],
        /// Name for type in this map
        alias: Option<FhirString> = "alias",
        /// Documentation on use of structure
        documentation: Option<FhirString> = "documentation",
    }
}

fhir_backbone! {
    /// Named sections for reader convenience
    pub struct StructureMapGroup {
        /// Human-readable label
        name: Id = "name" [required],
        /// Another group that this group adds rules to
        extends: Option<Id> = "extends",
        /// none | types | type-and-types
        type_mode: Primitive<StructureMapGroupTypeMode> = "typeMode" [required],
        /// Additional description/explanation for group
        documentation: Option<FhirString> = "documentation",
        /// Named instance provided when invoking the map
        input: Vec<StructureMapGroupInput> = "input" [nonempty],
        /// Transform Rule from source to target
        rule: Vec<StructureMapGroupRule> = "rule" [nonempty],
    }
}

fhir_backbone! {
    pub struct StructureMapGroupInput {
        /// Name for this instance of data
        name: Id = "name" [required],
        /// Type for this instance of data
        input_type: Option<FhirString> = "type",
        /// source | target
        mode: Primitive<StructureMapInputMode> = "mode" [required],
        /// Documentation for this instance of data
        documentation: Option<FhirString> = "documentation",
    }
}

fhir_backbone! {
    /// Transform Rule from source to target
    pub struct StructureMapGroupRule {
        /// Name of the rule for internal references
        name: Id = "name" [required],
        /// Source inputs to the mapping
        source: Vec<StructureMapGroupRuleSource> = "source" [nonempty],
        /// Content to create because of this mapping rule
        target: Vec<StructureMapGroupRuleTarget> = "target",
        /// Rules contained in this rule
        rule: Vec<StructureMapGroupRule> = "rule",
        /// Which other rules to apply in the context of this rule
        dependent: Vec<StructureMapGroupRuleDependent> = "dependent",
        /// Documentation for this instance of data
        documentation: Option<FhirString> = "documentation",
    }
}

fhir_backbone! {
    pub struct StructureMapGroupRuleSource {
        /// Type or variable this rule applies to
        context: Id = "context" [required],
        /// Specified minimum cardinality
        min: Option<Integer> = "min",
        /// Specified maximum cardinality (number or *)
        max: Option<FhirString> = "max",
        /// Rule only applies if source has this type
        source_type: Option<FhirString> = "type",
        /// Default value if no value exists
        default_value: Option<ExtensionValue> = "defaultValue" [choice],
        /// Optional field for this source
        element: Option<FhirString> = "element",
        /// first | not_first | last | not_last | only_one
        list_mode: Option<Primitive<StructureMapSourceListMode>> = "listMode",
        /// Named context for field, if a field is specified
        variable: Option<Id> = "variable",
        /// FHIRPath expression  - must be true or the rule does not apply
        condition: Option<FhirString> = "condition",
        /// FHIRPath expression  - must be true or the mapping engine throws an error instead of completing
        check: Option<FhirString> = "check",
        /// Message to put in log if source exists (FHIRPath)
        log_message: Option<FhirString> = "logMessage",
    }
}

fhir_backbone! {
    pub struct StructureMapGroupRuleTarget {
        /// Type or variable this rule applies to
        context: Option<Id> = "context",
        /// type | variable
        context_type: Option<Primitive<StructureMapContextType>> = "contextType",
        /// Field to create in the context
        element: Option<FhirString> = "element",
        /// Named context for field, if desired, and a field is specified
        variable: Option<Id> = "variable",
        /// first | share | last | collate
        list_mode: Vec<Primitive<StructureMapTargetListMode>> = "listMode",
        /// Internal rule reference for shared list items
        list_rule_id: Option<Id> = "listRuleId",
        /// create | copy +
        transform: Option<Primitive<StructureMapTransform>> = "transform",
        /// Parameters to the transform
        parameter: Vec<StructureMapGroupRuleTargetParameter> = "parameter",
    }
}

fhir_backbone! {
    pub struct StructureMapGroupRuleTargetParameter {
        /// Parameter value - variable or literal
        value: Option<StructureMapParameterValue> = "value" [required choice],
    }
}

fhir_choice! {
    pub enum StructureMapParameterValue {
        Id(Id) = "Id",
        String(FhirString) = "String",
        Boolean(Boolean) = "Boolean",
        Integer(Integer) = "Integer",
        Decimal(FhirDecimal) = "Decimal",
    }
}

fhir_backbone! {
    pub struct StructureMapGroupRuleDependent {
        /// Name of a rule or group to apply
        name: Id = "name" [required],
        /// Variable to pass to the rule or group
        variable: Vec<FhirString> = "variable" [nonempty],
    }
}

impl StructureMap {
    pub fn group_by_name(&self, name: &str) -> Option<&StructureMapGroup> {
        self.group.iter().find(|g| g.name.as_str() == Some(name))
    }
}

impl StructureMapGroupRule {
    /// This rule followed by its nested rules, depth first.
    pub fn flatten(&self) -> Vec<&StructureMapGroupRule> {
        let mut rules = vec![self];
        for rule in &self.rule {
            rules.extend(rule.flatten());
        }
        rules
    }
}
