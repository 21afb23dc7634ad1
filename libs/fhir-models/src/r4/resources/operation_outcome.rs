use crate::primitive::{FhirString, Primitive};
use crate::r4::codesystem::{IssueSeverity, IssueType};
use crate::r4::datatypes::CodeableConcept;

fhir_domain_resource! {
    /// Information about the success/failure of an action
    pub struct OperationOutcome: "OperationOutcome" {
        /// A single issue associated with the action
        issue: Vec<OperationOutcomeIssue> = "issue" [nonempty],
    }
}

fhir_backbone! {
    /// A single issue associated with the action
    pub struct OperationOutcomeIssue {
        /// fatal | error | warning | information
        severity: Primitive<IssueSeverity> = "severity" [required],
        /// Error or warning code
        code: Primitive<IssueType> = "code" [required],
        /// Additional details about the error
        details: Option<CodeableConcept> = "details",
        /// Additional diagnostic information about the issue
        diagnostics: Option<FhirString> = "diagnostics",
        /// Deprecated: Path of element(s) related to issue
        location: Vec<FhirString> = "location",
        /// FHIRPath of element(s) related to issue
        expression: Vec<FhirString> = "expression",
    }
}

impl OperationOutcome {
    pub fn has_errors(&self) -> bool {
        self.issue.iter().any(|issue| {
            matches!(
                issue.severity.value,
                Some(IssueSeverity::Fatal) | Some(IssueSeverity::Error)
            )
        })
    }
}
