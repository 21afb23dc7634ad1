use crate::primitive::{Boolean, Date, FhirString, Integer, Primitive};
use crate::r4::codesystem::GoalLifecycleStatus;
use crate::r4::datatypes::{
    Annotation, CodeableConcept, Duration, Identifier, Quantity, Range, Ratio, Reference,
};

fhir_domain_resource! {
    /// Describes the intended objective(s) for a patient, group or organization
    pub struct Goal: "Goal" {
        /// External Ids for this goal
        identifier: Vec<Identifier> = "identifier",
        /// proposed | planned | accepted | active | on-hold | completed | cancelled | entered-in-error | rejected
        lifecycle_status: Primitive<GoalLifecycleStatus> = "lifecycleStatus" [required],
        /// in-progress | improving | worsening | no-change | achieved | sustaining | not-achieved | no-progress | not-attainable
        achievement_status: Option<CodeableConcept> = "achievementStatus",
        /// E.g. Treatment, dietary, behavioral, etc.
        category: Vec<CodeableConcept> = "category",
        /// high-priority | medium-priority | low-priority
        priority: Option<CodeableConcept> = "priority",
        /// Code or text describing goal
        description: CodeableConcept = "description" [required],
        /// Who this goal is intended for
        subject: Reference = "subject" [required],
        /// When goal pursuit begins
        start: Option<GoalStart> = "start" [choice],
        /// Target outcome for the goal
        target: Vec<GoalTarget> = "target",
        /// When goal status took effect
        status_date: Option<Date> = "statusDate",
        /// Reason for current status
        status_reason: Option<FhirString> = "statusReason",
        /// Who's responsible for creating Goal?
        expressed_by: Option<Reference> = "expressedBy",
        /// Issues addressed by this goal
        addresses: Vec<Reference> = "addresses",
        /// Comments about the goal
        note: Vec<Annotation> = "note",
        /// What result was achieved regarding the goal?
        outcome_code: Vec<CodeableConcept> = "outcomeCode",
        /// Observation that resulted from goal
        outcome_reference: Vec<Reference> = "outcomeReference",
    }
}

fhir_choice! {
    pub enum GoalStart {
        Date(Date) = "Date",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
    }
}

fhir_backbone! {
    /// Target outcome for the goal
    pub struct GoalTarget {
        /// The parameter whose value is being tracked
        measure: Option<CodeableConcept> = "measure",
        /// The target value to be achieved
        detail: Option<GoalTargetDetail> = "detail" [choice],
        /// Reach goal on or before
        due: Option<GoalTargetDue> = "due" [choice],
    }
}

fhir_choice! {
    pub enum GoalTargetDetail {
        Quantity(Quantity) = "Quantity",
        Range(Range) = "Range",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        String(FhirString) = "String",
        Boolean(Boolean) = "Boolean",
        Integer(Integer) = "Integer",
        Ratio(Ratio) = "Ratio",
    }
}

fhir_choice! {
    pub enum GoalTargetDue {
        Date(Date) = "Date",
        Duration(Duration) = "Duration",
    }
}
