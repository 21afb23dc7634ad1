use crate::primitive::{FhirString, Primitive};
use crate::r4::codesystem::CareTeamStatus;
use crate::r4::datatypes::{Annotation, CodeableConcept, ContactPoint, Identifier, Period, Reference};

fhir_domain_resource! {
    /// Planned participants in the coordination and delivery of care for a patient or group
    pub struct CareTeam: "CareTeam" {
        /// External Ids for this team
        identifier: Vec<Identifier> = "identifier",
        /// proposed | active | suspended | inactive | entered-in-error
        status: Option<Primitive<CareTeamStatus>> = "status",
        /// Type of team
        category: Vec<CodeableConcept> = "category",
        /// Name of the team, such as crisis assessment team
        name: Option<FhirString> = "name",
        /// Who care team is for
        subject: Option<Reference> = "subject",
        /// Encounter created as part of
        encounter: Option<Reference> = "encounter",
        /// Time period team covers
        period: Option<Period> = "period",
        /// Members of the team
        participant: Vec<CareTeamParticipant> = "participant",
        /// Why the care team exists
        reason_code: Vec<CodeableConcept> = "reasonCode",
        /// Why the care team exists
        reason_reference: Vec<Reference> = "reasonReference",
        /// Organization responsible for the care team
        managing_organization: Vec<Reference> = "managingOrganization",
        /// A contact detail for the care team (that applies to all members)
        telecom: Vec<ContactPoint> = "telecom",
        /// Comments made about the CareTeam
        note: Vec<Annotation> = "note",
    }
}

fhir_backbone! {
    /// Members of the team
    pub struct CareTeamParticipant {
        /// Type of involvement
        role: Vec<CodeableConcept> = "role",
        /// Who is involved
        member: Option<Reference> = "member",
        /// Organization of the practitioner
        on_behalf_of: Option<Reference> = "onBehalfOf",
        /// Time period of participant
        period: Option<Period> = "period",
    }
}
