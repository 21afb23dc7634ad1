use crate::primitive::{Boolean, Date, Primitive};
use crate::r4::codesystem::AdministrativeGender;
use crate::r4::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, HumanName, Identifier, Period, Reference,
};

fhir_domain_resource! {
    /// A person with a  formal responsibility in the provisioning of healthcare or related services
    pub struct Practitioner: "Practitioner" {
        /// An identifier for the person as this agent
        identifier: Vec<Identifier> = "identifier",
        /// Whether this practitioner's record is in active use
        active: Option<Boolean> = "active",
        /// The name(s) associated with the practitioner
        name: Vec<HumanName> = "name",
        /// A contact detail for the practitioner (that apply to all roles)
        telecom: Vec<ContactPoint> = "telecom",
        /// Address(es) of the practitioner that are not role specific (typically home address)
        address: Vec<Address> = "address",
        /// male | female | other | unknown
        gender: Option<Primitive<AdministrativeGender>> = "gender",
        /// The date  on which the practitioner was born
        birth_date: Option<Date> = "birthDate",
        /// Image of the person
        photo: Vec<Attachment> = "photo",
        /// Certification, licenses, or training pertaining to the provision of care
        qualification: Vec<PractitionerQualification> = "qualification",
        /// A language the practitioner can use in patient communication
        communication: Vec<CodeableConcept> = "communication",
    }
}

fhir_backbone! {
    /// Certification, licenses, or training pertaining to the provision of care
    pub struct PractitionerQualification {
        /// An identifier for this qualification for the practitioner
        identifier: Vec<Identifier> = "identifier",
        /// Coded representation of the qualification
        code: CodeableConcept = "code" [required],
        /// Period during which the qualification is valid
        period: Option<Period> = "period",
        /// Organization that regulates and issues the qualification
        issuer: Option<Reference> = "issuer",
    }
}
