use crate::primitive::{Boolean, Date, DateTime, Integer, Primitive};
use crate::r4::codesystem::{AdministrativeGender, LinkType, NameUse};
use crate::r4::datatypes::{
    Address, Attachment, CodeableConcept, ContactPoint, HumanName, Identifier, Period, Reference,
};

fhir_domain_resource! {
    /// Information about an individual or animal receiving health care services
    pub struct Patient: "Patient" {
        /// An identifier for this patient
        identifier: Vec<Identifier> = "identifier",
        /// Whether this patient's record is in active use
        active: Option<Boolean> = "active",
        /// A name associated with the patient
        name: Vec<HumanName> = "name",
        /// A contact detail for the individual
        telecom: Vec<ContactPoint> = "telecom",
        /// male | female | other | unknown
        gender: Option<Primitive<AdministrativeGender>> = "gender",
        /// The date of birth for the individual
        birth_date: Option<Date> = "birthDate",
        /// Indicates if the individual is deceased or not
        deceased: Option<PatientDeceased> = "deceased" [choice],
        /// An address for the individual
        address: Vec<Address> = "address",
        /// Marital (civil) status of a patient
        marital_status: Option<CodeableConcept> = "maritalStatus",
        /// Whether patient is part of a multiple birth
        multiple_birth: Option<PatientMultipleBirth> = "multipleBirth" [choice],
        /// Image of the patient
        photo: Vec<Attachment> = "photo",
        /// A contact party (e.g. guardian, partner, friend) for the patient
        contact: Vec<PatientContact> = "contact",
        /// A language which may be used to communicate with the patient about his or her health
        communication: Vec<PatientCommunication> = "communication",
        /// Patient's nominated primary care provider
        general_practitioner: Vec<Reference> = "generalPractitioner",
        /// Organization that is the custodian of the patient record
        managing_organization: Option<Reference> = "managingOrganization",
        /// Link to another patient resource that concerns the same actual person
        link: Vec<PatientLink> = "link",
    }
}

fhir_choice! {
    pub enum PatientDeceased {
        Boolean(Boolean) = "Boolean",
        DateTime(DateTime) = "DateTime",
    }
}

fhir_choice! {
    pub enum PatientMultipleBirth {
        Boolean(Boolean) = "Boolean",
        Integer(Integer) = "Integer",
    }
}

fhir_backbone! {
    /// A contact party (e.g. guardian, partner, friend) for the patient
    pub struct PatientContact {
        /// The kind of relationship
        relationship: Vec<CodeableConcept> = "relationship",
        /// A name associated with the contact person
        name: Option<HumanName> = "name",
        /// A contact detail for the person
        telecom: Vec<ContactPoint> = "telecom",
        /// Address for the contact person
        address: Option<Address> = "address",
        /// male | female | other | unknown
        gender: Option<Primitive<AdministrativeGender>> = "gender",
        /// Organization that is associated with the contact
        organization: Option<Reference> = "organization",
        /// The period during which this contact person or organization is valid to be contacted relating to this patient
        period: Option<Period> = "period",
    }
}

fhir_backbone! {
    /// A language which may be used to communicate with the patient about his or her health
    pub struct PatientCommunication {
        /// The language which can be used to communicate with the patient about his or her health
        language: CodeableConcept = "language" [required],
        /// Language preference indicator
        preferred: Option<Boolean> = "preferred",
    }
}

fhir_backbone! {
    /// Link to another patient resource that concerns the same actual person
    pub struct PatientLink {
        /// The other patient or related person resource that the link refers to
        other: Reference = "other" [required],
        /// replaced-by | replaces | refer | seealso
        link_type: Primitive<LinkType> = "type" [required],
    }
}

impl Patient {
    /// The first name with use `official`, falling back to the first name.
    pub fn official_name(&self) -> Option<&HumanName> {
        self.name
            .iter()
            .find(|name| name.name_use.as_ref().and_then(|u| u.value) == Some(NameUse::Official))
            .or_else(|| self.name.first())
    }
}
