use crate::primitive::{Boolean, FhirString};
use crate::r4::datatypes::{Address, CodeableConcept, ContactPoint, HumanName, Identifier, Reference};

fhir_domain_resource! {
    /// A grouping of people or organizations with a common purpose
    pub struct Organization: "Organization" {
        /// Identifies this organization  across multiple systems
        identifier: Vec<Identifier> = "identifier",
        /// Whether the organization's record is still in active use
        active: Option<Boolean> = "active",
        /// Kind of organization
        organization_type: Vec<CodeableConcept> = "type",
        /// Name used for the organization
        name: Option<FhirString> = "name",
        /// A list of alternate names that the organization is known as, or was known as in the past
        alias: Vec<FhirString> = "alias",
        /// A contact detail for the organization
        telecom: Vec<ContactPoint> = "telecom",
        /// An address for the organization
        address: Vec<Address> = "address",
        /// The organization of which this organization forms a part
        part_of: Option<Reference> = "partOf",
        /// Contact for the organization for a certain purpose
        contact: Vec<OrganizationContact> = "contact",
        /// Technical endpoints providing access to services operated for the organization
        endpoint: Vec<Reference> = "endpoint",
    }
}

fhir_backbone! {
    /// Contact for the organization for a certain purpose
    pub struct OrganizationContact {
        /// The type of contact
        purpose: Option<CodeableConcept> = "purpose",
        /// A name associated with the contact
        name: Option<HumanName> = "name",
        /// Contact details (telephone, email, etc.)  for a contact
        telecom: Vec<ContactPoint> = "telecom",
        /// Visiting or postal addresses for the contact
        address: Option<Address> = "address",
    }
}
