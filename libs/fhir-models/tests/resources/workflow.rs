use cobalt_models::r4::codesystem::{
    ContactPointSystem, IssueSeverity, IssueType, NarrativeStatus, SubscriptionChannelType,
    SubscriptionStatus,
};
use cobalt_models::r4::{
    DomainResource, FhirR4Parser, OperationOutcome, Organization, Practitioner, Subscription,
};
use cobalt_models::Error;

use crate::test_support::{assert_round_trip, load_value};

#[test]
fn operation_outcome_example() {
    let outcome: OperationOutcome = assert_round_trip("operationoutcome-example.json");

    assert!(outcome.has_errors());
    assert_eq!(
        DomainResource::text(&outcome).and_then(|t| t.status.value),
        Some(NarrativeStatus::Additional)
    );

    let issue = &outcome.issue[0];
    assert_eq!(issue.severity.value, Some(IssueSeverity::Error));
    assert_eq!(issue.code.value, Some(IssueType::CodeInvalid));
    assert_eq!(
        issue.details.as_ref().and_then(|d| d.text()),
        Some("The code \"W\" is not known and not legal in this context")
    );
    assert_eq!(issue.expression[0].as_str(), Some("Person.gender"));
}

#[test]
fn operation_outcome_requires_issue() {
    let err = FhirR4Parser::new()
        .to_fhir::<OperationOutcome>(r#"{"resourceType":"OperationOutcome","issue":[]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::EmptyArray(ref path) if path == "OperationOutcome.issue"));

    let err = FhirR4Parser::new()
        .to_fhir::<OperationOutcome>(r#"{"resourceType":"OperationOutcome"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "OperationOutcome.issue"));
}

#[test]
fn organization_example() {
    let organization: Organization = assert_round_trip("organization-example.json");

    assert_eq!(organization.name.as_ref().and_then(|n| n.as_str()), Some("Health Level Seven International"));
    assert_eq!(organization.alias[0].as_str(), Some("HL7 International"));
    assert!(organization.organization_type[0]
        .has_coding("http://terminology.hl7.org/CodeSystem/organization-type", "prov"));

    let systems: Vec<_> = organization
        .telecom
        .iter()
        .filter_map(|t| t.system.as_ref().and_then(|s| s.value))
        .collect();
    assert_eq!(
        systems,
        vec![ContactPointSystem::Phone, ContactPointSystem::Fax, ContactPointSystem::Email]
    );

    let contact = &organization.contact[0];
    assert_eq!(contact.name.as_ref().and_then(|n| n.text.as_ref()).and_then(|t| t.as_str()), Some("mr. Adminstrator"));
    assert_eq!(
        contact.address.as_ref().and_then(|a| a.country.as_ref()).and_then(|c| c.as_str()),
        Some("NLD")
    );
}

#[test]
fn practitioner_example() {
    let practitioner: Practitioner = assert_round_trip("practitioner-example.json");

    let name = &practitioner.name[0];
    assert_eq!(name.prefix[0].as_str(), Some("Dr"));
    assert_eq!(name.family.as_ref().and_then(|f| f.as_str()), Some("Careful"));

    let qualification = &practitioner.qualification[0];
    assert_eq!(qualification.code.text(), Some("Bachelor of Science"));
    assert_eq!(
        qualification
            .period
            .as_ref()
            .and_then(|p| p.start.as_ref())
            .and_then(|s| s.value)
            .map(|s| s.to_string())
            .as_deref(),
        Some("1995")
    );
    assert!(qualification.issuer.as_ref().unwrap().reference().is_none());
}

#[test]
fn subscription_example() {
    let subscription: Subscription = assert_round_trip("subscription-example.json");

    assert_eq!(subscription.status.value, Some(SubscriptionStatus::Requested));
    assert_eq!(subscription.criteria.as_str(), Some("Observation?code=http://loinc.org|1975-2"));

    let channel = &subscription.channel;
    assert_eq!(channel.channel_type.value, Some(SubscriptionChannelType::RestHook));
    assert_eq!(channel.payload.as_ref().and_then(|p| p.as_str()), Some("application/fhir+json"));
    assert_eq!(channel.header.len(), 1);
}

#[test]
fn subscription_requires_channel() {
    let mut value = load_value("subscription-example.json");
    value.as_object_mut().unwrap().remove("channel");

    let err = FhirR4Parser::new().to_fhir_value::<Subscription>(&value).unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "Subscription.channel"));
}
