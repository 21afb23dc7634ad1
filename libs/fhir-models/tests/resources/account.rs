use cobalt_models::r4::codesystem::{AccountStatus, NarrativeStatus};
use cobalt_models::r4::{Account, FhirR4Parser, FhirResource, ResourceType};
use cobalt_models::Error;

use crate::test_support::{assert_round_trip, load_fixture, load_text};

#[test]
fn account_example() {
    let account: Account = load_fixture("account-example.json");

    assert_eq!(FhirResource::id(&account), Some("example"));
    assert_eq!(account.status.value, Some(AccountStatus::Active));
    assert_eq!(
        account.text.as_ref().and_then(|t| t.status.value),
        Some(NarrativeStatus::Generated)
    );
    assert_eq!(
        account.name.as_ref().and_then(|n| n.as_str()),
        Some("HACC Funded Billing for Peter James Chalmers")
    );

    let account_type = account.account_type.as_ref().unwrap();
    assert!(account_type.has_coding("http://terminology.hl7.org/CodeSystem/v3-ActCode", "PBILLACCT"));
    assert_eq!(account_type.text(), Some("patient"));

    assert_eq!(account.subject.len(), 1);
    assert_eq!(account.subject[0].reference(), Some("Patient/example"));

    let period = account.service_period.as_ref().unwrap();
    assert_eq!(period.start.as_ref().and_then(|d| d.value).map(|d| d.to_string()).as_deref(), Some("2016-01-01"));

    assert_eq!(account.coverage.len(), 1);
    assert_eq!(account.coverage[0].coverage.reference(), Some("Coverage/7546D"));
    assert_eq!(account.coverage[0].priority.as_ref().and_then(|p| p.value), Some(1));
    assert!(account.guarantor.is_empty());
}

#[test]
fn account_example_with_guarantor() {
    let account: Account = assert_round_trip("account-example-with-guarantor.json");

    let ordered: Vec<_> = account
        .coverage_by_priority()
        .iter()
        .map(|c| c.coverage.reference().unwrap_or_default())
        .collect();
    assert_eq!(ordered, vec!["Coverage/9876B1", "Coverage/7546D"]);

    assert_eq!(account.guarantor.len(), 1);
    let guarantor = &account.guarantor[0];
    assert_eq!(guarantor.party.reference(), Some("RelatedPerson/benedicte"));
    assert_eq!(guarantor.on_hold.as_ref().and_then(|b| b.value), Some(false));
    assert!(guarantor.period.as_ref().unwrap().end.is_none());
}

#[test]
fn account_rejects_unknown_status() {
    let json = load_text("account-example.json").replace("\"active\"", "\"dormant\"");
    let err = FhirR4Parser::new().to_fhir::<Account>(&json).unwrap_err();
    match err {
        Error::UnknownCode { path, code, .. } => {
            assert_eq!(path, "Account.status");
            assert_eq!(code, "dormant");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn account_requires_status() {
    let err = FhirR4Parser::new()
        .to_fhir::<Account>(r#"{"resourceType":"Account","id":"a"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "Account.status"));
    assert_eq!(Account::RESOURCE_TYPE, ResourceType::Account);
}
