use cobalt_models::r4::codesystem::{BundleType, HttpVerb, IssueType, SearchEntryMode};
use cobalt_models::r4::{
    Bundle, FhirR4Parser, FhirResource, MedicationRequest, OperationOutcome, ResourceType,
};
use cobalt_models::{Error, ParserConfig, Preset};

use crate::test_support::assert_round_trip;

#[test]
fn searchset_bundle() {
    let bundle: Bundle = assert_round_trip("bundle-example.json");

    assert_eq!(bundle.bundle_type.value, Some(BundleType::Searchset));
    assert_eq!(bundle.total.as_ref().and_then(|t| t.value), Some(3));
    assert_eq!(bundle.link.len(), 2);
    assert_eq!(bundle.link[1].relation.as_str(), Some("next"));

    let types: Vec<_> = bundle.resources().map(|r| r.resource_type()).collect();
    assert_eq!(types, vec![ResourceType::MedicationRequest, ResourceType::Medication]);

    let search = bundle.entry[0].search.as_ref().unwrap();
    assert_eq!(search.mode.as_ref().and_then(|m| m.value), Some(SearchEntryMode::Match));
    assert_eq!(
        search.score.as_ref().and_then(|s| s.value).map(|s| s.to_string()).as_deref(),
        Some("1")
    );

    let request = bundle
        .find_by_full_url("https://example.com/base/MedicationRequest/3123")
        .cloned()
        .map(MedicationRequest::try_from_resource)
        .unwrap()
        .unwrap();
    assert_eq!(FhirResource::id(&request), Some("3123"));
    assert!(bundle.find_by_full_url("https://example.com/base/Patient/1").is_none());
}

#[test]
fn transaction_bundle() {
    let bundle: Bundle = assert_round_trip("bundle-transaction.json");

    assert_eq!(bundle.bundle_type.value, Some(BundleType::Transaction));
    let methods: Vec<_> = bundle
        .entry
        .iter()
        .map(|e| e.request.as_ref().and_then(|r| r.method.value))
        .collect();
    assert_eq!(
        methods,
        vec![
            Some(HttpVerb::Post),
            Some(HttpVerb::Put),
            Some(HttpVerb::Delete),
            Some(HttpVerb::Get)
        ]
    );

    // entries without a resource are kept
    assert_eq!(bundle.resources().count(), 2);
    assert!(bundle.entry[2].resource.is_none());
    assert_eq!(
        bundle.entry[1].request.as_ref().and_then(|r| r.if_match.as_ref()).and_then(|m| m.as_str()),
        Some("W/\"2\"")
    );
}

#[test]
fn batch_response_outcome() {
    let bundle: Bundle = assert_round_trip("bundle-response.json");

    assert_eq!(
        bundle.timestamp.as_ref().and_then(|t| t.value).map(|t| t.to_string()).as_deref(),
        Some("2014-08-18T01:43:33.453+00:00")
    );

    let response = bundle.entry[0].response.as_ref().unwrap();
    assert_eq!(response.status.as_str(), Some("201 Created"));
    let outcome = response
        .outcome
        .clone()
        .map(OperationOutcome::try_from_resource)
        .unwrap()
        .unwrap();
    assert!(!outcome.has_errors());
    assert_eq!(outcome.issue[0].code.value, Some(IssueType::NotFound));

    assert!(bundle.entry[1].response.as_ref().unwrap().outcome.is_none());
}

#[test]
fn unsupported_entry_resource_is_dropped_when_lenient() {
    let json = r#"{
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [
            {"fullUrl": "urn:uuid:1", "resource": {"resourceType": "Encounter", "status": "finished"}},
            {"fullUrl": "urn:uuid:2", "resource": {"resourceType": "Basic", "code": {"text": "x"}}}
        ]
    }"#;

    let err = FhirR4Parser::new().parse_resource(json).unwrap_err();
    assert!(matches!(err, Error::UnknownResourceType(ref t) if t == "Encounter"));

    let lenient = FhirR4Parser::with_config(ParserConfig::preset(Preset::Lenient));
    let bundle = Bundle::try_from_resource(lenient.parse_resource(json).unwrap()).unwrap();
    assert_eq!(bundle.entry.len(), 2);
    assert!(bundle.entry[0].resource.is_none());
    let types: Vec<_> = bundle.resources().map(|r| r.resource_type()).collect();
    assert_eq!(types, vec![ResourceType::Basic]);

    // the top-level resource type is never tolerated
    let err = lenient.parse_resource(r#"{"resourceType":"Encounter"}"#).unwrap_err();
    assert!(matches!(err, Error::UnknownResourceType(_)));
}
