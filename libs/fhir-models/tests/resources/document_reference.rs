use cobalt_models::r4::codesystem::{
    CompositionStatus, DocumentReferenceStatus, DocumentRelationshipType,
};
use cobalt_models::r4::{DocumentReference, DomainResource, FhirR4Parser, ResourceType};
use cobalt_models::Error;

use crate::test_support::{assert_round_trip, load_value};

#[test]
fn document_reference_example() {
    let document: DocumentReference = assert_round_trip("documentreference-example.json");

    assert_eq!(document.status.value, Some(DocumentReferenceStatus::Current));
    assert_eq!(
        document.doc_status.as_ref().and_then(|s| s.value),
        Some(CompositionStatus::Preliminary)
    );
    assert!(document
        .document_type
        .as_ref()
        .unwrap()
        .has_coding("http://loinc.org", "34108-1"));
    assert_eq!(
        document.date.as_ref().and_then(|d| d.value).map(|d| d.to_string()).as_deref(),
        Some("2005-12-24T09:43:41+11:00")
    );

    let relates_to = &document.relates_to[0];
    assert_eq!(relates_to.code.value, Some(DocumentRelationshipType::Appends));
    assert_eq!(relates_to.target.reference(), Some("DocumentReference/example"));

    let context = document.context.as_ref().unwrap();
    assert_eq!(context.related.len(), 2);
    assert!(context.related[0].identifier.is_some());
}

#[test]
fn document_content_attachment() {
    let document: DocumentReference = assert_round_trip("documentreference-example.json");

    assert_eq!(document.content.len(), 1);
    let content = &document.content[0];
    let attachment = &content.attachment;
    assert_eq!(attachment.content_type.as_ref().and_then(|c| c.as_str()), Some("application/hl7-v3+xml"));
    assert_eq!(attachment.size.as_ref().and_then(|s| s.value), Some(3654));
    assert_eq!(attachment.hash.as_ref().and_then(|h| h.as_str()), Some("2jmj7l5rSw0yVb/vlWAYkK/YBwk="));
    assert!(content
        .format
        .as_ref()
        .unwrap()
        .is("urn:oid:1.3.6.1.4.1.19376.1.2.3", "urn:ihe:pcc:handp:2005"));
}

#[test]
fn contained_author() {
    let document: DocumentReference = assert_round_trip("documentreference-example.json");

    let local: Vec<_> = document.author.iter().filter_map(|a| a.local_id()).collect();
    assert_eq!(local, vec!["a2"]);
    let author = document.resolve_contained("#a2").unwrap();
    assert_eq!(author.resource_type(), ResourceType::Practitioner);
}

#[test]
fn content_must_not_be_empty() {
    let mut value = load_value("documentreference-example.json");
    value.as_object_mut().unwrap().remove("content");

    let err = FhirR4Parser::new().to_fhir_value::<DocumentReference>(&value).unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "DocumentReference.content"));
}
