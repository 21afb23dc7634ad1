use cobalt_models::r4::codesystem::{
    AddressType, AdministrativeGender, ContactPointSystem, ContactPointUse, LinkType, NameUse,
};
use cobalt_models::r4::{
    ExtensionValue, FhirR4Parser, Patient, PatientDeceased, PatientMultipleBirth,
};
use cobalt_models::{Error, ParserConfig, Preset};

use crate::test_support::{assert_round_trip, load_value};

#[test]
fn patient_example() {
    let patient: Patient = assert_round_trip("patient-example.json");

    assert_eq!(patient.active.as_ref().and_then(|a| a.value), Some(true));
    assert_eq!(patient.gender.as_ref().and_then(|g| g.value), Some(AdministrativeGender::Male));
    assert!(matches!(&patient.deceased, Some(PatientDeceased::Boolean(b)) if b.value == Some(false)));

    let official = patient.official_name().unwrap();
    assert_eq!(official.family.as_ref().and_then(|f| f.as_str()), Some("Chalmers"));
    let given: Vec<_> = official.given.iter().filter_map(|g| g.as_str()).collect();
    assert_eq!(given, vec!["Peter", "James"]);

    let uses: Vec<_> = patient
        .name
        .iter()
        .filter_map(|n| n.name_use.as_ref().and_then(|u| u.value))
        .collect();
    assert_eq!(uses, vec![NameUse::Official, NameUse::Usual, NameUse::Maiden]);

    // a telecom with only `use` is kept
    assert!(patient.telecom[0].system.is_none());
    assert_eq!(patient.telecom[0].contact_use.as_ref().and_then(|u| u.value), Some(ContactPointUse::Home));
    let mobile = &patient.telecom[2];
    assert_eq!(mobile.system.as_ref().and_then(|s| s.value), Some(ContactPointSystem::Phone));
    assert_eq!(mobile.contact_use.as_ref().and_then(|u| u.value), Some(ContactPointUse::Mobile));
    assert_eq!(mobile.rank.as_ref().and_then(|r| r.value), Some(2));

    assert_eq!(
        patient.address[0].address_type.as_ref().and_then(|t| t.value),
        Some(AddressType::Both)
    );
    assert_eq!(patient.managing_organization.as_ref().and_then(|o| o.reference()), Some("Organization/1"));
}

#[test]
fn birth_date_extension() {
    let patient: Patient = assert_round_trip("patient-example.json");

    let birth_date = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth_date.value.map(|d| d.to_string()).as_deref(), Some("1974-12-25"));
    assert_eq!(birth_date.extension.len(), 1);
    let birth_time = &birth_date.extension[0];
    assert_eq!(birth_time.url, "http://hl7.org/fhir/StructureDefinition/patient-birthTime");
    match &birth_time.value {
        Some(ExtensionValue::DateTime(dt)) => {
            assert_eq!(dt.value.map(|v| v.to_string()).as_deref(), Some("1974-12-25T14:35:45-05:00"));
        }
        other => panic!("unexpected extension value {:?}", other),
    }

    let contact_name = patient.contact[0].name.as_ref().unwrap();
    let family = contact_name.family.as_ref().unwrap();
    assert_eq!(family.as_str(), Some("du Marché"));
    assert!(matches!(
        &family.extension[0].value,
        Some(ExtensionValue::String(s)) if s.as_str() == Some("VV")
    ));
    assert_eq!(contact_name.given[0].as_str(), Some("Bénédicte"));
}

#[test]
fn aligned_primitive_metadata() {
    let patient: Patient = assert_round_trip("patient-example-primitive-extensions.json");

    let given = &patient.name[0].given;
    assert_eq!(given.len(), 3);
    assert_eq!(given[0].as_str(), Some("Henry"));
    assert!(!given[0].has_metadata());

    assert!(given[1].value.is_none());
    assert_eq!(given[1].id.as_deref(), Some("g2"));
    assert!(matches!(
        &given[1].extension[0].value,
        Some(ExtensionValue::Code(c)) if c.as_str() == Some("masked")
    ));

    assert_eq!(given[2].as_str(), Some("Marc"));
    assert_eq!(given[2].extension.len(), 1);
}

#[test]
fn metadata_without_value() {
    let patient: Patient = assert_round_trip("patient-example-primitive-extensions.json");

    let gender = patient.gender.as_ref().unwrap();
    assert_eq!(gender.value, Some(AdministrativeGender::Other));
    assert!(matches!(
        &gender.extension[0].value,
        Some(ExtensionValue::CodeableConcept(cc)) if cc.text() == Some("non-binary")
    ));

    let birth_date = patient.birth_date.as_ref().unwrap();
    assert!(birth_date.value.is_none());
    assert_eq!(birth_date.extension[0].url, "http://hl7.org/fhir/StructureDefinition/data-absent-reason");

    assert!(matches!(
        &patient.multiple_birth,
        Some(PatientMultipleBirth::Integer(i)) if i.value == Some(2)
    ));
    assert_eq!(patient.communication[0].preferred.as_ref().and_then(|p| p.value), Some(true));
    assert_eq!(patient.link[0].link_type.value, Some(LinkType::Seealso));
    assert_eq!(patient.link[0].other.reference(), Some("Patient/pat2"));
}

#[test]
fn negative_zero_integer_is_not_rewritten_silently() {
    let json = r#"{"resourceType":"Patient","id":"twin","multipleBirthInteger":-0}"#;

    let err = FhirR4Parser::new().to_fhir::<Patient>(json).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref path, .. } if path == "Patient.multipleBirthInteger"));

    let lenient = FhirR4Parser::with_config(ParserConfig::preset(Preset::Lenient));
    let patient: Patient = lenient.to_fhir(json).unwrap();
    assert!(matches!(
        &patient.multiple_birth,
        Some(PatientMultipleBirth::Integer(i)) if i.value == Some(0)
    ));
}

#[test]
fn misaligned_metadata_is_rejected() {
    let mut value = load_value("patient-example-primitive-extensions.json");
    value["name"][0]["_given"].as_array_mut().unwrap().pop();

    let err = FhirR4Parser::new().to_fhir_value::<Patient>(&value).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref path, .. } if path == "Patient.name[0].given"));
}

#[test]
fn null_given_without_metadata() {
    let mut value = load_value("patient-example-primitive-extensions.json");
    value["name"][0]["_given"][1] = serde_json::Value::Null;

    let err = FhirR4Parser::new().to_fhir_value::<Patient>(&value).unwrap_err();
    assert!(matches!(err, Error::NullValue(ref path) if path == "Patient.name[0].given[1]"));

    let lenient = FhirR4Parser::with_config(ParserConfig::preset(Preset::Lenient));
    let patient: Patient = lenient.to_fhir_value(&value).unwrap();
    let given: Vec<_> = patient.name[0].given.iter().filter_map(|g| g.as_str()).collect();
    assert_eq!(given, vec!["Henry", "Marc"]);
}

#[test]
fn invalid_resource_id_is_rejected() {
    let mut value = load_value("patient-example.json");
    value["id"] = serde_json::json!("not a valid id");

    let err = FhirR4Parser::new().to_fhir_value::<Patient>(&value).unwrap_err();
    assert_eq!(err.path(), Some("Patient.id"));
}
