use cobalt_models::r4::codesystem::MedicationStatementStatusCodes;
use cobalt_models::r4::{
    DosageAsNeeded, DosageDose, FhirR4Parser, FhirResource, Medication, MedicationStatement,
    MedicationStatementEffective, MedicationStatementMedication, Resource,
};

use crate::test_support::{assert_round_trip, load_value};

#[test]
fn statement_with_contained_medication() {
    let statement: MedicationStatement = assert_round_trip("medicationstatementexample1.json");

    assert_eq!(statement.status.value, Some(MedicationStatementStatusCodes::Active));
    assert!(matches!(statement.effective, Some(MedicationStatementEffective::DateTime(_))));

    let medication = match statement.contained_medication() {
        Some(Resource::Medication(medication)) => medication,
        other => panic!("unexpected contained resource {:?}", other),
    };
    assert_eq!(FhirResource::id(medication), Some("med0309"));
    assert!(medication
        .code
        .as_ref()
        .unwrap()
        .has_coding("http://hl7.org/fhir/sid/ndc", "50580-506-02"));

    let dosage = &statement.dosage[0];
    assert!(matches!(&dosage.as_needed, Some(DosageAsNeeded::CodeableConcept(_))));
    match &dosage.dose_and_rate[0].dose {
        Some(DosageDose::Range(range)) => {
            assert!(range.low.is_some());
            assert!(range.high.is_some());
        }
        other => panic!("unexpected dose {:?}", other),
    }
}

#[test]
fn statement_with_coded_medication() {
    let statement: MedicationStatement = assert_round_trip("medicationstatementexample4.json");

    assert_eq!(statement.status.value, Some(MedicationStatementStatusCodes::Intended));
    assert!(matches!(
        &statement.medication,
        Some(MedicationStatementMedication::CodeableConcept(cc))
            if cc.has_coding("http://snomed.info/sct", "27658006")
    ));
    assert!(statement.contained_medication().is_none());

    match &statement.effective {
        Some(MedicationStatementEffective::Period(period)) => {
            let end = period.end.as_ref().and_then(|d| d.value).unwrap();
            assert_eq!(end.to_string(), "2014-01-05");
        }
        other => panic!("unexpected effective {:?}", other),
    }
    assert_eq!(statement.reason_reference[0].reference(), Some("Condition/example"));
    assert!(statement.dosage[0].max_dose_per_period.is_some());
}

#[test]
fn statement_entered_in_error() {
    let statement: MedicationStatement = assert_round_trip("medicationstatementexample5.json");
    assert_eq!(statement.status.value, Some(MedicationStatementStatusCodes::EnteredInError));
    assert_eq!(
        statement.note[0].text.as_str(),
        Some("Patient indicated that they thought it was Amoxicillin they were taking but it was really Erythromycin")
    );
}

#[test]
fn dangling_local_reference_is_not_resolved() {
    let mut value = load_value("medicationstatementexample1.json");
    value["medicationReference"]["reference"] = serde_json::json!("#missing");

    let statement: MedicationStatement = FhirR4Parser::new().to_fhir_value(&value).unwrap();
    assert!(statement.contained_medication().is_none());
    assert_eq!(statement.contained.len(), 1);
    assert!(Medication::try_from_resource(statement.contained[0].clone()).is_ok());
}
