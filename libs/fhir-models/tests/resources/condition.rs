use cobalt_models::datetime::DateTimePrecision;
use cobalt_models::r4::{Condition, ConditionAbatement, ConditionOnset, FhirR4Parser};
use cobalt_models::Error;

use crate::test_support::{assert_round_trip, load_text};

#[test]
fn condition_onset_date_time() {
    let condition: Condition = assert_round_trip("condition-example.json");

    assert!(condition
        .clinical_status
        .as_ref()
        .unwrap()
        .has_coding("http://terminology.hl7.org/CodeSystem/condition-clinical", "active"));
    assert_eq!(condition.category[0].coding.len(), 2);
    assert_eq!(condition.code.as_ref().and_then(|c| c.text()), Some("Burnt Ear"));
    assert_eq!(condition.body_site[0].text(), Some("Left Ear"));

    match &condition.onset {
        Some(ConditionOnset::DateTime(onset)) => {
            let onset = onset.value.unwrap();
            assert_eq!(onset.precision(), DateTimePrecision::Day);
            assert!(onset.timezone().is_none());
            assert_eq!(onset.to_string(), "2012-05-24");
        }
        other => panic!("unexpected onset {:?}", other),
    }
    assert!(condition.abatement.is_none());
}

#[test]
fn condition_string_onset_and_age_abatement() {
    let condition: Condition = assert_round_trip("condition-example2.json");

    assert!(matches!(
        &condition.onset,
        Some(ConditionOnset::String(s)) if s.as_str() == Some("approximately November 2012")
    ));
    match &condition.abatement {
        Some(ConditionAbatement::Age(age)) => {
            // trailing zero survives decoding
            let years = age.value.as_ref().and_then(|v| v.value).unwrap();
            assert_eq!(years.to_string(), "12.50");
            assert_eq!(age.code.as_ref().and_then(|c| c.as_str()), Some("a"));
        }
        other => panic!("unexpected abatement {:?}", other),
    }

    let stage = &condition.stage[0];
    assert_eq!(stage.summary.as_ref().and_then(|s| s.text()), Some("Mild"));
    assert_eq!(stage.stage_type.as_ref().and_then(|t| t.text()), Some("Clinical staging"));
    assert_eq!(condition.evidence[0].detail[0].reference(), Some("Observation/example"));
}

#[test]
fn condition_rejects_two_onset_types() {
    let mut value: serde_json::Value = serde_json::from_str(&load_text("condition-example.json")).unwrap();
    value["onsetString"] = serde_json::json!("in May");

    let err = FhirR4Parser::new().to_fhir_value::<Condition>(&value).unwrap_err();
    assert!(
        matches!(err, Error::MultipleChoiceValues(ref path) if path.starts_with("Condition.onset")),
        "{:?}",
        err
    );
}
