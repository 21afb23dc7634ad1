use cobalt_models::datetime::DateTimePrecision;
use cobalt_models::{ParserConfig, Preset};
use cobalt_models::r4::codesystem::{ObservationStatus, QuantityComparator};
use cobalt_models::r4::{FhirR4Parser, FhirResource, Observation, ObservationEffective, ObservationValue, Quantity};

use crate::test_support::{assert_round_trip, load_value};

fn quantity_text(quantity: &Quantity) -> Option<String> {
    quantity.value.as_ref().and_then(|v| v.value).map(|v| v.to_string())
}

#[test]
fn blood_pressure_components() {
    let observation: Observation = assert_round_trip("observation-example-bloodpressure.json");

    assert_eq!(observation.status.value, Some(ObservationStatus::Final));
    let profiles: Vec<_> = FhirResource::meta(&observation)
        .unwrap()
        .profile
        .iter()
        .filter_map(|p| p.as_str())
        .collect();
    assert_eq!(profiles, vec!["http://hl7.org/fhir/StructureDefinition/vitalsigns"]);
    assert!(observation.value.is_none());
    assert!(observation.based_on[0].reference().is_none());

    let systolic = observation.component_by_code("http://loinc.org", "8480-6").unwrap();
    match &systolic.value {
        Some(ObservationValue::Quantity(q)) => {
            assert_eq!(quantity_text(q).as_deref(), Some("107"));
            assert_eq!(q.unit.as_ref().and_then(|u| u.as_str()), Some("mmHg"));
        }
        other => panic!("unexpected value {:?}", other),
    }
    let diastolic = observation.component_by_code("http://loinc.org", "8462-4").unwrap();
    assert_eq!(diastolic.interpretation[0].text(), Some("Below low normal"));
    assert!(observation.component_by_code("http://loinc.org", "8867-4").is_none());
}

#[test]
fn decimal_text_is_preserved() {
    let observation: Observation = assert_round_trip("observation-example-decimals.json");

    assert_eq!(observation.status.value, Some(ObservationStatus::Amended));
    match &observation.value {
        Some(ObservationValue::Quantity(q)) => assert_eq!(quantity_text(q).as_deref(), Some("6.30")),
        other => panic!("unexpected value {:?}", other),
    }

    let range = &observation.reference_range[0];
    assert_eq!(range.low.as_ref().and_then(quantity_text).as_deref(), Some("3.1"));
    assert_eq!(range.high.as_ref().and_then(quantity_text).as_deref(), Some("6.2000"));

    match &observation.component[0].value {
        Some(ObservationValue::Quantity(q)) => {
            assert_eq!(quantity_text(q).as_deref(), Some("0.0000000012345"));
            assert_eq!(q.comparator.as_ref().and_then(|c| c.value), Some(QuantityComparator::LessThan));
        }
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn sampled_data_and_time_values() {
    let observation: Observation = assert_round_trip("observation-example-decimals.json");

    match &observation.component[1].value {
        Some(ObservationValue::SampledData(data)) => {
            assert_eq!(data.dimensions.value, Some(3));
            assert_eq!(data.period.value.map(|p| p.to_string()).as_deref(), Some("10"));
            assert_eq!(
                data.lower_limit.as_ref().and_then(|l| l.value).map(|l| l.to_string()).as_deref(),
                Some("-3300")
            );
            assert_eq!(data.data.as_ref().and_then(|d| d.as_str()), Some("2041 2043 2036 E U"));
        }
        other => panic!("unexpected value {:?}", other),
    }

    match &observation.component[2].value {
        Some(ObservationValue::Time(time)) => {
            let time = time.value.unwrap();
            assert_eq!(time.fraction_digits(), 4);
            assert_eq!(time.nanosecond(), 123_000_000);
            assert_eq!(time.to_string(), "14:30:00.1230");
        }
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn instants_keep_fraction_and_offset() {
    let observation: Observation = assert_round_trip("observation-example-decimals.json");

    let issued = observation.issued.as_ref().and_then(|i| i.value).unwrap();
    assert_eq!(issued.precision(), DateTimePrecision::Fraction);
    assert_eq!(issued.to_string(), "2013-04-03T15:30:10.000+01:00");

    match &observation.effective {
        Some(ObservationEffective::Period(period)) => {
            let start = period.start.as_ref().and_then(|s| s.value).unwrap();
            let end = period.end.as_ref().and_then(|e| e.value).unwrap();
            assert!(start.to_chrono().unwrap() < end.to_chrono().unwrap());
            assert_eq!(end.to_string(), "2013-04-05T09:30:10Z");
        }
        other => panic!("unexpected effective {:?}", other),
    }
}

#[test]
fn non_canonical_numbers_fail_strict() {
    let parser = FhirR4Parser::new();
    for text in ["1.5e2", "1E-3", "-0.0"] {
        let mut value = load_value("observation-example-decimals.json");
        value["valueQuantity"]["value"] = serde_json::from_str(text).unwrap();
        let err = parser.to_fhir_value::<Observation>(&value).unwrap_err();
        assert_eq!(err.path(), Some("Observation.valueQuantity.value"), "{}", text);
    }
}

#[test]
fn lenient_parser_rewrites_exponent_decimals() {
    let mut value = load_value("observation-example-decimals.json");
    value["valueQuantity"]["value"] = serde_json::from_str("1.5e2").unwrap();

    let parser = FhirR4Parser::with_config(ParserConfig::preset(Preset::Lenient));
    let observation: Observation = parser.to_fhir_value(&value).unwrap();
    let encoded = parser.from_fhir_value(&observation);
    assert_eq!(encoded["valueQuantity"]["value"].to_string(), "150");
}
