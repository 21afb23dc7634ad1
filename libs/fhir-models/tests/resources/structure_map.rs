use cobalt_models::datetime::DateTimePrecision;
use cobalt_models::r4::codesystem::{
    ContactPointSystem, PublicationStatus, StructureMapContextType, StructureMapGroupTypeMode,
    StructureMapInputMode, StructureMapSourceListMode, StructureMapTargetListMode,
    StructureMapTransform,
};
use cobalt_models::r4::{
    ExtensionValue, FhirR4Parser, FhirResource, ResourceType, StructureMap,
    StructureMapParameterValue,
};
use cobalt_models::Error;
use serde_json::{json, Value};

use crate::test_support::{assert_round_trip, load_value};

#[test]
fn structure_map_example() {
    let map: StructureMap = assert_round_trip("structuremap-example.json");

    assert_eq!(StructureMap::RESOURCE_TYPE, ResourceType::StructureMap);
    assert_eq!(map.url.as_str(), Some("http://hl7.org/fhir/StructureMap/example"));
    assert_eq!(map.name.as_str(), Some("ExampleMap"));
    assert_eq!(map.status.value, Some(PublicationStatus::Draft));
    assert_eq!(
        map.date.as_ref().and_then(|d| d.value).map(|d| d.precision()),
        Some(DateTimePrecision::Day)
    );
    assert_eq!(
        map.contact[0].telecom[0].system.as_ref().and_then(|s| s.value),
        Some(ContactPointSystem::Url)
    );
    assert!(map.jurisdiction[0].has_coding("http://unstats.un.org/unsd/methods/m49/m49.htm", "009"));

    let group = map.group_by_name("Examples").unwrap();
    assert_eq!(group.type_mode.value, Some(StructureMapGroupTypeMode::None));
    assert_eq!(group.input[0].mode.value, Some(StructureMapInputMode::Source));

    let rule = &group.rule[0];
    let source = &rule.source[0];
    assert_eq!(source.context.as_str(), Some("Source"));
    assert_eq!(source.min.as_ref().and_then(|m| m.value), Some(1));
    assert_eq!(source.source_type.as_ref().and_then(|t| t.as_str()), Some("SourceClassA"));
    assert_eq!(source.variable.as_ref().and_then(|v| v.as_str()), Some("t"));

    let target = &rule.target[0];
    assert_eq!(
        target.context_type.as_ref().and_then(|c| c.value),
        Some(StructureMapContextType::Variable)
    );
    assert_eq!(
        target.transform.as_ref().and_then(|t| t.value),
        Some(StructureMapTransform::Copy)
    );
    assert!(map.group_by_name("Other").is_none());
}

#[test]
fn nested_rules_parameters_and_defaults() {
    // parsed from text so decimals keep their scale
    let value: Value = serde_json::from_str(
        r#"{
        "resourceType": "StructureMap",
        "url": "http://example.org/StructureMap/qty",
        "name": "QuantityMap",
        "status": "active",
        "import": ["http://example.org/StructureMap/common"],
        "structure": [
            {"url": "http://hl7.org/fhir/StructureDefinition/Observation", "mode": "target", "alias": "Obs"}
        ],
        "group": [{
            "name": "Main",
            "typeMode": "types",
            "input": [{"name": "src", "type": "Source", "mode": "source"}, {"name": "tgt", "mode": "target"}],
            "rule": [{
                "name": "value",
                "source": [{
                    "context": "src",
                    "element": "amount",
                    "listMode": "only_one",
                    "defaultValueDecimal": 0.50,
                    "variable": "a"
                }],
                "target": [{
                    "context": "tgt",
                    "contextType": "variable",
                    "element": "valueQuantity",
                    "listMode": ["first", "collate"],
                    "transform": "qty",
                    "parameter": [
                        {"valueId": "a"},
                        {"valueString": "mg"},
                        {"valueDecimal": 0.50},
                        {"valueBoolean": true}
                    ]
                }],
                "rule": [{
                    "name": "unit",
                    "source": [{"context": "a", "condition": "exists()"}],
                    "dependent": [{"name": "units", "variable": ["a", "tgt"]}]
                }]
            }]
        }]
    }"#,
    )
    .unwrap();

    let parser = FhirR4Parser::new();
    let map: StructureMap = parser.to_fhir_value(&value).unwrap();
    cobalt_format::ensure_equivalent(&value, &parser.from_fhir_value(&map)).unwrap();

    assert_eq!(map.import[0].as_str(), Some("http://example.org/StructureMap/common"));
    let rule = &map.group[0].rule[0];
    let flattened = rule.flatten();
    let names: Vec<_> = flattened.iter().filter_map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["value", "unit"]);

    let source = &rule.source[0];
    assert_eq!(
        source.list_mode.as_ref().and_then(|m| m.value),
        Some(StructureMapSourceListMode::OnlyOne)
    );
    match &source.default_value {
        Some(ExtensionValue::Decimal(d)) => {
            assert_eq!(d.value.map(|v| v.to_string()).as_deref(), Some("0.50"))
        }
        other => panic!("unexpected default value {:?}", other),
    }

    let target = &rule.target[0];
    let modes: Vec<_> = target.list_mode.iter().filter_map(|m| m.value).collect();
    assert_eq!(
        modes,
        vec![StructureMapTargetListMode::First, StructureMapTargetListMode::Collate]
    );
    assert!(matches!(
        target.parameter[0].value,
        Some(StructureMapParameterValue::Id(ref id)) if id.as_str() == Some("a")
    ));
    assert!(matches!(
        target.parameter[3].value,
        Some(StructureMapParameterValue::Boolean(ref b)) if b.value == Some(true)
    ));

    let dependent = &rule.rule[0].dependent[0];
    assert_eq!(dependent.variable.len(), 2);
}

#[test]
fn structure_map_required_elements() {
    let parser = FhirR4Parser::new();

    let mut value = load_value("structuremap-example.json");
    value.as_object_mut().unwrap().remove("group");
    let err = parser.to_fhir_value::<StructureMap>(&value).unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "StructureMap.group"));

    let mut value = load_value("structuremap-example.json");
    value["group"][0].as_object_mut().unwrap().remove("typeMode");
    let err = parser.to_fhir_value::<StructureMap>(&value).unwrap_err();
    assert!(matches!(err, Error::MissingElement(ref path) if path == "StructureMap.group[0].typeMode"));

    let mut value = load_value("structuremap-example.json");
    value["group"][0]["rule"][0]["target"][0]["parameter"] = json!([{}]);
    let err = parser.to_fhir_value::<StructureMap>(&value).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingElement(ref path)
            if path == "StructureMap.group[0].rule[0].target[0].parameter[0].value[x]"
    ));

    let mut value = load_value("structuremap-example.json");
    value["group"][0]["rule"][0]["target"][0]["transform"] = json!("move");
    let err = parser.to_fhir_value::<StructureMap>(&value).unwrap_err();
    assert!(matches!(err, Error::UnknownCode { ref code, .. } if code == "move"));
}
