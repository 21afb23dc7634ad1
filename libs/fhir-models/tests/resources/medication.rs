use cobalt_models::r4::codesystem::MedicationStatusCodes;
use cobalt_models::r4::{DomainResource, Medication, MedicationIngredientItem, Ratio, Resource};

use crate::test_support::assert_round_trip;

fn strength(ratio: &Ratio) -> (String, String) {
    let text = |q: &Option<cobalt_models::r4::Quantity>| {
        q.as_ref()
            .and_then(|q| q.value.as_ref())
            .and_then(|v| v.value)
            .map(|v| v.to_string())
            .unwrap_or_default()
    };
    (text(&ratio.numerator), text(&ratio.denominator))
}

#[test]
fn medication_ingredients() {
    let medication: Medication = assert_round_trip("medication-example.json");

    assert_eq!(medication.status.as_ref().and_then(|s| s.value), Some(MedicationStatusCodes::Active));
    assert_eq!(medication.ingredient.len(), 3);

    assert!(matches!(
        &medication.ingredient[0].item,
        Some(MedicationIngredientItem::CodeableConcept(cc))
            if cc.has_coding("http://www.nlm.nih.gov/research/umls/rxnorm", "204520")
    ));
    assert!(matches!(
        &medication.ingredient[1].item,
        Some(MedicationIngredientItem::Reference(r)) if r.reference() == Some("Substance/example")
    ));

    let sodium = &medication.ingredient[2];
    assert_eq!(sodium.is_active.as_ref().and_then(|b| b.value), Some(true));
    assert_eq!(
        strength(sodium.strength.as_ref().unwrap()),
        ("0.45".to_string(), "100".to_string())
    );

    let batch = medication.batch.as_ref().unwrap();
    assert_eq!(batch.lot_number.as_ref().and_then(|l| l.as_str()), Some("9494788"));
    assert_eq!(
        batch.expiration_date.as_ref().and_then(|d| d.value).map(|d| d.to_string()).as_deref(),
        Some("2017-05-22")
    );
}

#[test]
fn medication_contained_manufacturer() {
    let medication: Medication = assert_round_trip("medication-example.json");

    let manufacturer = medication.manufacturer.as_ref().unwrap();
    assert_eq!(manufacturer.local_id(), Some("org3"));
    match medication.resolve_contained(manufacturer.reference().unwrap()) {
        Some(Resource::Organization(org)) => {
            assert_eq!(org.name.as_ref().and_then(|n| n.as_str()), Some("Baxter Healthcare Corporation"));
        }
        other => panic!("unexpected contained resource {:?}", other),
    }
}
