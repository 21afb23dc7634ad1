use cobalt_models::r4::codesystem::{AdverseEventActuality, CareTeamStatus, FlagStatus, GoalLifecycleStatus};
use cobalt_models::r4::{
    AdverseEvent, Basic, CareTeam, DomainResource, ExtensionValue, Flag, Goal, GoalStart,
    GoalTargetDetail, GoalTargetDue, ResourceType,
};

use crate::test_support::assert_round_trip;

#[test]
fn adverse_event_example() {
    let event: AdverseEvent = assert_round_trip("adverseevent-example.json");

    assert_eq!(event.actuality.value, Some(AdverseEventActuality::Actual));
    assert_eq!(
        event.identifier.as_ref().and_then(|i| i.value.as_ref()).and_then(|v| v.as_str()),
        Some("49476534")
    );
    assert_eq!(event.subject.reference(), Some("Patient/example"));

    let suspect = &event.suspect_entity[0];
    assert_eq!(suspect.instance.reference(), Some("Medication/example"));
    assert_eq!(suspect.causality.len(), 1);
    assert_eq!(
        suspect.causality[0].assessment.as_ref().and_then(|a| a.text()),
        Some("Probably related")
    );
}

#[test]
fn basic_nested_extensions() {
    let basic: Basic = assert_round_trip("basic-example2.json");

    let class = basic
        .extensions_by_url("http://example.org/do-not-use/fhir-extensions/UMLclass")
        .next()
        .unwrap();
    assert!(class.value.is_none());
    assert_eq!(class.extension.len(), 2);

    let attribute = class.extensions_by_url("attribute").next().unwrap();
    let values: Vec<_> = attribute.extension.iter().map(|e| e.value.clone()).collect();
    assert!(matches!(&values[0], Some(ExtensionValue::String(s)) if s.as_str() == Some("attribute1")));
    assert!(matches!(&values[1], Some(ExtensionValue::Integer(i)) if i.value == Some(1)));
    assert!(matches!(&values[2], Some(ExtensionValue::Code(c)) if c.as_str() == Some("*")));
}

#[test]
fn care_team_contained_member() {
    let team: CareTeam = assert_round_trip("careteam-example.json");

    assert_eq!(team.status.as_ref().and_then(|s| s.value), Some(CareTeamStatus::Active));
    assert_eq!(team.participant.len(), 2);

    let adviser = team.participant[1].member.as_ref().unwrap();
    let contained = team.resolve_contained(adviser.reference().unwrap()).unwrap();
    assert_eq!(contained.resource_type(), ResourceType::Practitioner);
    assert_eq!(contained.id(), Some("pr1"));
    assert!(team.participant[0].member.as_ref().and_then(|m| m.local_id()).is_none());
}

#[test]
fn flag_example() {
    let flag: Flag = assert_round_trip("flag-example.json");

    assert_eq!(flag.status.value, Some(FlagStatus::Inactive));
    assert!(flag.code.has_coding("http://example.org/local", "bigdog"));
    assert_eq!(flag.author.as_ref().and_then(|a| a.display.as_ref()).and_then(|d| d.as_str()), Some("Nancy Nurse"));
}

#[test]
fn goal_choices() {
    let goal: Goal = assert_round_trip("goal-example.json");

    assert_eq!(goal.lifecycle_status.value, Some(GoalLifecycleStatus::OnHold));
    assert!(matches!(goal.start, Some(GoalStart::Date(_))));

    let target = &goal.target[0];
    match &target.detail {
        Some(GoalTargetDetail::Range(range)) => {
            let low = range.low.as_ref().and_then(|q| q.value.as_ref()).and_then(|v| v.value);
            assert_eq!(low.map(|v| v.to_string()).as_deref(), Some("160"));
        }
        other => panic!("unexpected detail {:?}", other),
    }
    assert!(matches!(target.due, Some(GoalTargetDue::Date(_))));
    assert_eq!(goal.outcome_reference.len(), 1);
}
