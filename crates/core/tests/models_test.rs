use pawplan_core::models::{
    behavior::BehaviorCategory,
    clock::ClockTime,
    potty::{GenerateScheduleRequest, PottyEvent, PottyEventKind, PottyScheduleConfig},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use serde_test::{Token, assert_tokens};

#[test]
fn test_clock_time_tokens() {
    let time = ClockTime::from_hm(7, 5).expect("valid time");
    assert_tokens(&time, &[Token::Str("07:05")]);
}

#[test]
fn test_clock_time_rejects_garbage() {
    let err = from_str::<ClockTime>(r#""25:00""#).expect_err("hour out of range");
    assert!(err.to_string().contains("Invalid time '25:00'"));
}

#[rstest]
#[case("00:00", 0)]
#[case("07:30", 450)]
#[case(" 18:05 ", 1085)]
#[case("23:59", 1439)]
fn test_clock_time_parse(#[case] raw: &str, #[case] minutes: u16) {
    let time: ClockTime = raw.parse().expect("valid time");
    assert_eq!(time.minutes(), minutes);
}

#[rstest]
#[case("24:00")]
#[case("7")]
#[case("noon")]
#[case("")]
fn test_clock_time_parse_errors(#[case] raw: &str) {
    assert!(raw.parse::<ClockTime>().is_err());
}

#[test]
fn test_clock_time_arithmetic() {
    let time = ClockTime::from_hm(23, 30).expect("valid time");
    assert_eq!(time.checked_add_minutes(29).map(|t| t.to_string()), Some("23:59".to_string()));
    assert!(time.checked_add_minutes(30).is_none());
    assert_eq!(time.minutes_until(ClockTime::from_hm(0, 0).expect("valid time")), -1410);
    assert!(ClockTime::from_hm(24, 0).is_none());
    assert!(ClockTime::from_minutes(1440).is_none());
}

#[test]
fn test_potty_event_wire_format() {
    let event = PottyEvent::new(
        "potty-meal-0",
        ClockTime::from_hm(8, 20).expect("valid time"),
        PottyEventKind::PottyMeal,
        "Potty after Breakfast",
    );

    assert_eq!(
        to_value(&event).expect("serialize"),
        json!({
            "id": "potty-meal-0",
            "time": "08:20",
            "kind": "POTTY_MEAL",
            "label": "Potty after Breakfast",
            "is_input": false,
            "completed": false,
        })
    );
}

#[test]
fn test_generate_request_defaults() {
    let request: GenerateScheduleRequest =
        from_str(r#"{"birth_date": "2026-06-01"}"#).expect("deserialize");
    assert!(request.today.is_none());
    assert!(request.config.is_none());

    let request: GenerateScheduleRequest = from_str(
        r#"{
            "birth_date": "2026-06-01",
            "today": "2026-10-14",
            "config": {"wake_time": "06:00", "bed_time": "21:30", "meal_times": ["06:30", "17:00"]}
        }"#,
    )
    .expect("deserialize");
    let config = request.config.expect("config present");
    assert_eq!(config.bed_time.to_string(), "21:30");
    assert_eq!(config.meal_times.len(), 2);
}

#[test]
fn test_default_config() {
    let config = PottyScheduleConfig::default();
    assert_eq!(
        to_value(&config).expect("serialize"),
        json!({"wake_time": "07:00", "bed_time": "22:00", "meal_times": ["08:00", "18:00"]})
    );
}

#[test]
fn test_event_kind_flags() {
    assert!(PottyEventKind::Meal.is_input());
    assert!(!PottyEventKind::Wake.is_input());
    assert!(!PottyEventKind::PottyBed.is_input());
}

#[test]
fn test_behavior_category_names() {
    assert_eq!(BehaviorCategory::Leash.to_string(), "leash");
    assert_eq!(to_value(BehaviorCategory::Impulse).expect("serialize"), json!("impulse"));
}
