use oncalendar_lite::{convert_from_cron, validate, CalendarSpec, FieldType};
use proptest::prelude::*;

fn arb_cron_value(min: u8, max: u8) -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (min..=max).prop_map(|v| v.to_string()),
        (min..=max, min..=max).prop_map(|(a, b)| format!("{}-{}", a.min(b), a.max(b))),
        (1u8..=10).prop_map(|step| format!("*/{step}")),
        (min..=max, 1u8..=10).prop_map(|(v, step)| format!("{v}/{step}")),
        (min..=max, min..=max).prop_map(|(a, b)| format!("{a},{b}")),
    ]
}

fn arb_month() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_cron_value(1, 12),
        prop_oneof![Just("JAN"), Just("feb"), Just("Sept"), Just("DEC"), Just("jan-jun")].prop_map(String::from),
    ]
}

fn arb_weekday() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_cron_value(0, 7),
        (0u8..=7, 0u8..=7, 1u8..=7).prop_map(|(a, b, step)| format!("{}-{}/{step}", a.min(b), a.max(b))),
        (arb_cron_value(0, 7), prop_oneof![Just("*"), Just("?")], any::<bool>()).prop_map(|(value, wildcard, first)| {
            if first {
                format!("{wildcard},{value}")
            } else {
                format!("{value},{wildcard}")
            }
        }),
        prop_oneof![Just("MON-FRI"), Just("sat,sun"), Just("tues"), Just("?"), Just("1-5/2"), Just("7-7/1")]
            .prop_map(String::from),
    ]
}

fn arb_cron() -> impl Strategy<Value = String> {
    (
        arb_cron_value(0, 59),
        arb_cron_value(0, 23),
        arb_cron_value(1, 31),
        arb_month(),
        arb_weekday(),
    )
        .prop_map(|(minute, hour, dom, month, dow)| format!("{minute} {hour} {dom} {month} {dow}"))
}

fn arb_time() -> impl Strategy<Value = String> {
    (0u8..24, 0u8..60, 0u8..60).prop_map(|(h, m, s)| format!("{h:02}:{m:02}:{s:02}"))
}

fn arb_calendar() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_time(),
        (arb_time(), 1u8..=12, 1u8..=31).prop_map(|(t, m, d)| format!("*-{m}-{d} {t}")),
        arb_time().prop_map(|t| format!("Mon..Fri {t}")),
        arb_time().prop_map(|t| format!("{t} Europe/Paris")),
        "[a-zA-Z0-9:*~., -]{0,24}",
    ]
}

fn field_sample(type_: FieldType, value: &str) -> String {
    match type_ {
        FieldType::Year => format!("{value}-1-1 00:00:00"),
        FieldType::Month => format!("*-{value}-1 00:00:00"),
        FieldType::Day => format!("*-1-{value} 00:00:00"),
        FieldType::Hour => format!("*-*-* {value}:00:00"),
        FieldType::Minute => format!("*-*-* 00:{value}:00"),
        FieldType::Second => format!("*-*-* 00:00:{value}"),
    }
}

fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Year),
        Just(FieldType::Month),
        Just(FieldType::Day),
        Just(FieldType::Hour),
        Just(FieldType::Minute),
        Just(FieldType::Second),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Validation is a pure function of the input.
    #[test]
    fn validation_idempotency(spec in arb_calendar()) {
        let first = validate(&spec);
        prop_assert_eq!(first, validate(&spec));
        prop_assert_eq!(first, CalendarSpec::new(spec.as_str()).is_ok());
    }

    /// Every converted cron expression is accepted.
    #[test]
    fn converter_roundtrip(cron in arb_cron()) {
        let calendar = convert_from_cron(&cron);
        prop_assert!(calendar.is_ok(), "cron = {}, error = {:?}", cron, calendar);
        let calendar = calendar.unwrap();
        prop_assert!(validate(&calendar), "cron = {}, calendar = {:?}", cron, calendar);
    }

    /// In-range values are accepted, neighbours of the bounds aren't.
    #[test]
    fn field_bounds(type_ in arb_field_type(), offset in 0u16..=9999) {
        let rules = type_.rules();
        let value = rules.min + offset % (rules.max - rules.min + 1);

        prop_assert!(validate(&field_sample(type_, &value.to_string())), "type = {:?}, value = {}", type_, value);
        prop_assert!(!validate(&field_sample(type_, &(rules.max + 1).to_string())), "type = {:?}", type_);
        if rules.min > 0 {
            prop_assert!(!validate(&field_sample(type_, &(rules.min - 1).to_string())), "type = {:?}", type_);
        }
    }

    /// Displayed spec is parsed back into the same value.
    #[test]
    fn calendar_spec_display_roundtrip(spec in arb_calendar()) {
        if let Ok(parsed) = CalendarSpec::new(spec.as_str()) {
            prop_assert_eq!(CalendarSpec::new(parsed.to_string()), Ok(parsed));
        }
    }
}
