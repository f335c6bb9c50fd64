use rosterline::components::availability::{decode, encode, is_off, Field, WeeklyAvailability};
use rosterline::components::roster::{
    self, EmploymentStatus, InMemoryRoster, NewEmployee, NewRequest, RequestStatus, Role,
    RosterStore,
};
use rosterline::components::{end_day_for, is_valid_window, AvailabilityEditor, ScheduleWindow};
use rosterline::error::Error;
use rosterline::utils::{is_valid_time_fragment, sanitize_time_input, Period, Weekday};

const ROSTER: &str = r#"
[[employees]]
id = 3
name = "Mike Chen"
phone = "(555) 345-6789"
email = "mike.chen@email.com"
status = "PT"
role = "Cook"

[employees.availability]
Monday = "4:00 PM - 10:00 PM"
Tuesday = "4:00 PM - 10:00 PM"
Wednesday = "Not Available"
Thursday = "4:00 PM - 10:00 PM"
Friday = "4:00 PM - 10:00 PM"
Saturday = "4:00 PM - 10:00 PM"
Sunday = "Not Available"
"#;

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn test_window_properties() {
    assert_eq!(end_day_for(Weekday::Monday), Weekday::Sunday);
    assert_eq!(end_day_for(Weekday::Wednesday), Weekday::Tuesday);
    assert_eq!(end_day_for(Weekday::Sunday), Weekday::Saturday);
    assert!(is_valid_window(Weekday::Monday, Weekday::Sunday));
    assert!(!is_valid_window(Weekday::Monday, Weekday::Saturday));

    // Picking an end day by hand is allowed and only flagged
    let mut window = ScheduleWindow::default();
    window.set_end_day(Weekday::Saturday);
    assert!(!window.is_valid());
    window.set_start_day(Weekday::Sunday);
    assert_eq!(window.end_day, Weekday::Saturday);
    assert!(window.is_valid());
}

#[test]
fn test_codec_properties() {
    let off = decode("Not Available");
    assert!(off.off_day);

    let mut filled = decode("9:00 AM - 5:00 PM").input;
    filled.start_period = Period::Pm;
    assert_eq!(encode(&filled, true), "Not Available");

    for s in ["9:00 AM - 5:00 PM", "Not Available", "9:00  AM -   5:00 PM"] {
        let edit = decode(s);
        assert_eq!(encode(&edit.input, is_off(s)), normalize(s));
    }
}

#[test]
fn test_fragment_properties() {
    assert!(is_valid_time_fragment("9:00"));
    assert!(is_valid_time_fragment("12:59"));
    assert!(!is_valid_time_fragment("13:00"));
    assert!(!is_valid_time_fragment("9:60"));
    assert!(is_valid_time_fragment(""));
    assert!(!is_valid_time_fragment("9-00"));

    assert_eq!(sanitize_time_input("9:a0b0"), "9:00");
    let once = sanitize_time_input("9:a0b0");
    assert_eq!(sanitize_time_input(&once), once);
}

#[test]
fn test_partial_encode_through_editor() {
    let mut week = WeeklyAvailability::unavailable();
    let mut editor = AvailabilityEditor::open(&week);

    editor.set_off_day(Weekday::Monday, false);
    editor.set_time(Weekday::Monday, Field::Start, "9:00");

    editor.set_off_day(Weekday::Tuesday, false);
    editor.set_time(Weekday::Tuesday, Field::End, "5:00");
    editor.set_period(Weekday::Tuesday, Field::End, Period::Pm);

    editor.set_off_day(Weekday::Wednesday, false);

    editor.commit(&mut week).unwrap();
    assert_eq!(week.get(Weekday::Monday), "9:00 AM");
    assert_eq!(week.get(Weekday::Tuesday), "5:00 PM");
    assert_eq!(week.get(Weekday::Wednesday), "Not Available");
}

#[tokio::test]
async fn test_save_availability_is_all_or_nothing() {
    let store = InMemoryRoster::from_toml(ROSTER).unwrap();
    let before = store.get_employee(3).await.unwrap().unwrap();

    let mut editor = AvailabilityEditor::open(&before.availability);
    editor.set_off_day(Weekday::Wednesday, false);
    editor.set_time(Weekday::Wednesday, Field::Start, "11:00");
    editor.set_time(Weekday::Wednesday, Field::End, "3:00");
    editor.set_period(Weekday::Wednesday, Field::End, Period::Pm);
    // One bad fragment on another day blocks the whole save
    editor.set_time(Weekday::Saturday, Field::End, "10:99");

    let err = roster::save_availability(&store, 3, &editor).await.unwrap_err();
    match err {
        Error::Validation(report) => {
            assert_eq!(
                report.messages(),
                vec!["Saturday end time must be in format 1:00-12:59"]
            );
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
    let after = store.get_employee(3).await.unwrap().unwrap();
    assert_eq!(after, before);

    // Fix the bad day and save again
    editor.set_time(Weekday::Saturday, Field::End, "10:00");
    let saved = roster::save_availability(&store, 3, &editor).await.unwrap();
    assert_eq!(saved.availability.get(Weekday::Wednesday), "11:00 AM - 3:00 PM");
    assert_eq!(saved.availability.get(Weekday::Saturday), "4:00 PM - 10:00 PM");
    assert_eq!(store.get_employee(3).await.unwrap().unwrap(), saved);
}

#[tokio::test]
async fn test_save_availability_unknown_employee() {
    let store = InMemoryRoster::new();
    let editor = AvailabilityEditor::open(&WeeklyAvailability::unavailable());
    let err = roster::save_availability(&store, 42, &editor).await.unwrap_err();
    assert!(matches!(err, Error::Roster(_)));
}

#[tokio::test]
async fn test_add_employee_and_requests() {
    let store = InMemoryRoster::from_toml(ROSTER).unwrap();

    let employee = roster::add_employee(
        &store,
        NewEmployee {
            name: "Jane Doe".to_string(),
            phone: "(555) 000-1111".to_string(),
            email: "jane.doe@email.com".to_string(),
            status: EmploymentStatus::FullTime,
            role: Role::Host,
        },
    )
    .await
    .unwrap();
    assert_eq!(employee.id, 4);
    assert_eq!(employee.availability.available_days(), 0);

    let request = roster::add_request(
        &store,
        4,
        NewRequest {
            start_date: "2024-12-24".to_string(),
            end_date: "2024-12-26".to_string(),
            reason: "Holiday travel with family".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(request.date, "Dec 24 - Dec 26");

    roster::set_request_status(&store, 4, 0, RequestStatus::Approved)
        .await
        .unwrap();
    let stored = store.get_employee(4).await.unwrap().unwrap();
    assert_eq!(stored.requests[0].status, RequestStatus::Approved);
    assert_eq!(stored.pending_requests().count(), 0);

    assert!(roster::set_request_status(&store, 4, 5, RequestStatus::Denied)
        .await
        .is_err());

    assert!(store.remove_employee(4).await.unwrap());
    assert!(!store.remove_employee(4).await.unwrap());
}

#[tokio::test]
async fn test_add_employee_rejects_invalid_form() {
    let store = InMemoryRoster::new();
    let err = roster::add_employee(
        &store,
        NewEmployee {
            name: "J".to_string(),
            phone: "(555) 000-1111".to_string(),
            email: "jane.doe@email.com".to_string(),
            status: EmploymentStatus::PartTime,
            role: Role::Server,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(store.list_employees().await.unwrap().is_empty());
}
