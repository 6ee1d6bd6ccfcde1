use chrono::{Duration, NaiveDate};
use rota_duty::DutyMode;
use rota_shift::{Schedule, ShiftError, Timeline, Timestamp, UniformTimeline, Workshift, WorkshiftRef};

fn epoch() -> Timestamp {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A week of daily shifts: weekdays on duty, the weekend off.
fn week() -> Schedule<char> {
    let labels = vec!['M', 'T', 'W', 'T', 'F', 's', 's'];
    Schedule::new("workweek", labels, |label| label.is_uppercase())
}

fn daily() -> UniformTimeline {
    UniformTimeline::new(epoch(), Duration::hours(24), 1, 7).unwrap()
}

#[test]
fn workshift_delegates_time_queries() {
    let schedule = week();
    let timeline = daily();
    let wednesday = Workshift::new(&schedule, 2).unwrap();

    assert_eq!(
        wednesday.start_time(&timeline).unwrap(),
        epoch() + Duration::days(2)
    );
    assert_eq!(
        wednesday.end_time(&timeline).unwrap(),
        epoch() + Duration::days(3)
    );
    assert_eq!(wednesday.duration(&timeline).unwrap(), 1);
    assert_eq!(
        wednesday.ref_time(&timeline).unwrap(),
        wednesday.start_time(&timeline).unwrap()
    );
}

#[test]
fn ref_time_follows_the_timeline_setting() {
    let schedule = week();
    let timeline = daily().with_ref(WorkshiftRef::End);
    let monday = Workshift::new(&schedule, 0).unwrap();
    assert_eq!(
        monday.ref_time(&timeline).unwrap(),
        monday.end_time(&timeline).unwrap()
    );
}

#[test]
fn navigation_then_time_lookup() {
    let schedule = week();
    let timeline = daily();
    let saturday = Workshift::new(&schedule, 5).unwrap();

    // The last on-duty shift before the weekend is Friday.
    let friday = saturday.rollback(0, DutyMode::On).unwrap();
    assert_eq!(friday.position(), 4);
    assert_eq!(
        friday.start_time(&timeline).unwrap(),
        epoch() + Duration::days(4)
    );
}

#[test]
fn timeline_shorter_than_schedule() {
    let schedule = week();
    let short = UniformTimeline::new(epoch(), Duration::hours(24), 1, 5).unwrap();
    let sunday = Workshift::new(&schedule, 6).unwrap();
    let err = sunday.start_time(&short).unwrap_err();
    assert_eq!(err, ShiftError::OutOfRange { position: 6, len: 5 });
}

#[test]
fn shifts_tile_without_gaps() {
    let timeline = daily();
    for position in 0..timeline.len() - 1 {
        assert_eq!(
            timeline.end_time(position).unwrap(),
            timeline.start_time(position + 1).unwrap()
        );
    }
}
