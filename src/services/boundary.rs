use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// UTC instant of local midnight for the calendar day `now` falls on in its
/// own zone.
///
/// The wall-clock midnight is resolved through the zone rather than shifted
/// by `now`'s offset, so a day that starts on a different offset than it is
/// currently on (DST) still gets the right instant. If midnight is repeated
/// the earlier instant wins; if it is skipped, the first minute of the day
/// that exists is used.
pub fn day_boundary<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let zone = now.timezone();
    let date = now.date_naive();

    start_of_day(&zone, date).unwrap_or_else(|| {
        let midnight = midnight_of(date);
        let offset = now.offset().fix().local_minus_utc();
        Utc.from_utc_datetime(&(midnight - Duration::seconds(offset.into())))
    })
}

/// [`day_boundary`] for the machine's local zone and current time.
pub fn today_boundary() -> DateTime<Utc> {
    day_boundary(&Local::now())
}

/// First existing instant of `date` in `zone`, scanning forward a minute at a
/// time past any gap.
pub fn start_of_day<Tz: TimeZone>(zone: &Tz, date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = midnight_of(date);

    (0..24 * 60)
        .map(|minute| midnight + Duration::minutes(minute))
        .find_map(|wall| resolve_local(zone.from_local_datetime(&wall)))
}

/// Collapses a local-time lookup to one UTC instant, preferring the earliest.
pub fn resolve_local<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    result.earliest().map(|dt| dt.with_timezone(&Utc))
}

fn midnight_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
