use super::{DayKind, ReservationRequest, ThemeChoices, ThemeOption, Venue, VenueDescriptor};
use crate::form::ReservationForm;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::Serialize;

/// Hour on Friday from which weekend pricing applies.
const FRIDAY_WEEKEND_HOUR: u32 = 17;

const PAY_ON_SITE: &str = "1";

pub const WEEKDAY_THEMES: &[ThemeOption] = &[
    ThemeOption { id: "51", name: "ALIVE" },
    ThemeOption { id: "54", name: "사랑하는감" },
    ThemeOption { id: "56", name: "깜방탈출" },
    ThemeOption { id: "58", name: "NOX" },
    ThemeOption { id: "50", name: "층간소음" },
];

pub const WEEKEND_THEMES: &[ThemeOption] = &[
    ThemeOption { id: "52", name: "ALIVE" },
    ThemeOption { id: "55", name: "사랑하는감" },
    ThemeOption { id: "57", name: "깜방탈출" },
    ThemeOption { id: "59", name: "NOX" },
    ThemeOption { id: "51", name: "층간소음" },
];

const TIME_SLOTS: &[&str] = &[
    "11:00:00", "12:30:00", "14:00:00", "15:30:00", "17:00:00", "18:30:00", "20:00:00",
    "21:30:00",
];

const NOTICE_KEYS: &[&str] = &[
    "venue.zero_world.notices.1",
    "venue.zero_world.notices.2",
    "venue.zero_world.notices.3",
    "venue.zero_world.notices.4",
    "venue.zero_world.notices.5",
];

pub(super) static DESCRIPTOR: VenueDescriptor = VenueDescriptor {
    venue: Venue::ZeroWorld,
    title_key: "venue.zero_world.title",
    endpoint: "/api/reservations/zero-world",
    branches: &[],
    time_slots: TIME_SLOTS,
    payment_key: "venue.zero_world.payment",
    notice_keys: NOTICE_KEYS,
    defaults,
    themes,
    request,
};

/// Booking body for `POST /api/reservations/zero-world`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroWorldRequest {
    pub theme_id: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub name: String,
    pub phone: String,
    pub people: u8,
    pub payment_type: String,
    pub policy: bool,
}

fn defaults() -> ReservationForm {
    ReservationForm {
        payment: PAY_ON_SITE.to_string(),
        ..ReservationForm::default()
    }
}

fn themes(form: &ReservationForm) -> ThemeChoices {
    let kind = day_kind(&form.date, &form.time);
    let table = if kind == Some(DayKind::Weekend) {
        WEEKEND_THEMES
    } else {
        WEEKDAY_THEMES
    };
    ThemeChoices {
        options: table.to_vec(),
        enabled: kind.is_some(),
        day_kind: kind,
    }
}

fn request(form: &ReservationForm) -> ReservationRequest {
    ReservationRequest::ZeroWorld(ZeroWorldRequest {
        theme_id: form.theme.clone(),
        reservation_date: form.date.clone(),
        reservation_time: form.time.clone(),
        name: form.name.trim().to_string(),
        phone: form.phone.clone(),
        people: form.people,
        payment_type: form.payment.clone(),
        policy: form.policy,
    })
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Weekday/weekend classification once both date and time are set.
///
/// Returns `None` while either value is missing or unparsable.
#[must_use]
pub fn day_kind(date: &str, time: &str) -> Option<DayKind> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let at = parse_time(time.trim())?;
    let weekend = match day.weekday() {
        Weekday::Sat | Weekday::Sun => true,
        Weekday::Fri => at.hour() >= FRIDAY_WEEKEND_HOUR,
        _ => false,
    };
    Some(if weekend {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    })
}

/// Saturday, Sunday, or Friday from 17:00. Unset or invalid input is a weekday.
#[must_use]
pub fn is_weekend(date: &str, time: &str) -> bool {
    day_kind(date, time) == Some(DayKind::Weekend)
}
