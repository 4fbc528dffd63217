use super::{Branch, ReservationRequest, ThemeChoices, ThemeOption, Venue, VenueDescriptor};
use crate::form::ReservationForm;
use serde::Serialize;

const DEFAULT_BRANCH: &str = "2";
const PAY_BY_VIRTUAL_ACCOUNT: &str = "21";

pub const EARTH_ESCAPE_BRANCHES: &[Branch] = &[
    Branch { id: "1", name: "대구점" },
    Branch { id: "2", name: "홍대어드벤처점" },
    Branch { id: "4", name: "홍대라스트시티점" },
];

/// Row of the static theme table, keyed by branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EarthEscapeTheme {
    pub branch: &'static str,
    pub option: ThemeOption,
}

const fn row(branch: &'static str, id: &'static str, name: &'static str) -> EarthEscapeTheme {
    EarthEscapeTheme {
        branch,
        option: ThemeOption { id, name },
    }
}

pub const EARTH_ESCAPE_THEMES: &[EarthEscapeTheme] = &[
    row("1", "20", "잉카"),
    row("1", "11", "우리 아빠"),
    row("1", "6", "사명 : 투쟁의 노래"),
    row("1", "5", "펭귄키우기"),
    row("1", "3", "너의 겨울은 가고, 봄은 온다"),
    row("1", "2", "만월 <<꿈을 훔치는 요괴>>"),
    row("1", "1", "단디해라"),
    row("2", "25", "PINOCCHIO(피노키오)"),
    row("2", "23", "잔향"),
    row("2", "18", "아몬 : 새벽을 여는 소년"),
    row("2", "17", "퀘스트 : 여정의 시작"),
    row("2", "9", "지난날을 잊었다"),
    row("2", "8", "미스터리"),
];

const TIME_SLOTS: &[&str] = &[
    "10:00", "11:30", "13:00", "14:30", "16:00", "17:30", "19:00", "20:30", "22:00",
];

const NOTICE_KEYS: &[&str] = &[
    "venue.earth_escape.notices.1",
    "venue.earth_escape.notices.2",
    "venue.earth_escape.notices.3",
    "venue.earth_escape.notices.4",
    "venue.earth_escape.notices.5",
    "venue.earth_escape.notices.6",
    "venue.earth_escape.notices.7",
    "venue.earth_escape.notices.8",
    "venue.earth_escape.notices.9",
    "venue.earth_escape.notices.10",
    "venue.earth_escape.notices.11",
    "venue.earth_escape.notices.12",
    "venue.earth_escape.notices.13",
];

pub(super) static DESCRIPTOR: VenueDescriptor = VenueDescriptor {
    venue: Venue::EarthEscape,
    title_key: "venue.earth_escape.title",
    endpoint: "/api/reservations/earth-escape",
    branches: EARTH_ESCAPE_BRANCHES,
    time_slots: TIME_SLOTS,
    payment_key: "venue.earth_escape.payment",
    notice_keys: NOTICE_KEYS,
    defaults,
    themes,
    request,
};

/// Booking body for `POST /api/reservations/earth-escape`.
///
/// The endpoint takes the party size as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthEscapeRequest {
    pub branch: String,
    pub theme: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub people: String,
    pub payment_method: String,
    pub policy: bool,
}

fn defaults() -> ReservationForm {
    ReservationForm {
        branch: DEFAULT_BRANCH.to_string(),
        payment: PAY_BY_VIRTUAL_ACCOUNT.to_string(),
        ..ReservationForm::default()
    }
}

fn themes(form: &ReservationForm) -> ThemeChoices {
    ThemeChoices {
        options: EARTH_ESCAPE_THEMES
            .iter()
            .filter(|t| t.branch == form.branch)
            .map(|t| t.option)
            .collect(),
        enabled: true,
        day_kind: None,
    }
}

fn request(form: &ReservationForm) -> ReservationRequest {
    ReservationRequest::EarthEscape(EarthEscapeRequest {
        branch: form.branch.clone(),
        theme: form.theme.clone(),
        date: form.date.clone(),
        time: form.time.clone(),
        name: form.name.trim().to_string(),
        phone: form.phone.clone(),
        people: form.people.to_string(),
        payment_method: form.payment.clone(),
        policy: form.policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_match_the_selected_branch_rows() {
        for branch in EARTH_ESCAPE_BRANCHES {
            let form = ReservationForm {
                branch: branch.id.to_string(),
                ..defaults()
            };
            let expected: Vec<ThemeOption> = EARTH_ESCAPE_THEMES
                .iter()
                .filter(|t| t.branch == branch.id)
                .map(|t| t.option)
                .collect();
            assert_eq!(themes(&form).options, expected);
        }
    }

    #[test]
    fn default_branch_offers_hongdae_adventure_themes() {
        let choices = themes(&defaults());
        assert!(choices.enabled);
        assert_eq!(choices.options.len(), 6);
        assert!(choices.find("25").is_some());
        assert!(choices.find("20").is_none());
    }

    #[test]
    fn branch_without_rows_offers_nothing() {
        let form = ReservationForm {
            branch: "4".into(),
            ..defaults()
        };
        assert!(themes(&form).options.is_empty());
    }

    #[test]
    fn request_sends_people_as_string() {
        let form = ReservationForm {
            theme: "23".into(),
            date: "2025-01-06".into(),
            time: "19:00".into(),
            name: "홍길동".into(),
            phone: "010-1234-5678".into(),
            people: 3,
            policy: true,
            ..defaults()
        };
        let body = serde_json::to_value(request(&form)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "branch": "2",
                "theme": "23",
                "date": "2025-01-06",
                "time": "19:00",
                "name": "홍길동",
                "phone": "010-1234-5678",
                "people": "3",
                "paymentMethod": "21",
                "policy": true
            })
        );
    }
}
