use escape_core::{FormEdit, ReservationController, UserAlert, Venue};
use escape_web::components::alert_card::{AlertCard, Props as AlertCardProps};
use escape_web::components::footer::Footer;
use escape_web::components::header::{Header, Props as HeaderProps};
use escape_web::components::reservation_form::{Props as FormProps, ReservationForm};
use escape_web::router::Route;
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn alert(json: &str) -> UserAlert {
    serde_json::from_str(json).unwrap()
}

fn render_form(controller: ReservationController) -> String {
    let props = FormProps {
        controller,
        on_edit: Callback::noop(),
        on_submit: Callback::noop(),
        min_date: Some("2025-01-01".into()),
    };
    block_on(LocalServerRenderer::<ReservationForm>::with_props(props).render())
}

#[test]
fn header_lists_navigation_and_languages() {
    escape_web::i18n::set_lang("en");
    let props = HeaderProps {
        current: Some(Route::Alerts),
        on_navigate: Callback::noop(),
        on_lang_change: Callback::noop(),
        current_lang: "en".to_string(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Escape Room Alerts"));
    assert!(html.contains("href=\"/users/alerts\""));
    assert!(html.contains("href=\"/reservations/earth-escape\""));
    assert!(html.contains("한국어"));
}

#[test]
fn footer_renders_copy() {
    escape_web::i18n::set_lang("ko");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("방탈출 예약 알림"));
}

#[test]
fn alert_card_shows_status_period_and_trimmed_times() {
    escape_web::i18n::set_lang("ko");
    let props = AlertCardProps {
        alert: alert(
            r#"{
                "alertId": 3,
                "isActive": true,
                "theme": {"themeId": 58, "themeName": "NOX", "cafeName": "제로월드", "branchName": "홍대점"},
                "dateStart": "2025-01-01",
                "dateEnd": "2025-01-31",
                "preferredTimes": ["18:00", " 19:00"],
                "numPeople": 4,
                "notifiedCount": 2,
                "lastNotifiedAt": "2025-01-05T09:30:00"
            }"#,
        ),
    };
    let html = block_on(LocalServerRenderer::<AlertCard>::with_props(props).render());
    assert!(html.contains("status-badge active"));
    assert!(html.contains("활성"));
    assert!(html.contains("NOX"));
    assert!(html.contains("제로월드 홍대점"));
    assert!(html.contains("2025-01-01 ~ 2025-01-31"));
    assert!(html.contains("18:00, 19:00"));
    assert!(html.contains("4명"));
    assert!(html.contains("2회"));
    assert!(html.contains("2025-01-05 09:30"));
    assert!(html.contains("상세보기"));
    assert!(html.contains("삭제"));
}

#[test]
fn alert_card_skips_empty_optional_rows() {
    escape_web::i18n::set_lang("en");
    let props = AlertCardProps {
        alert: alert(
            r#"{
                "alertId": 4,
                "isActive": false,
                "theme": {"themeId": 23, "themeName": "Echo", "cafeName": "Earth", "branchName": "Daegu"},
                "dateStart": "2025-02-01",
                "dateEnd": "2025-02-02",
                "preferredTimes": [],
                "numPeople": 2
            }"#,
        ),
    };
    let html = block_on(LocalServerRenderer::<AlertCard>::with_props(props).render());
    assert!(html.contains("status-badge inactive"));
    assert!(html.contains("Inactive"));
    assert!(html.contains("2 people"));
    assert!(!html.contains("Preferred times"));
    assert!(!html.contains("Last notified"));
    assert!(!html.contains("Notifications sent"));
}

#[test]
fn alert_card_without_party_size_shows_placeholder() {
    escape_web::i18n::set_lang("ko");
    let props = AlertCardProps {
        alert: alert(
            r#"{
                "alertId": 5,
                "isActive": true,
                "theme": {"themeId": 51, "themeName": "ALIVE", "cafeName": "제로월드", "branchName": "강남점"},
                "dateStart": "2025-03-01",
                "dateEnd": "2025-03-09",
                "numPeople": null
            }"#,
        ),
    };
    let html = block_on(LocalServerRenderer::<AlertCard>::with_props(props).render());
    assert!(html.contains("ALIVE"));
    assert!(html.contains("미정"));
    assert!(!html.contains("{count}"));
}

#[test]
fn zero_world_form_disables_theme_until_date_and_time() {
    escape_web::i18n::set_lang("ko");
    let html = render_form(ReservationController::new(Venue::ZeroWorld));
    assert!(html.contains("날짜와 시간을 먼저 선택해주세요"));
    assert!(!html.contains("id=\"branch\""));
    assert!(html.contains("현장 결제"));
    assert!(html.contains("min=\"2025-01-01\""));
    assert!(html.contains("예약해 주신 시간은 입장시간입니다."));

    let mut controller = ReservationController::new(Venue::ZeroWorld);
    controller.edit(FormEdit::Date("2025-01-11".into()));
    controller.edit(FormEdit::Time("14:00:00".into()));
    let html = render_form(controller);
    assert!(html.contains("(주말)"));
    assert!(html.contains("value=\"52\""));
    assert!(!html.contains("value=\"58\""));
    assert!(!html.contains("날짜와 시간을 먼저 선택해주세요"));
}

#[test]
fn earth_escape_form_lists_branch_themes() {
    escape_web::i18n::set_lang("ko");
    let html = render_form(ReservationController::new(Venue::EarthEscape));
    assert!(html.contains("id=\"branch\""));
    assert!(html.contains("홍대어드벤처점"));
    assert!(html.contains("PINOCCHIO(피노키오)"));
    assert!(!html.contains("잉카"));
    assert!(html.contains("가상계좌"));
    assert!(html.contains("연무(포그)가 많은 구간이 있으니 예약시 참고 바랍니다."));
    assert!(html.contains("예약하기"));
}

#[test]
fn form_shows_validation_message_and_submitting_state() {
    escape_web::i18n::set_lang("ko");
    let mut controller = ReservationController::new(Venue::EarthEscape);
    assert!(controller.begin_submit(None).is_err());
    let html = render_form(controller);
    assert!(html.contains("message error"));
    assert!(html.contains("개인정보 처리방침에 동의해주세요."));

    let mut controller = ReservationController::new(Venue::EarthEscape);
    for edit in [
        FormEdit::Theme("23".into()),
        FormEdit::Date("2025-01-06".into()),
        FormEdit::Time("19:00".into()),
        FormEdit::Name("홍길동".into()),
        FormEdit::Phone("01022223333".into()),
        FormEdit::Policy(true),
    ] {
        controller.edit(edit);
    }
    controller.begin_submit(None).unwrap();
    let html = render_form(controller);
    assert!(html.contains("예약 중..."));
    assert!(html.contains("010-2222-3333"));
}
