use chrono::NaiveDate;
use escape_core::{
    ApiClient, ApiError, FormEdit, ReservationController, SubmitOutcome, Transport, UserAlert,
    Venue, format_phone_number, time_label,
};
use serde_json::{Value, json};

use crate::report::ProbeReport;

/// Reservation fields given on the command line, applied as form edits.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FormInput {
    /// Branch id (venues with branches only)
    #[arg(long)]
    pub branch: Option<String>,
    /// Theme id
    #[arg(long)]
    pub theme: Option<String>,
    /// Reservation date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Time slot exactly as the venue lists it
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number, digits or already formatted
    #[arg(long)]
    pub phone: Option<String>,
    /// Party size
    #[arg(long)]
    pub people: Option<u8>,
    /// Consent to the privacy policy and venue notices
    #[arg(long)]
    pub agree_policy: bool,
}

impl FormInput {
    /// Build a controller the way a user would fill the form.
    ///
    /// Selection fields go first so the theme is chosen against the final
    /// branch, date and time.
    pub fn controller(&self, venue: Venue) -> ReservationController {
        let mut controller = ReservationController::new(venue);
        let edits = [
            self.branch.clone().map(FormEdit::Branch),
            self.date.clone().map(FormEdit::Date),
            self.time.clone().map(FormEdit::Time),
            self.theme.clone().map(FormEdit::Theme),
            self.name.clone().map(FormEdit::Name),
            self.phone.clone().map(FormEdit::Phone),
            self.people.map(FormEdit::People),
            Some(FormEdit::Policy(self.agree_policy)),
        ];
        for edit in edits.into_iter().flatten() {
            controller.edit(edit);
        }
        controller
    }
}

pub fn phone(raw: &str) -> ProbeReport {
    let formatted = format_phone_number(raw);
    ProbeReport::pass(
        "phone",
        formatted.clone(),
        json!({ "input": raw, "formatted": formatted }),
    )
}

pub fn themes(venue: Venue, input: &FormInput) -> ProbeReport {
    let controller = input.controller(venue);
    let descriptor = controller.descriptor();
    let choices = controller.theme_choices();
    let data = json!({
        "venue": venue.slug(),
        "branches": descriptor.branches,
        "timeSlots": descriptor.time_slots,
        "choices": choices,
    });

    if !choices.enabled || choices.options.is_empty() {
        let missing = if descriptor.requires_branch() {
            "pick a branch"
        } else {
            "pick a date and time"
        };
        return ProbeReport::fail("themes", format!("no themes offered yet, {missing}"), data);
    }

    let mut summary = format!("{} themes for {}", choices.options.len(), venue.slug());
    if let Some(kind) = choices.day_kind {
        summary.push_str(&format!(" ({kind:?})"));
    }
    let details = choices
        .options
        .iter()
        .map(|o| format!("{:>3}  {}", o.id, o.name))
        .collect();
    ProbeReport::pass("themes", summary, data).with_details(details)
}

pub async fn alerts<T: Transport>(client: &ApiClient<T>, user_id: Option<u64>) -> ProbeReport {
    match client.fetch_alerts(user_id).await {
        Ok(alerts) => {
            let details = alerts.iter().map(alert_line).collect();
            let summary = format!("{} alerts", alerts.len());
            ProbeReport::pass("alerts", summary, json!(alerts)).with_details(details)
        }
        Err(err) => ProbeReport::fail("alerts", err.to_string(), error_data(&err)),
    }
}

fn alert_line(a: &UserAlert) -> String {
    let status = if a.is_active { "active" } else { "paused" };
    let people = a.num_people.map_or_else(|| "?".to_string(), |n| n.to_string());
    let mut line = format!(
        "#{} [{status}] {} - {} - {} - {people} people",
        a.alert_id,
        a.theme.theme_name,
        a.venue_label(),
        a.period_label()
    );
    if let Some(times) = a.preferred_times_label() {
        line.push_str(&format!(" @ {times}"));
    }
    line
}

/// Validate, send one booking and report how it ended.
pub async fn reserve<T: Transport>(
    client: &ApiClient<T>,
    mut controller: ReservationController,
    today: Option<NaiveDate>,
) -> ProbeReport {
    let request = match controller.begin_submit(today) {
        Ok(request) => request,
        Err(err) => {
            return ProbeReport::fail(
                "reserve",
                format!("validation failed: {err}"),
                json!({ "error": err.message_key() }),
            );
        }
    };
    let form = controller.form().clone();
    let request_json = serde_json::to_value(&request).unwrap_or(Value::Null);
    let outcome = controller.finish_submit(client.submit_reservation(&request).await);

    let details = vec![
        format!("endpoint: {}", request.endpoint()),
        format!("date: {} {}", form.date, time_label(&form.time)),
        format!("name: {} ({})", form.name, form.phone),
    ];
    match outcome {
        SubmitOutcome::Confirmed(response) => {
            let id = response.reservation_id.as_deref().unwrap_or("-");
            ProbeReport::pass(
                "reserve",
                format!("reservation confirmed: {id}"),
                json!({ "request": request_json, "response": response }),
            )
            .with_details(details)
        }
        SubmitOutcome::Rejected(response) => ProbeReport::fail(
            "reserve",
            format!("reservation rejected: {}", response.message),
            json!({ "request": request_json, "response": response }),
        )
        .with_details(details),
        SubmitOutcome::Failed(err) => {
            let mut data = error_data(&err);
            data["request"] = request_json;
            ProbeReport::fail("reserve", err.to_string(), data).with_details(details)
        }
    }
}

fn error_data(err: &ApiError) -> Value {
    json!({
        "error": err.to_string(),
        "kind": format!("{:?}", err.kind()),
        "serverMessage": err.server_message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_core::{ApiConfig, ScriptedTransport};

    fn client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::new(ApiConfig::new("http://api.test").unwrap(), transport)
    }

    fn earth_escape_input() -> FormInput {
        FormInput {
            branch: Some("1".into()),
            theme: Some("20".into()),
            date: Some("2099-03-02".into()),
            time: Some("13:00".into()),
            name: Some("김철수".into()),
            phone: Some("01033334444".into()),
            people: Some(3),
            agree_policy: true,
        }
    }

    #[test]
    fn controller_applies_theme_after_selection_fields() {
        let controller = earth_escape_input().controller(Venue::EarthEscape);
        assert_eq!(controller.form().branch, "1");
        assert_eq!(controller.form().theme, "20");
        assert_eq!(controller.form().phone, "010-3333-4444");
        assert_eq!(controller.form().people, 3);
    }

    #[test]
    fn themes_without_date_fail_for_zero_world() {
        let report = themes(Venue::ZeroWorld, &FormInput::default());
        assert!(!report.passed);
        assert!(report.summary.contains("date and time"));
    }

    #[tokio::test]
    async fn alerts_without_party_size_still_list() {
        let api = client(ScriptedTransport::new().with_reply(
            200,
            r#"{"success":true,"data":[{"alertId":5,"isActive":true,
                "theme":{"themeId":58,"themeName":"NOX","cafeName":"제로월드","branchName":"강남점"},
                "dateStart":"2025-02-01","dateEnd":"2025-02-03","numPeople":null}]}"#,
        ));
        let report = alerts(&api, None).await;
        assert!(report.passed);
        assert_eq!(
            report.details,
            ["#5 [active] NOX - 제로월드 강남점 - 2025-02-01 ~ 2025-02-03 - ? people"]
        );
    }

    #[tokio::test]
    async fn reserve_reports_rejection_message() {
        let api = client(
            ScriptedTransport::new().with_reply(200, r#"{"success":false,"message":"마감"}"#),
        );
        let controller = earth_escape_input().controller(Venue::EarthEscape);
        let report = reserve(&api, controller, None).await;
        assert!(!report.passed);
        assert_eq!(report.summary, "reservation rejected: 마감");
        assert_eq!(report.data["request"]["people"], "3");
    }

    #[tokio::test]
    async fn reserve_validation_sends_nothing() {
        let api = client(ScriptedTransport::new());
        let mut input = earth_escape_input();
        input.agree_policy = false;
        let report = reserve(&api, input.controller(Venue::EarthEscape), None).await;
        assert!(!report.passed);
        assert_eq!(report.data["error"], "reservation.errors.consent");
        assert!(api.transport().requests().is_empty());
    }
}
