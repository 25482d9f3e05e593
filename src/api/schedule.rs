//! Schedule Endpoint
//!
//! `PUT /schedule` with `{frequency, hour, minute}`.

use serde_json::json;

use super::{decode_ack, ApiClient, ApiError, ApiRequest};
use crate::models::{two_digits, Frequency, Schedule};

/// Raw selector values as shown in the schedule editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub frequency: String,
    pub hour: String,
    pub minute: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily.as_str().to_string(),
            hour: two_digits(0),
            minute: two_digits(0),
        }
    }
}

impl From<&Schedule> for ScheduleForm {
    fn from(schedule: &Schedule) -> Self {
        Self {
            frequency: schedule.frequency.as_str().to_string(),
            hour: two_digits(schedule.hour),
            minute: two_digits(schedule.minute),
        }
    }
}

impl ScheduleForm {
    pub fn to_schedule(&self) -> Result<Schedule, String> {
        let frequency = Frequency::parse(&self.frequency)
            .ok_or_else(|| format!("Unknown frequency: {}", self.frequency))?;
        let hour = parse_bounded(&self.hour, 23, "hour")?;
        let minute = parse_bounded(&self.minute, 59, "minute")?;
        Ok(Schedule { frequency, hour, minute })
    }
}

/// Form to pre-set from `initial`, only until the first schedule arrives
///
/// Later re-fetches must not overwrite selections the user is editing.
pub fn preset_form(already_seeded: bool, initial: Option<&Schedule>) -> Option<ScheduleForm> {
    if already_seeded {
        return None;
    }
    initial.map(ScheduleForm::from)
}

fn parse_bounded(value: &str, max: u8, name: &str) -> Result<u8, String> {
    match value.trim().parse::<u8>() {
        Ok(v) if v <= max => Ok(v),
        _ => Err(format!("Invalid {}: {} (expected 0-{})", name, value, max)),
    }
}

pub fn schedule_request(schedule: &Schedule) -> ApiRequest {
    ApiRequest::put(
        "/schedule",
        json!({
            "frequency": schedule.frequency.as_str(),
            "hour": schedule.hour,
            "minute": schedule.minute,
        }),
    )
}

pub async fn update_schedule(client: &ApiClient, schedule: &Schedule) -> Result<(), ApiError> {
    let body = client.execute(&schedule_request(schedule)).await?;
    decode_ack(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_request_sends_integers() {
        let form = ScheduleForm { frequency: "weekly".into(), hour: "07".into(), minute: "05".into() };
        let schedule = form.to_schedule().unwrap();
        let req = schedule_request(&schedule);
        assert_eq!(req.path, "/schedule");
        assert_eq!(req.body, Some(json!({"frequency": "weekly", "hour": 7, "minute": 5})));
    }

    #[test]
    fn test_form_rejects_out_of_range() {
        let form = ScheduleForm { frequency: "daily".into(), hour: "24".into(), minute: "00".into() };
        assert!(form.to_schedule().is_err());
        let form = ScheduleForm { frequency: "monthly".into(), ..ScheduleForm::default() };
        assert!(form.to_schedule().is_err());
    }

    #[test]
    fn test_preset_only_first_schedule() {
        let first = Schedule { frequency: Frequency::Weekly, hour: 6, minute: 30 };
        let refetched = Schedule { frequency: Frequency::Daily, hour: 0, minute: 0 };

        assert_eq!(preset_form(false, None), None);
        assert_eq!(preset_form(false, Some(&first)), Some(ScheduleForm::from(&first)));
        assert_eq!(preset_form(true, Some(&refetched)), None);
    }

    #[test]
    fn test_form_from_schedule_pads() {
        let form = ScheduleForm::from(&Schedule { frequency: Frequency::Daily, hour: 9, minute: 0 });
        assert_eq!(form, ScheduleForm { frequency: "daily".into(), hour: "09".into(), minute: "00".into() });
    }
}
