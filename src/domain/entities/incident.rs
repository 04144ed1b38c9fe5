use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentKind {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IncidentKind,
    pub title: String,
    pub location: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub time: String,
    pub severity: Severity,
}

impl Incident {
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.reported_at
    }
}

/// Renders an age the way alert feeds do: "30 minutes ago", "1 hour ago".
pub fn humanize_age(age: Duration) -> String {
    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    }

    if age < Duration::minutes(1) {
        "just now".to_string()
    } else if age < Duration::hours(1) {
        plural(age.num_minutes(), "minute")
    } else if age < Duration::days(1) {
        plural(age.num_hours(), "hour")
    } else {
        plural(age.num_days(), "day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_age() {
        assert_eq!(humanize_age(Duration::seconds(20)), "just now");
        assert_eq!(humanize_age(Duration::minutes(1)), "1 minute ago");
        assert_eq!(humanize_age(Duration::minutes(30)), "30 minutes ago");
        assert_eq!(humanize_age(Duration::hours(1)), "1 hour ago");
        assert_eq!(humanize_age(Duration::minutes(150)), "2 hours ago");
        assert_eq!(humanize_age(Duration::days(3)), "3 days ago");
    }

    #[test]
    fn test_severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
