use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

use crate::domain::{humanize_age, DomainError, Incident, IncidentKind, Severity};

/// A canned alert raised when the location mentions any of `keywords`.
/// An empty keyword list matches every location.
struct AlertRule {
    id: &'static str,
    keywords: &'static [&'static str],
    kind: IncidentKind,
    title: &'static str,
    description: &'static str,
    age_minutes: i64,
    severity: Severity,
}

const RULES: &[AlertRule] = &[
    AlertRule {
        id: "1",
        keywords: &[],
        kind: IncidentKind::Warning,
        title: "Weather Advisory",
        description: "Monitor local weather conditions. Check forecast before traveling.",
        age_minutes: 120,
        severity: Severity::Medium,
    },
    AlertRule {
        id: "2",
        keywords: &["manali", "himachal"],
        kind: IncidentKind::Danger,
        title: "Landslide Risk",
        description: "Heavy rainfall may cause landslides in hilly areas. Drive with caution.",
        age_minutes: 60,
        severity: Severity::High,
    },
    AlertRule {
        id: "3",
        keywords: &["mumbai", "delhi"],
        kind: IncidentKind::Info,
        title: "Traffic Update",
        description: "Expect heavy traffic during peak hours. Plan accordingly.",
        age_minutes: 30,
        severity: Severity::Low,
    },
];

/// Safety alerts for a named location. There is no live feed behind this;
/// alerts come from a fixed rule table.
#[derive(Debug, Default)]
pub struct IncidentService;

impl IncidentService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub fn incidents(&self, location: &str) -> Result<Vec<Incident>, DomainError> {
        self.incidents_at(location, Utc::now())
    }

    pub fn incidents_at(
        &self,
        location: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Incident>, DomainError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(DomainError::validation("location is required"));
        }

        let lowered = location.to_lowercase();
        Ok(RULES
            .iter()
            .filter(|rule| rule.keywords.is_empty() || rule.keywords.iter().any(|k| lowered.contains(*k)))
            .map(|rule| {
                let age = Duration::minutes(rule.age_minutes);
                Incident {
                    id: rule.id.to_string(),
                    kind: rule.kind,
                    title: rule.title.to_string(),
                    location: location.to_string(),
                    description: rule.description.to_string(),
                    reported_at: now - age,
                    time: humanize_age(age),
                    severity: rule.severity,
                }
            })
            .collect())
    }
}
