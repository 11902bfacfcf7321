use ks_dao::project::ProjectStatus;
use serde::Serialize;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Gray,
    Yellow,
    Green,
    Red,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusBadge {
    label: &'static str,
    tone: BadgeTone,
}

impl StatusBadge {
    pub fn of(status: &ProjectStatus) -> Self {
        let (label, tone) = match status {
            ProjectStatus::Draft => ("Draft", BadgeTone::Gray),
            ProjectStatus::Pending => ("Pending", BadgeTone::Yellow),
            ProjectStatus::Approved => ("Approved", BadgeTone::Green),
            ProjectStatus::Rejected => ("Rejected", BadgeTone::Red),
        };
        Self { label, tone }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn tone(&self) -> &BadgeTone {
        &self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_per_status() {
        let cases = [
            (ProjectStatus::Draft, "Draft", BadgeTone::Gray),
            (ProjectStatus::Pending, "Pending", BadgeTone::Yellow),
            (ProjectStatus::Approved, "Approved", BadgeTone::Green),
            (ProjectStatus::Rejected, "Rejected", BadgeTone::Red),
        ];
        for (status, label, tone) in cases {
            let badge = StatusBadge::of(&status);
            assert_eq!(badge.label(), label);
            assert_eq!(badge.tone(), &tone);
        }
    }

    #[test]
    fn serializes_tone_lowercase() {
        let json = serde_json::to_value(StatusBadge::of(&ProjectStatus::Pending)).unwrap();

        assert_eq!(json, serde_json::json!({ "label": "Pending", "tone": "yellow" }));
    }
}
