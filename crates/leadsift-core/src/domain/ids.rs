use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifies one processing run and the archive it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(pub Uuid);

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn archive_file_name(&self) -> String {
        format!("processed_leads_{}.zip", self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::JobId;
    use uuid::Uuid;

    #[test]
    fn archive_file_name_embeds_id() {
        let uuid = Uuid::parse_str("0b6f2c1e-3f7a-4d2b-9a51-2a9c8e4f1d00").expect("parse uuid");
        assert_eq!(
            JobId(uuid).archive_file_name(),
            "processed_leads_0b6f2c1e-3f7a-4d2b-9a51-2a9c8e4f1d00.zip"
        );
    }

    #[test]
    fn display_is_hyphenated_uuid() {
        let id = JobId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
        assert_eq!(id.archive_file_name(), format!("processed_leads_{text}.zip"));
    }

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(JobId::new(), JobId::new());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = JobId::new();
        let json = serde_json::to_value(id).expect("serialize id");
        assert_eq!(json, id.to_string());
    }
}
