use crate::domain::phone::CanonicalPhone;
use serde::Serialize;

pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Mobile")]
    pub phone: CanonicalPhone,
}

impl Lead {
    /// Builds a lead from a raw name cell. An empty cell becomes `Unknown`;
    /// anything else is trimmed, so a whitespace-only name stays empty.
    pub fn new(raw_name: &str, phone: CanonicalPhone) -> Self {
        let name = if raw_name.is_empty() {
            UNKNOWN_NAME
        } else {
            raw_name.trim()
        };
        Self {
            name: name.to_string(),
            phone,
        }
    }
}

/// A contiguous run of leads destined for one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub number: usize,
    pub leads: Vec<Lead>,
}

impl Batch {
    pub fn file_stem(&self) -> String {
        format!("output_{}", self.number)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
