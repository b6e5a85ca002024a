//! Header heuristics for locating the contact name and phone columns.
//!
//! Rules are tried in order; within a rule, columns are scanned in header order.

const NAME_LABELS: &[&str] = &["contactname", "contact name", "contact_name"];
const NAME_FRAGMENT: &str = "contact";
const PHONE_LABELS: &[&str] = &["phone2", "phone 2", "phone_2"];

#[derive(Debug, Clone, Copy)]
enum ColumnRule {
    /// Trimmed, lowercased header equals one of the labels.
    Exact(&'static [&'static str]),
    /// Lowercased header contains the fragment.
    Contains(&'static str),
}

impl ColumnRule {
    fn matches(self, column: &str) -> bool {
        match self {
            ColumnRule::Exact(labels) => {
                let normalized = column.trim().to_lowercase();
                labels.iter().any(|label| normalized == *label)
            }
            ColumnRule::Contains(fragment) => column.to_lowercase().contains(fragment),
        }
    }
}

const NAME_RULES: &[ColumnRule] = &[
    ColumnRule::Exact(NAME_LABELS),
    ColumnRule::Contains(NAME_FRAGMENT),
];
const PHONE_RULES: &[ColumnRule] = &[ColumnRule::Exact(PHONE_LABELS)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedColumns<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
}

pub fn resolve_columns<'a, I>(columns: I) -> ResolvedColumns<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let columns: Vec<&'a str> = columns.into_iter().collect();
    ResolvedColumns {
        name: find_column(&columns, NAME_RULES),
        phone: find_column(&columns, PHONE_RULES),
    }
}

fn find_column<'a>(columns: &[&'a str], rules: &[ColumnRule]) -> Option<&'a str> {
    rules
        .iter()
        .find_map(|rule| columns.iter().copied().find(|column| rule.matches(column)))
}
