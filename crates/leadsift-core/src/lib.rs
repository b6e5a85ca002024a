pub mod aggregate;
pub mod columns;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;

pub use aggregate::{aggregate, AggregateReport, LeadAggregator, RowDisposition};
pub use columns::{resolve_columns, ResolvedColumns};
pub use domain::*;
pub use dto::RunStatistics;
pub use error::CoreError;
pub use rules::*;
