pub mod ids;
pub mod lead;
pub mod phone;
pub mod rejection;
pub mod row;

pub use ids::JobId;
pub use lead::{Batch, Lead, UNKNOWN_NAME};
pub use phone::{
    normalize_phone, normalize_phone_cell, split_candidates, CanonicalPhone, PhoneRejection,
};
pub use rejection::{Rejection, RejectionReason};
pub use row::Row;
