pub mod batch;
pub mod classify;

pub use batch::{
    chunk_leads, clamp_batch_size, parse_batch_size, validate_batch_size, DEFAULT_BATCH_SIZE,
    MAX_BATCH_SIZE, MIN_BATCH_SIZE,
};
pub use classify::{classify_row, RowOutcome};
