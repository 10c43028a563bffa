pub mod buffer;
pub mod record;

pub use buffer::GrowableBuffer;
pub use record::{MISSING_CATEGORY, Record};
