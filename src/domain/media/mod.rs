//! Media value objects: format classification, size limits, conversion output

pub mod conversion;
pub mod format;
pub mod size;

pub use conversion::ConvertedAudio;
pub use format::{classify, DirectFormat, InputError, SubmitPlan};
pub use size::{check_upload_size, SizeGuardError, MAX_UPLOAD_BYTES};
