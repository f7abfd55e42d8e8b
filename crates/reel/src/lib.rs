pub mod assembler;
pub mod clip;
pub mod error;
pub mod span;

pub use assembler::{ReelCutter, ReelReport};
pub use clip::{ClipTool, Ffmpeg};
pub use error::Error;
pub use span::{Span, derive_spans, select_spans, total_duration};
