//! Rendering module for writing documents to output formats.

mod docx;
mod json;
mod options;
mod parts;
mod result;

pub use docx::{to_docx, to_docx_with_stats, DocxRenderer, TABLE_STYLE};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{ConversionStats, RenderResult};
