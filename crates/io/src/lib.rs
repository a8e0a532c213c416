//! File I/O for gridnote: JSON grid documents, CSV export and template files.

pub mod csv;
pub mod json;
pub mod template;
