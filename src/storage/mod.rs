//! Local file storage for finreport
//!
//! Only small JSON documents (settings, session) and export artifacts are
//! stored locally; report data lives in the backend.

pub mod file_io;

pub use file_io::{
    read_json, read_json_optional, remove_if_exists, write_bytes_atomic, write_json_atomic,
};
