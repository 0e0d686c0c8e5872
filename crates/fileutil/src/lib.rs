//! Support helpers shared by the workflow tooling: timestamp encoding, filesystem
//! setup, string truncation, and YAML file naming.

#![forbid(unsafe_code)]

pub mod fs;
pub mod log;
pub mod text;
pub mod time;
pub mod yaml;

pub use fs::{file_exists, open_or_create_file};
pub use text::trunc_string;
pub use time::{TimeCodec, TimeError, format_time, parse_time};
pub use yaml::{ensure_yaml_extension, is_yaml_file};
