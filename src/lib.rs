//! Reader for Sogou Pinyin cell dictionaries (`.scel`).
//!
//! ```no_run
//! let dict = scel_tools::parse_file("programming.scel")?;
//! for item in &dict {
//!     println!("{}", item);
//! }
//! # Ok::<(), scel_tools::error::ScelError>(())
//! ```
pub mod error;
pub mod format;
pub mod io;
pub mod scel;
pub mod types;

pub use error::{Result, ScelError};
pub use scel::{parse, parse_bytes, parse_file, parse_file_mapped};
pub use types::{ScelDict, WordEntry};
