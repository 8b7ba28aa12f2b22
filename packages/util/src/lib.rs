//! Support utilities for droidscope analyses
//!
//! - [`x509`]: render certificate Distinguished Names as `CN=..., O=...` strings
//! - [`io`]: offset reads on seekable buffers and whole-file reads

pub mod error;
pub mod io;
pub mod x509;

pub use error::{Result, UtilError};
pub use io::{read_at, read_file, read_file_async, read_file_to_string};
pub use x509::{get_certificate_name_string, DnView, NameFormat};
