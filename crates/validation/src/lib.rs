//! Client-side validation rules for the login and product forms.
//!
//! Every function here is pure and deterministic (no IO, no hidden state). Results
//! collect **all** applicable messages per field, in check order; a failed
//! "required" check skips the remaining checks for that field only.

pub mod credentials;
pub mod number;
pub mod product;
pub mod result;

pub use credentials::{validate_credentials, validate_password, validate_username};
pub use number::{FieldValue, parse_number};
pub use product::{ProductFormData, validate_product};
pub use result::{ValidationError, ValidationResult};

// Browser `String.prototype.trim` whitespace: includes U+FEFF, excludes U+0085.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_trimmed).is_empty()
}

/// Length in UTF-16 code units, as browser form input reports it.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}
