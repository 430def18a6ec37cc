//! ABDM health number: canonical digit string, display formatting, form state.

pub mod form;
pub mod identifier;

pub use form::{AbdmForm, FormState};
pub use identifier::{format_grouped, sanitize_digits, AbdmNumber, ABDM_NUMBER_LEN};
