use super::identifier::AbdmNumber;

/// Lifecycle of the identifier entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No edit and no submission attempted yet.
    Untouched,
    /// User has edited the field; no verdict shown.
    Touched,
    /// Last submit carried all 14 digits.
    ValidSubmitted,
    /// Last submit was incomplete; error is visible until the next edit.
    InvalidSubmitted,
}

/// State machine backing the ABDM entry form.
///
/// The submit control is disabled in the UI whenever the number is
/// incomplete, but `submit` still handles a forced call without breaking
/// any invariant.
#[derive(Debug, Clone)]
pub struct AbdmForm {
    value: AbdmNumber,
    state: FormState,
}

impl AbdmForm {
    pub fn new() -> Self {
        Self {
            value: AbdmNumber::from_input(""),
            state: FormState::Untouched,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn value(&self) -> &AbdmNumber {
        &self.value
    }

    /// True while the invalid-submission error should be visible.
    pub fn show_error(&self) -> bool {
        self.state == FormState::InvalidSubmitted
    }

    /// Accept raw input text. Sanitizes to the canonical digit string and
    /// clears any submission verdict.
    pub fn input(&mut self, raw: &str) {
        self.value = AbdmNumber::from_input(raw);
        self.state = FormState::Touched;
    }

    /// Attempt a submission. Returns the canonical number on success so the
    /// caller can hand it to the surrounding application.
    pub fn submit(&mut self) -> Option<AbdmNumber> {
        if self.value.is_complete() {
            self.state = FormState::ValidSubmitted;
            Some(self.value.clone())
        } else {
            self.state = FormState::InvalidSubmitted;
            None
        }
    }
}

impl Default for AbdmForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_untouched() {
        let form = AbdmForm::new();
        assert_eq!(form.state(), FormState::Untouched);
        assert!(!form.show_error());
    }

    #[test]
    fn edit_moves_to_touched() {
        let mut form = AbdmForm::new();
        form.input("12ab");
        assert_eq!(form.state(), FormState::Touched);
        assert_eq!(form.value().as_str(), "12");
    }

    #[test]
    fn forced_incomplete_submit_is_rejected() {
        let mut form = AbdmForm::new();
        form.input("abc12-34");
        assert_eq!(form.value().as_str(), "1234");
        assert!(form.submit().is_none());
        assert_eq!(form.state(), FormState::InvalidSubmitted);
        assert!(form.show_error());
    }

    #[test]
    fn edit_after_invalid_submit_clears_error() {
        let mut form = AbdmForm::new();
        form.input("123");
        form.submit();
        assert!(form.show_error());
        form.input("1235");
        assert_eq!(form.state(), FormState::Touched);
        assert!(!form.show_error());
    }

    #[test]
    fn complete_submit_emits_canonical_value() {
        let mut form = AbdmForm::new();
        form.input("1234 5678 9012 34");
        let out = form.submit().expect("14 digits must submit");
        assert_eq!(out.as_str(), "12345678901234");
        assert_eq!(form.state(), FormState::ValidSubmitted);
    }

    #[test]
    fn empty_submit_on_untouched_form_shows_error() {
        let mut form = AbdmForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.state(), FormState::InvalidSubmitted);
    }
}
