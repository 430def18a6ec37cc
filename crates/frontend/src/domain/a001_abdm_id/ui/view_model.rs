//! ABDM Section - View Model

use contracts::domain::a001_abdm_id::AbdmForm;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AbdmSectionVm {
    pub form: RwSignal<AbdmForm>,
}

impl AbdmSectionVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AbdmForm::new()),
        }
    }

    /// Grouped display string derived from the canonical value.
    pub fn display_value(&self) -> String {
        self.form.with(|f| f.value().display())
    }

    pub fn is_complete(&self) -> bool {
        self.form.with(|f| f.value().is_complete())
    }

    pub fn show_error(&self) -> bool {
        self.form.with(|f| f.show_error())
    }
}
