//! ABDM Section - View Component

use super::view_model::AbdmSectionVm;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a001_abdm_id::AbdmNumber;
use leptos::prelude::*;

/// Card section where users link their 14-digit ABDM number.
///
/// Only digits are accepted; the field shows the value grouped as
/// XXXX XXXX XXXX XX while the canonical digit string stays separator-free.
/// `on_submit` receives the canonical value once it validates.
#[component]
pub fn AbdmSection(on_submit: Callback<AbdmNumber>) -> impl IntoView {
    let vm = AbdmSectionVm::new();

    let handle_input = Callback::new(move |raw: String| {
        vm.form.update(|f| f.input(&raw));
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut form = vm.form.get();
        let submitted = form.submit();
        vm.form.set(form);
        if let Some(number) = submitted {
            on_submit.run(number);
        }
    };

    view! {
        <section class="abdm">
            <div class="abdm__card">
                <h2 class="abdm__title">"Link your ABDM Number"</h2>
                <p class="abdm__description">
                    "Enter your 14-digit ABDM number to continue. This is for demonstration only."
                </p>
                <form class="abdm__form" on:submit=handle_submit>
                    <Input
                        id="abdm"
                        label="ABDM Number"
                        input_mode="numeric"
                        placeholder="1234 5678 9012 34"
                        value=Signal::derive(move || vm.display_value())
                        on_input=handle_input
                        invalid=Signal::derive(move || vm.show_error())
                        help="Please enter exactly 14 digits. Only numbers are accepted."
                    />
                    <div class="abdm__actions">
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || !vm.is_complete())
                        >
                            "Continue"
                        </Button>
                        {move || {
                            if vm.is_complete() {
                                Some(view! {
                                    <span class="abdm__status abdm__status--valid">
                                        {icon("check-circle")}
                                        " Looks good"
                                    </span>
                                }.into_any())
                            } else if vm.show_error() {
                                Some(view! {
                                    <span class="abdm__status abdm__status--invalid">
                                        {icon("alert-circle")}
                                        " Enter a valid 14-digit number"
                                    </span>
                                }.into_any())
                            } else {
                                None
                            }
                        }}
                    </div>
                </form>
            </div>
        </section>
    }
}
