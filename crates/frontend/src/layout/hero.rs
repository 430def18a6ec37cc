use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">"Streamline Your Hospital Experience with AI"</h1>
                <p class="hero__subtitle">
                    "Get preliminary health insights, manage your records, and connect with \
                     government health schemes, all in one place. Experience the future of \
                     healthcare management."
                </p>
                <Button class="hero__cta">"Quick Symptom Triage"</Button>
            </div>
        </section>
    }
}
