use crate::domain::a001_abdm_id::ui::AbdmSection;
use crate::domain::a002_chat::ui::ChatWidget;
use crate::layout::{Features, Hero, Navbar};
use contracts::domain::a001_abdm_id::AbdmNumber;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Where a validated ABDM number leaves the page. The receiving side
    // (submission service, navigation) is wired in by the host application.
    let on_abdm_submit = Callback::new(|number: AbdmNumber| {
        log::info!("ABDM number submitted: {}", number.display());
    });

    view! {
        <div class="page">
            <Navbar />
            <main>
                <Hero />
                <Features />
                <AbdmSection on_submit=on_abdm_submit />
            </main>
            <ChatWidget />
        </div>
    }
}
