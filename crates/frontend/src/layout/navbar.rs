use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__content">
                <span class="navbar__brand">"Ayushmitra"</span>
                <div class="navbar__links">
                    <a href="#" class="navbar__link">"Home"</a>
                    <a href="#" class="navbar__link">"For Patients"</a>
                    <a href="#" class="navbar__link">"For Doctors"</a>
                </div>
            </div>
        </nav>
    }
}
