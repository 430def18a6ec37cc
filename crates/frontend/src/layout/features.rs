use crate::shared::icons::icon;
use leptos::prelude::*;

struct Feature {
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon_name: "document",
        title: "For Patients",
        description: "Submit your symptoms for AI-based preliminary insights and understand \
                      your eligibility for health schemes before your visit.",
    },
    Feature {
        icon_name: "people",
        title: "For Doctors",
        description: "Receive pre-processed patient information and AI-supported summaries to \
                      make consultations faster and more efficient.",
    },
    Feature {
        icon_name: "workflow",
        title: "Hospital Workflow",
        description: "Automate patient onboarding, document collection, and queue management \
                      to reduce wait times.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features__content">
                <div class="features__intro">
                    <h2 class="features__title">"A Better Way to Manage Healthcare"</h2>
                    <p class="features__subtitle">
                        "Discover how Ayushmitra transforms healthcare delivery for patients, \
                         doctors, and hospitals"
                    </p>
                </div>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__header">
                                        {icon(feature.icon_name)}
                                        <h3 class="feature-card__title">{feature.title}</h3>
                                    </div>
                                    <p class="feature-card__description">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
