use leptos::prelude::*;

use crate::operator::compliance_check::ComplianceScanCard;
use crate::operator::station_status::StationStatusCard;
use crate::shared::interactions;

#[component]
pub fn App() -> impl IntoView {
    // Bind the form and scanner handlers once the page content exists.
    // Elements absent from the page are skipped inside init_interactions.
    Effect::new(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            interactions::init_interactions(&document);
        }
    });

    view! {
        <main class="operator-console">
            <header class="page-header">
                <h1>"FuelLens operator console"</h1>
            </header>
            <StationStatusCard />
            <ComplianceScanCard />
        </main>
    }
}
