use contracts::operator::station_status::{FuelAvailability, LiveLoad};
use leptos::prelude::*;

/// Station status card. Renders markup only; submission behavior is bound
/// by `shared::interactions` against the form id.
#[component]
pub fn StationStatusCard() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Station status"</h2>

            <form id="station-status-form">
                <div class="form-group">
                    <input type="checkbox" id="is-open" name="is_open" checked=true />
                    <label for="is-open">"Station is open"</label>
                </div>

                <div class="form-group">
                    <label for="live-load">"Live load"</label>
                    <select id="live-load" name="live_load">
                        {LiveLoad::ALL
                            .iter()
                            .map(|load| {
                                view! { <option value=load.as_str()>{load.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="fuel-availability">"Fuel availability"</label>
                    <select id="fuel-availability" name="fuel_availability">
                        {FuelAvailability::ALL
                            .iter()
                            .map(|fuel| {
                                view! { <option value=fuel.as_str()>{fuel.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <button type="submit" class="btn-primary">"Update status"</button>
            </form>

            <div id="station-status-result"></div>
        </section>
    }
}
