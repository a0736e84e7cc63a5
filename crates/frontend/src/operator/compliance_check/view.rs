use contracts::operator::compliance::CheckType;
use leptos::prelude::*;

/// Compliance scan card: the check form plus the camera/QR placeholder
/// controls. Markup only; behavior is bound by `shared::interactions`.
#[component]
pub fn ComplianceScanCard() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Compliance check"</h2>

            <form id="compliance-check-form">
                <div class="form-group">
                    <label for="vehicle-number">"Vehicle number"</label>
                    <input
                        type="text"
                        id="vehicle-number"
                        name="vehicle_number"
                        placeholder="MH 01 AB 1234"
                    />
                </div>

                <div class="form-group">
                    <label for="check-type">"Check type"</label>
                    <select id="check-type" name="check_type">
                        {CheckType::ALL
                            .iter()
                            .map(|check| {
                                view! { <option value=check.as_str()>{check.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="check-notes">"Notes"</label>
                    <textarea id="check-notes" name="notes" rows="3"></textarea>
                </div>

                <button type="submit" class="btn-primary">"Run compliance check"</button>
            </form>

            <div id="compliance-check-result"></div>

            <div class="scan-placeholders">
                <div class="form-group">
                    <label for="camera-input">"Capture number plate"</label>
                    <input type="file" id="camera-input" accept="image/*" capture="environment" />
                </div>
                <button type="button" id="qr-scanner" class="btn-secondary">
                    "Scan vehicle QR code"
                </button>
            </div>
        </section>
    }
}
