//! DOM wiring for the operator page.
//!
//! Binds the station-status and compliance-check forms to their server
//! endpoints, plus the placeholder camera/QR controls. Registration is
//! explicit: the hosting app calls [`init_interactions`] once with the live
//! `Document`; elements missing from the page are skipped silently.
//!
//! Known limitation: the submit control is not disabled while a request is
//! in flight, so a user can re-submit before the previous response arrives.

use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlFormElement, HtmlInputElement};

use contracts::StatusEnvelope;

use crate::shared::api_utils::api_url;
use crate::shared::loading;
use crate::shared::notify;

/// Configuration of one form-to-endpoint binding.
#[derive(Debug, Clone, Copy)]
pub struct SubmitBinding {
    pub form_id: &'static str,
    pub endpoint: &'static str,
    pub success_message: &'static str,
    /// Prefix shown before the server's error text on a rejection.
    pub error_prefix: &'static str,
    /// Generic message for transport and parse failures; no detail leaks.
    pub failure_message: &'static str,
    /// Container that holds the loading marker while the request is out.
    pub result_container: Option<&'static str>,
}

pub const STATION_STATUS: SubmitBinding = SubmitBinding {
    form_id: "station-status-form",
    endpoint: "/update-station-status",
    success_message: "Station status updated successfully!",
    error_prefix: "Error updating station status",
    failure_message: "Error updating station status",
    result_container: Some("station-status-result"),
};

pub const COMPLIANCE_CHECK: SubmitBinding = SubmitBinding {
    form_id: "compliance-check-form",
    endpoint: "/compliance-check",
    success_message: "Compliance check completed successfully!",
    error_prefix: "Error with compliance check",
    failure_message: "Error performing compliance check",
    result_container: Some("compliance-check-result"),
};

/// The two form bindings of the operator page.
pub fn bindings() -> [SubmitBinding; 2] {
    [STATION_STATUS, COMPLIANCE_CHECK]
}

const CAMERA_STUB_MESSAGE: &str = "Camera image captured. In a full implementation, this would process the image for number plate detection.";
const QR_STUB_MESSAGE: &str = "QR scanner would be initialized here. In a full implementation, this would scan QR codes using the device camera.";

/// Register every operator-page interaction against `document`.
///
/// One-shot setup, called after the page content exists. Never fails:
/// bindings whose target element is absent are skipped.
pub fn init_interactions(document: &Document) {
    for binding in bindings() {
        bind_form_submit(document, binding);
    }
    bind_camera_stub(document);
    bind_qr_stub(document);
}

/// Failure of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Server answered with `success: false`; carries its error text.
    Rejected(String),
    /// Network error, non-JSON body, or a request that could not be built.
    Transport(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Rejected(msg) => write!(f, "rejected by server: {}", msg),
            SubmitError::Transport(msg) => write!(f, "transport failure: {}", msg),
        }
    }
}

/// Attach the submit handler described by `binding`.
///
/// Cancels the native navigation, snapshots the form fields at submission
/// time and issues exactly one url-encoded POST per submit event.
pub fn bind_form_submit(document: &Document, binding: SubmitBinding) {
    let form = match document.get_element_by_id(binding.form_id) {
        Some(element) => match element.dyn_into::<HtmlFormElement>() {
            Ok(form) => form,
            Err(_) => {
                log::error!("#{} exists but is not a form element", binding.form_id);
                return;
            }
        },
        None => return,
    };

    let doc = document.clone();
    let form_for_closure = form.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let pairs = match FormData::new_with_form(&form_for_closure) {
            Ok(data) => collect_pairs(&data),
            Err(_) => {
                log::error!("{}: could not read form fields", binding.failure_message);
                notify::alert(binding.failure_message);
                return;
            }
        };

        if let Some(container) = binding.result_container {
            loading::show(&doc, container);
        }

        let doc = doc.clone();
        spawn_local(async move {
            let outcome = post_form(binding.endpoint, &pairs).await;
            if let Some(container) = binding.result_container {
                loading::hide(&doc, container, "");
            }
            match outcome {
                Ok(()) => notify::alert(binding.success_message),
                Err(SubmitError::Rejected(msg)) => {
                    notify::alert(&format!("{}: {}", binding.error_prefix, msg));
                }
                Err(SubmitError::Transport(msg)) => {
                    log::error!("{}: {}", binding.failure_message, msg);
                    notify::alert(binding.failure_message);
                }
            }
        });
    });

    if form
        .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("failed to attach submit listener to #{}", binding.form_id);
    }
    closure.forget();
}

/// Single POST of the collected fields; no retry, terminal at this boundary.
async fn post_form(endpoint: &str, pairs: &[(String, String)]) -> Result<(), SubmitError> {
    let response = Request::post(&api_url(endpoint))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encode_pairs(pairs))
        .map_err(|e| SubmitError::Transport(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(format!("failed to send request: {}", e)))?;

    let envelope = response
        .json::<StatusEnvelope>()
        .await
        .map_err(|e| SubmitError::Transport(format!("failed to parse response: {}", e)))?;

    envelope.into_result().map_err(SubmitError::Rejected)
}

/// Placeholder for camera-based plate detection: acknowledges a selected
/// file with a static message, reads and transmits nothing.
pub fn bind_camera_stub(document: &Document) {
    let input = match document.get_element_by_id("camera-input") {
        Some(element) => element,
        None => return,
    };

    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let has_file = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .is_some();
        if has_file {
            notify::alert(CAMERA_STUB_MESSAGE);
        }
    });

    if input
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("failed to attach change listener to #camera-input");
    }
    closure.forget();
}

/// Placeholder for QR scanning: a click shows a static message.
pub fn bind_qr_stub(document: &Document) {
    let button = match document.get_element_by_id("qr-scanner") {
        Some(element) => element,
        None => return,
    };

    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        notify::alert(QR_STUB_MESSAGE);
    });

    if button
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("failed to attach click listener to #qr-scanner");
    }
    closure.forget();
}

/// Snapshot the named fields of a form, in submission order. Non-string
/// entries (file inputs) are skipped; this page keeps file inputs outside
/// its forms.
pub fn collect_pairs(data: &FormData) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for entry in data.entries() {
        let Ok(entry) = entry else { continue };
        let pair = js_sys::Array::from(&entry);
        let name = pair.get(0).as_string();
        let value = pair.get(1).as_string();
        if let (Some(name), Some(value)) = (name, value) {
            pairs.push((name, value));
        }
    }
    pairs
}

/// application/x-www-form-urlencoded encoding, order-preserving.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_table() {
        let [status, compliance] = bindings();
        assert_eq!(status.form_id, "station-status-form");
        assert_eq!(status.endpoint, "/update-station-status");
        assert_eq!(compliance.form_id, "compliance-check-form");
        assert_eq!(compliance.endpoint, "/compliance-check");
        assert_ne!(status.error_prefix, compliance.error_prefix);
    }

    #[test]
    fn test_compliance_messages_distinguish_rejection_from_transport() {
        assert_eq!(COMPLIANCE_CHECK.error_prefix, "Error with compliance check");
        assert_eq!(
            COMPLIANCE_CHECK.failure_message,
            "Error performing compliance check"
        );
        // The station-status form uses one text for both outcomes.
        assert_eq!(STATION_STATUS.error_prefix, STATION_STATUS.failure_message);
    }

    #[test]
    fn test_encode_pairs_preserves_order() {
        let pairs = vec![
            ("live_load".to_string(), "busy".to_string()),
            ("fuel_availability".to_string(), "available".to_string()),
        ];
        assert_eq!(
            encode_pairs(&pairs),
            "live_load=busy&fuel_availability=available"
        );
    }

    #[test]
    fn test_encode_pairs_escapes_reserved_characters() {
        let pairs = vec![(
            "notes".to_string(),
            "pump 3 & 4 = blocked?".to_string(),
        )];
        assert_eq!(
            encode_pairs(&pairs),
            "notes=pump%203%20%26%204%20%3D%20blocked%3F"
        );
    }

    #[test]
    fn test_encode_pairs_unicode() {
        let pairs = vec![("vehicle_number".to_string(), "MH01ÄB".to_string())];
        assert_eq!(encode_pairs(&pairs), "vehicle_number=MH01%C3%84B");
    }

    #[test]
    fn test_encode_pairs_empty() {
        assert_eq!(encode_pairs(&[]), "");
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Rejected("Access denied".to_string()).to_string(),
            "rejected by server: Access denied"
        );
        assert!(SubmitError::Transport("timeout".to_string())
            .to_string()
            .starts_with("transport failure"));
    }
}
