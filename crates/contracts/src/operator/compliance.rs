use serde::{Deserialize, Serialize};

/// How a compliance check was initiated at the pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    Manual,
    Camera,
    Qr,
}

impl CheckType {
    pub const ALL: [CheckType; 3] = [CheckType::Manual, CheckType::Camera, CheckType::Qr];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::Manual => "manual",
            CheckType::Camera => "camera",
            CheckType::Qr => "qr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckType::Manual => "Manual entry",
            CheckType::Camera => "Camera capture",
            CheckType::Qr => "QR scan",
        }
    }
}

/// Payload of `POST /compliance-check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheckRequest {
    pub vehicle_number: String,
    pub check_type: CheckType,
    pub notes: String,
}

impl ComplianceCheckRequest {
    /// Ordered form fields, named exactly as the server reads them.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("vehicle_number".to_string(), self.vehicle_number.clone()),
            ("check_type".to_string(), self.check_type.as_str().to_string()),
            ("notes".to_string(), self.notes.clone()),
        ]
    }
}
