// Stable error codes exposed in API error bodies

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const PAYLOAD_TOO_LARGE: &str = "VALIDATION_1003";
}

pub mod system {
    pub const INTERNAL: &str = "SYS_5001";
    pub const CONFIGURATION: &str = "SYS_5002";
}
