//! Emergency dial directory types.
//!
//! The directory itself is a static mapping (see `gramin_core::emergency`);
//! placing the dial action behind a `tel:` URI keeps the actual dialing an
//! OS concern.

use serde::Serialize;

/// One entry in the emergency dial directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyLine {
    /// Short dial code, e.g. "102".
    pub code: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

impl EmergencyLine {
    /// The `tel:` URI a front end hands to the OS dialer.
    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_uri() {
        let line = EmergencyLine {
            code: "102",
            label: "Ambulance",
            detail: "For Pregnancy/Accidents",
        };
        assert_eq!(line.dial_uri(), "tel:102");
    }
}
