//! Static emergency dial directory.
//!
//! A fixed mapping of dial codes to labeled actions. No state, no error
//! path -- the actual dialing happens at the OS level via the `tel:` URI
//! each entry exposes.

use gramin_types::emergency::EmergencyLine;

/// Emergency lines surfaced on the home screen.
pub const DIAL_DIRECTORY: &[EmergencyLine] = &[
    EmergencyLine {
        code: "102",
        label: "Ambulance",
        detail: "For Pregnancy/Accidents",
    },
    EmergencyLine {
        code: "108",
        label: "Emergency Services",
        detail: "Disaster Management",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_entries() {
        let codes: Vec<&str> = DIAL_DIRECTORY.iter().map(|line| line.code).collect();
        assert_eq!(codes, ["102", "108"]);
    }

    #[test]
    fn test_dial_uris() {
        assert_eq!(DIAL_DIRECTORY[0].dial_uri(), "tel:102");
        assert_eq!(DIAL_DIRECTORY[1].dial_uri(), "tel:108");
    }
}
