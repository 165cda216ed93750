//! Fixed persona for the medical assistant.
//!
//! Every conversation is bound to this configuration at creation and it
//! never changes mid-conversation.

use gramin_types::remote::PersonaConfig;

/// Creativity setting for assistant replies.
pub const ASSISTANT_TEMPERATURE: f64 = 0.7;

const SYSTEM_INSTRUCTION: &str = "\
You are GraminHealth, a helpful and empathetic medical assistant designed for \
people living in rural India, specifically farmers.

Your goals:
1. Provide clear, simple, and accurate medical guidance in English (but tailored \
for non-native speakers if needed).
2. If a situation sounds like an emergency (heart attack, snake bite, severe \
injury), immediately advise calling an ambulance (102/108) or going to the \
nearest hospital.
3. Be culturally aware of rural Indian settings (farms, distance to clinics).
4. Do not provide definitive diagnoses; always suggest consulting a doctor.
5. Keep responses concise and easy to read on mobile phones.";

/// The behavior configuration every assistant conversation is created with.
pub fn medical_persona() -> PersonaConfig {
    PersonaConfig {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        temperature: ASSISTANT_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_shape() {
        let persona = medical_persona();
        assert!(persona.system_instruction.contains("GraminHealth"));
        assert!(persona.system_instruction.contains("102/108"));
        assert!((persona.temperature - 0.7).abs() < f64::EPSILON);
    }
}
