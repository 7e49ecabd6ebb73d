// Prompt text for the medical assistant

/// Fixed instruction sent as the system message
pub const SYSTEM_PROMPT: &str = "You are a medical assistant. \
Provide brief, clear advice for symptoms. \
Include self-care tips and when to see a doctor. Keep responses under 100 words. \
Always remind to consult a real doctor.";

/// Text shown when no advice could be generated
pub const FALLBACK_ADVICE: &str =
    "Sorry, I'm having trouble processing your request. Please try again later.";

/// User message for a normalized symptom
pub fn user_prompt(symptom: &str) -> String {
    format!("I'm experiencing {symptom}. What should I do?")
}
