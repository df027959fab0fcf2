//! Static chatbot introduction.

use serde::Serialize;

/// Greeting, capability list and disclaimer shown before the first message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Intro {
    pub message: &'static str,
    pub capabilities: &'static [&'static str],
    pub disclaimer: &'static str,
}

const GREETING: &str = "Hello! I'm your Wellness Assistant. I can provide general wellness tips about stress, sleep, hydration, exercise, and mental health. What would you like to talk about today?";

const CAPABILITIES: &[&str] = &[
    "General wellness and lifestyle tips",
    "Stress management techniques",
    "Sleep improvement suggestions",
    "Hydration reminders",
    "Exercise recommendations",
    "Mental wellness guidance",
];

const INTRO_DISCLAIMER: &str = "⚠️ IMPORTANT: I cannot provide medical advice, diagnosis, or treatment recommendations. Please consult healthcare professionals for medical concerns.";

/// Returns the fixed introduction.
pub fn intro() -> Intro {
    Intro {
        message: GREETING,
        capabilities: CAPABILITIES,
        disclaimer: INTRO_DISCLAIMER,
    }
}
