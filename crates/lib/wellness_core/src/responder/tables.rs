//! Reference keyword rules and response pools.

use super::Category;

/// Appended to every canned response.
pub const DISCLAIMER: &str = "\n\n⚠️ **Disclaimer:** I am a wellness assistant providing general information only. I cannot provide medical advice. Please consult with a healthcare professional for medical concerns.";

/// Keyword rules in priority order. First match wins.
pub(super) const KEYWORD_RULES: &[(&[&str], Category)] = &[
    (
        &["stress", "anxious", "overwhelmed", "pressure"],
        Category::Stress,
    ),
    (
        &["tired", "fatigue", "exhausted", "low energy"],
        Category::Tired,
    ),
    (
        &["sleep", "insomnia", "sleepless", "restless"],
        Category::Sleep,
    ),
    (
        &["hydration", "water", "dehydrated", "thirsty"],
        Category::Hydration,
    ),
    (
        &["exercise", "workout", "fitness", "active"],
        Category::Exercise,
    ),
    (
        &["mental", "depress", "anxiety", "mood", "emotional"],
        Category::Mental,
    ),
];

pub(super) fn reference_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Stress => &[
            "Stress is normal, but it's important to manage it. Try deep breathing exercises: inhale for 4 seconds, hold for 7, exhale for 8.",
            "Regular physical activity can help reduce stress. Even a 10-minute walk can make a difference.",
            "Consider mindfulness meditation - just 5 minutes a day can help calm your mind.",
        ],
        Category::Tired => &[
            "Fatigue can be a sign of dehydration. Make sure you're drinking enough water throughout the day.",
            "Consider your sleep quality. Adults typically need 7-9 hours of quality sleep each night.",
            "Iron-rich foods like spinach, lentils, and lean meats can help combat fatigue.",
        ],
        Category::Sleep => &[
            "Maintain a consistent sleep schedule, even on weekends. This helps regulate your body's internal clock.",
            "Create a relaxing bedtime routine - avoid screens for at least an hour before bed.",
            "Make sure your bedroom is cool, dark, and quiet for optimal sleep conditions.",
        ],
        Category::Hydration => &[
            "Aim for 8 glasses of water daily, but your needs may vary based on activity level and climate.",
            "If you struggle to drink enough water, try adding slices of lemon, cucumber, or berries for flavor.",
            "Remember that fruits and vegetables also contribute to your daily hydration needs.",
        ],
        Category::General => &[
            "A balanced diet with plenty of fruits, vegetables, and whole grains supports overall health.",
            "Regular check-ups are important for preventive care. Don't skip your annual physical.",
            "Social connections are vital for mental wellness. Make time for friends and family.",
        ],
        Category::Exercise => &[
            "The World Health Organization recommends 150 minutes of moderate exercise per week.",
            "Find activities you enjoy - you're more likely to stick with exercise if it's fun for you.",
            "Remember to warm up before exercise and cool down afterward to prevent injury.",
        ],
        Category::Mental => &[
            "It's okay to ask for help when you need it. Talking to someone can make a big difference.",
            "Practice gratitude by noting three things you're thankful for each day.",
            "Set realistic goals and celebrate small achievements along the way.",
        ],
    }
}
