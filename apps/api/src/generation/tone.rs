//! Tone calibration: maps the requested tone to the phrase set used by the synthesizer.
//!
//! The match is exhaustive over `Tone`. Adding a tone without phrases is a compile error,
//! so there is no fallback branch here.

use crate::models::proposal::Tone;

/// Phrases that change with tone. `intro`, `transition` and `closing` form the core triple;
/// `greeting` and `sign_off` frame the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePhrases {
    pub greeting: &'static str,
    /// Followed by the job title, e.g. "... your WordPress Developer Needed job."
    pub intro: &'static str,
    /// Followed by the matched skills list.
    pub transition: &'static str,
    pub closing: &'static str,
    pub sign_off: &'static str,
}

/// Returns the phrase set for a tone.
pub fn tone_phrases(tone: Tone) -> TonePhrases {
    match tone {
        Tone::Professional => TonePhrases {
            greeting: "Hello,",
            intro: "Thank you for sharing the details of your",
            transition: "I bring proven expertise in",
            closing: "I look forward to the opportunity to contribute to your project.",
            sign_off: "Best regards,",
        },
        Tone::Friendly => TonePhrases {
            greeting: "Hi there!",
            intro: "Thanks so much for posting the details of your",
            transition: "I really enjoy working with",
            closing: "I'd love to hear more about your project and help bring it to life!",
            sign_off: "Cheers,",
        },
        Tone::Confident => TonePhrases {
            greeting: "Hi,",
            intro: "I read through your post and I am the right person for your",
            transition: "I deliver results with deep, hands-on expertise in",
            closing: "Let's make your project a success together.",
            sign_off: "Best,",
        },
        Tone::Formal => TonePhrases {
            greeting: "Dear Hiring Manager,",
            intro: "I am writing to express my sincere interest in your",
            transition: "My professional background includes extensive expertise in",
            closing: "I would welcome the opportunity to discuss how I may contribute to your project.",
            sign_off: "Sincerely,",
        },
    }
}
