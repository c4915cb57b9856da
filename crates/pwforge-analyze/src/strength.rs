// Pattern-based strength scoring
//
// The report types are always available; `score_password` needs the
// `zxcvbn` feature.
//
// The entropy estimate only looks at character classes. zxcvbn also finds
// dictionary words, keyboard walks, dates and repeats, which is what makes
// "P@ssw0rd2024" weak despite using every class.

use serde::Serialize;

/// Highest zxcvbn score.
pub const MAX_SCORE: u8 = 4;

/// zxcvbn's verdict on a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthScore {
    /// 0 (too guessable) to 4 (very unguessable).
    pub score: u8,
    /// Estimated guesses needed to crack the password.
    pub guesses: u64,
    pub feedback: StrengthFeedback,
}

/// Human-readable advice attached to weak scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrengthFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Score `password` with zxcvbn.
#[cfg(feature = "zxcvbn")]
pub fn score_password(password: &str) -> StrengthScore {
    let entropy = zxcvbn::zxcvbn(password, &[]);
    let feedback = entropy
        .feedback()
        .map(|fb| StrengthFeedback {
            warning: fb.warning().map(|w| w.to_string()),
            suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
        })
        .unwrap_or_default();
    StrengthScore {
        score: entropy.score() as u8,
        guesses: entropy.guesses(),
        feedback,
    }
}
