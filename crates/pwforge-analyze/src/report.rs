// Password analysis report

use serde::Serialize;

use crate::breach::{BreachChecker, BreachStatus};
use crate::entropy::estimate_entropy_bits;
use crate::strength::StrengthScore;

/// Summary of a single password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordReport {
    /// Length in characters.
    pub password_length: usize,
    pub entropy_bits: f64,
    /// Breach occurrences, `-1` when the lookup was unavailable. Absent when
    /// no breach check was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwned_count: Option<i64>,
    /// zxcvbn score, guesses and feedback. Absent when built without the
    /// `zxcvbn` feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthScore>,
}

impl PasswordReport {
    /// Breach status reconstructed from `pwned_count`.
    pub fn breach_status(&self) -> Option<BreachStatus> {
        self.pwned_count.map(|n| match n {
            n if n < 0 => BreachStatus::Unavailable,
            0 => BreachStatus::NotFound,
            n => BreachStatus::Found(n as u64),
        })
    }
}

/// Analyze `password`, checking it against `breach` when given.
pub fn analyze_password(password: &str, breach: Option<&BreachChecker>) -> PasswordReport {
    PasswordReport {
        password_length: password.chars().count(),
        entropy_bits: estimate_entropy_bits(password),
        pwned_count: breach.map(|checker| checker.lookup_count(password)),
        strength: strength_of(password),
    }
}

#[cfg(feature = "zxcvbn")]
fn strength_of(password: &str) -> Option<StrengthScore> {
    Some(crate::strength::score_password(password))
}

#[cfg(not(feature = "zxcvbn"))]
fn strength_of(_password: &str) -> Option<StrengthScore> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::breach::BreachError;

    #[test]
    fn entropy_simple() {
        let res = analyze_password("abc123", None);
        assert_eq!(res.password_length, 6);
        assert!(res.entropy_bits > 0.0);
        assert_eq!(res.pwned_count, None);
        assert_eq!(res.breach_status(), None);
    }

    #[test]
    fn breach_count_included() {
        let checker = BreachChecker::from_fn(|_: &str| {
            Ok("1E4C9B93F3F0682250B6CF8331B7EE68FD8:7\n".to_string())
        });
        let res = analyze_password("password", Some(&checker));
        assert_eq!(res.pwned_count, Some(7));
        assert_eq!(res.breach_status(), Some(BreachStatus::Found(7)));
    }

    #[test]
    fn breach_unavailable_sentinel() {
        let checker =
            BreachChecker::from_fn(|_: &str| Err(BreachError::Unavailable("offline".to_string())));
        let res = analyze_password("password", Some(&checker));
        assert_eq!(res.pwned_count, Some(-1));
        assert_eq!(res.breach_status(), Some(BreachStatus::Unavailable));
    }

    #[cfg(feature = "zxcvbn")]
    #[test]
    fn strength_is_reported() {
        let res = analyze_password("password", None);
        let strength = res.strength.unwrap();
        assert_eq!(strength.score, 0);

        let json = serde_json::to_value(analyze_password("password", None)).unwrap();
        assert_eq!(json["strength"]["score"], 0);
        assert!(json["strength"]["guesses"].as_u64().unwrap() > 0);
        assert!(json["strength"]["feedback"]["suggestions"].is_array());
    }

    #[cfg(not(feature = "zxcvbn"))]
    #[test]
    fn strength_absent_without_feature() {
        let json = serde_json::to_value(analyze_password("password", None)).unwrap();
        assert!(json.get("strength").is_none());
    }

    #[test]
    fn json_omits_unrequested_breach() {
        let json = serde_json::to_value(analyze_password("abc", None)).unwrap();
        assert_eq!(json["password_length"], 3);
        assert!(json.get("pwned_count").is_none());
    }
}
