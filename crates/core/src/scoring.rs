//! Compliance scoring engine.
//!
//! Maps a privacy-audit questionnaire to a 0–100 score plus a prioritized
//! recommendation list. The function is total and deterministic: identical
//! answers always produce identical output, and missing answers are simply
//! treated as "no".

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Point weights
// ---------------------------------------------------------------------------

/// Points awarded for having a published privacy policy.
pub const PRIVACY_POLICY_POINTS: u8 = 20;
/// Points awarded for a cookie consent mechanism.
pub const COOKIE_CONSENT_POINTS: u8 = 15;
/// Points awarded for user-rights (access/correction/erasure) mechanisms.
pub const USER_RIGHTS_POINTS: u8 = 20;
/// Points awarded for a data-retention policy.
pub const DATA_RETENTION_POINTS: u8 = 15;
/// Points awarded for supporting data-deletion requests.
pub const DATA_DELETION_POINTS: u8 = 15;
/// Points awarded for listing enough distinct security measures.
pub const SECURITY_MEASURES_POINTS: u8 = 15;

/// Number of listed security measures required to earn the security points.
pub const MIN_SECURITY_MEASURES: usize = 4;

/// Maximum attainable score. The weights already sum to exactly 100, so the
/// cap only guards against future weight changes.
pub const MAX_SCORE: u8 = 100;

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// Question ids used by the client questionnaire, as they appear as keys in
/// `privacy_audits.audit_data`.
pub const Q_PRIVACY_POLICY: &str = "privacy-policy";
pub const Q_COOKIE_CONSENT: &str = "cookie-consent";
pub const Q_USER_RIGHTS: &str = "user-rights";
pub const Q_DATA_RETENTION: &str = "data-retention";
pub const Q_DATA_DELETION: &str = "data-deletion";
pub const Q_SECURITY_MEASURES: &str = "security-measures";

/// The audit questionnaire answers extracted from `privacy_audits.audit_data`.
///
/// The stored map is open (answers may be booleans, strings, or lists), so
/// extraction is total: [`AuditAnswers::from_value`] never fails, it just
/// reads every answer through a truthiness lens and ignores anything it does
/// not recognize. A missing key is "no".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditAnswers {
    pub privacy_policy: bool,
    pub cookie_consent: bool,
    pub user_rights: bool,
    pub data_retention: bool,
    pub data_deletion: bool,
    pub security_measures: Vec<String>,
}

/// Truthiness of a free-form questionnaire answer: `false`, `null`, `0`, the
/// empty string, and the empty list are falsy; everything else is truthy.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(map) => !map.is_empty(),
    }
}

impl AuditAnswers {
    /// Extract the scored answers from a raw `audit_data` map.
    pub fn from_value(audit_data: &serde_json::Value) -> Self {
        let truthy = |key: &str| audit_data.get(key).is_some_and(is_truthy);

        let security_measures = audit_data
            .get(Q_SECURITY_MEASURES)
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            privacy_policy: truthy(Q_PRIVACY_POLICY),
            cookie_consent: truthy(Q_COOKIE_CONSENT),
            user_rights: truthy(Q_USER_RIGHTS),
            data_retention: truthy(Q_DATA_RETENTION),
            data_deletion: truthy(Q_DATA_DELETION),
            security_measures,
        }
    }

    /// Whether enough distinct security measures are in place.
    pub fn has_sufficient_security(&self) -> bool {
        self.security_measures.len() >= MIN_SECURITY_MEASURES
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
}

/// A single remediation suggestion emitted for a failed audit predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub title: &'static str,
    pub description: &'static str,
}

/// The result of scoring one questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Compliance score in `0..=100`.
    pub score: u8,
    /// Remediation suggestions, in fixed questionnaire order.
    pub recommendations: Vec<Recommendation>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a questionnaire and derive its recommendations.
///
/// The score is an additive point system over six fixed predicates; each
/// failed predicate (except data-deletion, which affects only the score)
/// contributes one recommendation. Recommendation order follows the
/// questionnaire order of the predicates.
pub fn score(answers: &AuditAnswers) -> ScoreReport {
    let mut score: u32 = 0;
    let mut recommendations = Vec::new();

    if answers.privacy_policy {
        score += u32::from(PRIVACY_POLICY_POINTS);
    } else {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::High,
            title: "Create a Privacy Policy",
            description:
                "You need a comprehensive privacy policy that explains your data practices.",
        });
    }

    if answers.cookie_consent {
        score += u32::from(COOKIE_CONSENT_POINTS);
    } else {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::High,
            title: "Implement Cookie Consent",
            description: "Add cookie consent banners to comply with GDPR and other regulations.",
        });
    }

    if answers.user_rights {
        score += u32::from(USER_RIGHTS_POINTS);
    } else {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Medium,
            title: "User Rights Mechanisms",
            description: "Provide ways for users to access, correct, or delete their data.",
        });
    }

    if answers.data_retention {
        score += u32::from(DATA_RETENTION_POINTS);
    } else {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Medium,
            title: "Data Retention Policy",
            description: "Establish clear policies for how long you keep personal data.",
        });
    }

    // Data-deletion support affects the score but has no dedicated
    // recommendation; it is covered by the user-rights suggestion.
    if answers.data_deletion {
        score += u32::from(DATA_DELETION_POINTS);
    }

    if answers.has_sufficient_security() {
        score += u32::from(SECURITY_MEASURES_POINTS);
    } else {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::High,
            title: "Strengthen Security",
            description: "Implement additional security measures to protect personal data.",
        });
    }

    ScoreReport {
        score: score.min(u32::from(MAX_SCORE)) as u8,
        recommendations,
    }
}
