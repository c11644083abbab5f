//! Legal-document templater.
//!
//! Renders the three supported document kinds (privacy policy, cookie
//! policy, terms of service) as plain text from a [`PolicyConfig`].
//! Rendering is pure: the stamp date is an explicit argument, so rendering
//! twice with the same config and date yields byte-identical output.
//!
//! Each document is a fixed skeleton of numbered sections; the conditional
//! parts (jurisdiction clauses, marketing/analytics bullets, the two
//! mutually exclusive sharing and cookie paragraphs) are small section
//! renderer functions rather than inline branching in one big template.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Kinds and configuration
// ---------------------------------------------------------------------------

/// Jurisdiction label whose selection enables the GDPR rights clause.
pub const JURISDICTION_GDPR: &str = "European Union (GDPR)";
/// Jurisdiction label whose selection enables the CCPA rights clause.
pub const JURISDICTION_CCPA: &str = "California (CCPA)";

/// The three supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Privacy,
    Cookie,
    Terms,
}

impl PolicyKind {
    /// String form as stored in the `generated_policies.policy_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Cookie => "cookie",
            Self::Terms => "terms",
        }
    }

    /// Parse the stored column value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "privacy" => Some(Self::Privacy),
            "cookie" => Some(Self::Cookie),
            "terms" => Some(Self::Terms),
            _ => None,
        }
    }
}

/// Configuration snapshot a document is rendered from.
///
/// Persisted verbatim alongside the rendered text so a policy record always
/// carries the inputs that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    pub company_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub contact_email: String,
    /// Selected regulatory regimes, e.g. `"European Union (GDPR)"`.
    #[serde(default, rename = "jurisdiction")]
    pub jurisdictions: Vec<String>,
    /// Labels of the personal-data categories collected, in display order.
    #[serde(default)]
    pub data_types: Vec<String>,
    #[serde(default)]
    pub cookies: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub third_party_sharing: bool,
}

impl PolicyConfig {
    fn has_jurisdiction(&self, label: &str) -> bool {
        self.jurisdictions.iter().any(|j| j == label)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a document of the given kind, stamped with `today`.
pub fn render(kind: PolicyKind, config: &PolicyConfig, today: NaiveDate) -> String {
    match kind {
        PolicyKind::Privacy => render_privacy_policy(config, today),
        PolicyKind::Cookie => render_cookie_policy(config, today),
        PolicyKind::Terms => render_terms_of_service(config, today),
    }
}

/// Human-readable stamp line, e.g. `Last updated: March 1, 2024`.
fn stamp(today: NaiveDate) -> String {
    format!("Last updated: {}", today.format("%B %-d, %Y"))
}

/// Join a title and pre-rendered section bodies with blank lines between.
fn assemble(title: &str, today: NaiveDate, sections: &[String]) -> String {
    let mut doc = format!("{title}\n\n{}", stamp(today));
    for section in sections {
        doc.push_str("\n\n");
        doc.push_str(section.trim_end());
    }
    doc
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Privacy policy sections
// ---------------------------------------------------------------------------

fn render_privacy_policy(config: &PolicyConfig, today: NaiveDate) -> String {
    assemble(
        "PRIVACY POLICY",
        today,
        &[
            privacy_collection_section(config),
            privacy_usage_section(config),
            privacy_sharing_section(config),
            privacy_security_section(),
            privacy_rights_section(config),
            privacy_cookies_section(config),
            privacy_contact_section(config),
        ],
    )
}

fn privacy_collection_section(config: &PolicyConfig) -> String {
    let data_types = if config.data_types.is_empty() {
        "• Personal identifiers (name, email, phone)".to_string()
    } else {
        bullet_list(&config.data_types)
    };
    format!(
        "1. INFORMATION WE COLLECT\n\n\
         {} (\"we,\" \"our,\" or \"us\") collects the following types of information:\n\n\
         {data_types}",
        config.company_name
    )
}

fn privacy_usage_section(config: &PolicyConfig) -> String {
    let mut section = String::from(
        "2. HOW WE USE YOUR INFORMATION\n\n\
         We use the information we collect to:\n\
         • Provide, operate, and maintain our services\n\
         • Improve, personalize, and expand our services\n\
         • Understand and analyze how you use our services\n\
         • Develop new products, services, features, and functionality",
    );
    if config.marketing {
        section.push_str("\n• Send you marketing and promotional communications");
    }
    if config.analytics {
        section.push_str("\n• Conduct analytics and measurement activities");
    }
    section
}

fn privacy_sharing_section(config: &PolicyConfig) -> String {
    let body = if config.third_party_sharing {
        "We may share your information with third parties in the following situations:\n\
         • With service providers who assist us in operating our business\n\
         • When required by law or to protect our rights\n\
         • In connection with a business transaction"
    } else {
        "We do not sell, trade, or otherwise transfer your personal information to third \
         parties without your consent, except as described in this policy."
    };
    format!("3. SHARING OF INFORMATION\n\n{body}")
}

fn privacy_security_section() -> String {
    "4. DATA SECURITY\n\n\
     We implement appropriate technical and organizational security measures to protect \
     your personal information against unauthorized access, alteration, disclosure, or \
     destruction."
        .to_string()
}

/// The rights section appends the GDPR clause, then the CCPA clause, for each
/// selected jurisdiction. Neither, either, or both may appear.
fn privacy_rights_section(config: &PolicyConfig) -> String {
    let mut clauses = Vec::new();
    if config.has_jurisdiction(JURISDICTION_GDPR) {
        clauses.push(
            "Under GDPR, you have the right to:\n\
             • Access your personal data\n\
             • Rectify inaccurate data\n\
             • Erase your data\n\
             • Restrict processing\n\
             • Data portability\n\
             • Object to processing",
        );
    }
    if config.has_jurisdiction(JURISDICTION_CCPA) {
        clauses.push(
            "Under CCPA, California residents have the right to:\n\
             • Know what personal information is collected\n\
             • Delete personal information\n\
             • Opt-out of the sale of personal information\n\
             • Non-discrimination for exercising rights",
        );
    }
    let mut section = String::from("5. YOUR RIGHTS");
    for clause in clauses {
        section.push_str("\n\n");
        section.push_str(clause);
    }
    section
}

fn privacy_cookies_section(config: &PolicyConfig) -> String {
    let body = if config.cookies {
        "We use cookies and similar tracking technologies to track activity on our service \
         and store certain information. You can control cookies through your browser settings."
    } else {
        "Our website does not use cookies to track users."
    };
    format!("6. COOKIES\n\n{body}")
}

fn privacy_contact_section(config: &PolicyConfig) -> String {
    format!(
        "7. CONTACT US\n\n\
         If you have any questions about this Privacy Policy, please contact us at:\n\
         Email: {}\n\
         Website: {}\n\n\
         This policy is effective as of the date listed above and will remain in effect \
         except with respect to any changes in its provisions in the future.",
        config.contact_email, config.website
    )
}

// ---------------------------------------------------------------------------
// Cookie policy sections
// ---------------------------------------------------------------------------

fn render_cookie_policy(config: &PolicyConfig, today: NaiveDate) -> String {
    assemble(
        "COOKIE POLICY",
        today,
        &[
            cookie_definition_section(),
            cookie_purposes_section(config),
            cookie_types_section(config),
            cookie_management_section(),
            cookie_contact_section(config),
        ],
    )
}

fn cookie_definition_section() -> String {
    "1. WHAT ARE COOKIES\n\n\
     Cookies are small text files that are placed on your computer or mobile device when \
     you visit a website. They are widely used to make websites work more efficiently and \
     provide information to website owners."
        .to_string()
}

fn cookie_purposes_section(config: &PolicyConfig) -> String {
    let mut section = format!(
        "2. HOW WE USE COOKIES\n\n\
         {} uses cookies for the following purposes:\n\n\
         • Essential cookies: Required for the website to function properly",
        config.company_name
    );
    if config.analytics {
        section.push_str("\n• Analytics cookies: Help us understand how visitors use our website");
    }
    if config.marketing {
        section.push_str("\n• Marketing cookies: Used to deliver personalized advertisements");
    }
    section
}

fn cookie_types_section(config: &PolicyConfig) -> String {
    let mut section = String::from(
        "3. TYPES OF COOKIES WE USE\n\n\
         • Session cookies: Temporary cookies that expire when you close your browser\n\
         • Persistent cookies: Remain on your device for a specified period",
    );
    if config.third_party_sharing {
        section.push_str("\n• Third-party cookies: Set by external services we use on our site");
    }
    section
}

fn cookie_management_section() -> String {
    "4. MANAGING COOKIES\n\n\
     You can control and manage cookies in various ways:\n\
     • Browser settings: Most browsers allow you to refuse cookies\n\
     • Opt-out tools: Use industry opt-out mechanisms\n\
     • Cookie preferences: Use our cookie preference center"
        .to_string()
}

fn cookie_contact_section(config: &PolicyConfig) -> String {
    format!(
        "5. CONTACT US\n\n\
         For questions about our use of cookies, contact us at: {}",
        config.contact_email
    )
}

// ---------------------------------------------------------------------------
// Terms of service sections
// ---------------------------------------------------------------------------

/// The terms document has no conditional branches: it is parameterized by
/// company name and contact email only.
fn render_terms_of_service(config: &PolicyConfig, today: NaiveDate) -> String {
    assemble(
        "TERMS OF SERVICE",
        today,
        &[
            format!(
                "1. ACCEPTANCE OF TERMS\n\n\
                 By accessing and using {}'s services, you accept and agree to be bound by \
                 the terms and provision of this agreement.",
                config.company_name
            ),
            format!(
                "2. SERVICES\n\n\
                 {} provides [describe your services here]. We reserve the right to modify \
                 or discontinue our services at any time.",
                config.company_name
            ),
            "3. USER RESPONSIBILITIES\n\n\
             You agree to:\n\
             • Use our services lawfully and responsibly\n\
             • Maintain the security of your account\n\
             • Respect intellectual property rights\n\
             • Not engage in prohibited activities"
                .to_string(),
            "4. PRIVACY\n\n\
             Your privacy is important to us. Please review our Privacy Policy, which also \
             governs your use of our services."
                .to_string(),
            format!(
                "5. LIMITATION OF LIABILITY\n\n\
                 {} shall not be liable for any indirect, incidental, special, \
                 consequential, or punitive damages.",
                config.company_name
            ),
            "6. GOVERNING LAW\n\n\
             These terms are governed by the laws of [your jurisdiction]."
                .to_string(),
            format!(
                "7. CONTACT INFORMATION\n\n\
                 For questions about these Terms of Service, contact us at: {}",
                config.contact_email
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn acme_config() -> PolicyConfig {
        PolicyConfig {
            company_name: "Acme".into(),
            website: "https://acme.example".into(),
            contact_email: "privacy@acme.example".into(),
            jurisdictions: vec![JURISDICTION_CCPA.into()],
            data_types: vec!["Email addresses".into(), "Usage data".into()],
            cookies: false,
            analytics: true,
            marketing: false,
            third_party_sharing: false,
        }
    }

    // -- Determinism --

    #[test]
    fn rendering_is_idempotent_with_a_fixed_date() {
        let config = acme_config();
        for kind in [PolicyKind::Privacy, PolicyKind::Cookie, PolicyKind::Terms] {
            let first = render(kind, &config, fixed_date());
            let second = render(kind, &config, fixed_date());
            assert_eq!(first, second, "{kind:?} should render byte-identically");
        }
    }

    #[test]
    fn stamp_uses_the_injected_date() {
        let doc = render(PolicyKind::Terms, &acme_config(), fixed_date());
        assert!(doc.contains("Last updated: March 1, 2024"));
    }

    // -- Privacy policy conditionals --

    #[test]
    fn ccpa_only_config_gets_ccpa_clause_but_not_gdpr() {
        let doc = render(PolicyKind::Privacy, &acme_config(), fixed_date());
        assert!(doc.contains("Under CCPA, California residents have the right to:"));
        assert!(!doc.contains("Under GDPR"));
    }

    #[test]
    fn gdpr_clause_precedes_ccpa_clause_when_both_selected() {
        let mut config = acme_config();
        config.jurisdictions = vec![JURISDICTION_CCPA.into(), JURISDICTION_GDPR.into()];
        let doc = render(PolicyKind::Privacy, &config, fixed_date());
        let gdpr = doc.find("Under GDPR").expect("GDPR clause present");
        let ccpa = doc.find("Under CCPA").expect("CCPA clause present");
        assert!(gdpr < ccpa, "GDPR block must come first regardless of selection order");
    }

    #[test]
    fn rights_section_survives_with_no_jurisdictions() {
        let mut config = acme_config();
        config.jurisdictions.clear();
        let doc = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(doc.contains("5. YOUR RIGHTS"));
        assert!(!doc.contains("Under GDPR"));
        assert!(!doc.contains("Under CCPA"));
    }

    #[test]
    fn cookieless_config_states_no_cookie_tracking() {
        let doc = render(PolicyKind::Privacy, &acme_config(), fixed_date());
        assert!(doc.contains("does not use cookies"));
        assert!(!doc.contains("similar tracking technologies"));
    }

    #[test]
    fn cookie_config_renders_the_tracking_paragraph() {
        let mut config = acme_config();
        config.cookies = true;
        let doc = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(doc.contains("similar tracking technologies"));
        assert!(!doc.contains("does not use cookies"));
    }

    #[test]
    fn sharing_paragraphs_are_mutually_exclusive() {
        let mut config = acme_config();
        let without = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(without.contains("We do not sell, trade, or otherwise transfer"));

        config.third_party_sharing = true;
        let with = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(with.contains("With service providers who assist us"));
        assert!(!with.contains("We do not sell, trade, or otherwise transfer"));
    }

    #[test]
    fn usage_section_appends_marketing_and_analytics_lines() {
        let mut config = acme_config();
        config.marketing = true;
        config.analytics = true;
        let doc = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(doc.contains("• Send you marketing and promotional communications"));
        assert!(doc.contains("• Conduct analytics and measurement activities"));
    }

    #[test]
    fn empty_data_types_fall_back_to_the_default_bullet() {
        let mut config = acme_config();
        config.data_types.clear();
        let doc = render(PolicyKind::Privacy, &config, fixed_date());
        assert!(doc.contains("• Personal identifiers (name, email, phone)"));
    }

    // -- Cookie policy conditionals --

    #[test]
    fn cookie_policy_appends_conditional_bullets() {
        let mut config = acme_config();
        config.marketing = true;
        config.third_party_sharing = true;
        let doc = render(PolicyKind::Cookie, &config, fixed_date());
        assert!(doc.contains("• Analytics cookies:"));
        assert!(doc.contains("• Marketing cookies:"));
        assert!(doc.contains("• Third-party cookies:"));
    }

    #[test]
    fn cookie_policy_omits_disabled_bullets() {
        let mut config = acme_config();
        config.analytics = false;
        let doc = render(PolicyKind::Cookie, &config, fixed_date());
        assert!(!doc.contains("• Analytics cookies:"));
        assert!(!doc.contains("• Marketing cookies:"));
        assert!(!doc.contains("• Third-party cookies:"));
        // The essential bullet is always present.
        assert!(doc.contains("• Essential cookies:"));
    }

    // -- Terms of service --

    #[test]
    fn terms_are_parameterized_by_company_and_email_only() {
        let mut a = acme_config();
        let mut b = PolicyConfig {
            company_name: a.company_name.clone(),
            contact_email: a.contact_email.clone(),
            ..PolicyConfig::default()
        };
        // Flipping every boolean and list must not change the terms output.
        a.cookies = true;
        a.marketing = true;
        b.third_party_sharing = false;
        assert_eq!(
            render(PolicyKind::Terms, &a, fixed_date()),
            render(PolicyKind::Terms, &b, fixed_date())
        );
    }

    // -- Kind parsing --

    #[test]
    fn policy_kind_round_trip() {
        for kind in [PolicyKind::Privacy, PolicyKind::Cookie, PolicyKind::Terms] {
            assert_eq!(PolicyKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PolicyKind::parse("eula"), None);
    }
}
