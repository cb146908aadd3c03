use serde::{Deserialize, Serialize};

/// Mentorship profile as stored in the app's profile collection
///
/// Profiles are created and validated upstream (form validation, dedupe by
/// email, sync reconciliation). By the time a profile reaches the ordering
/// engine its `expertise`, `interest` and `email` fields are guaranteed to
/// be present strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub expertise: String,
    pub interest: String,
    #[serde(rename = "expertiseYears", default)]
    pub expertise_years: u32,
    #[serde(rename = "interestYears", default)]
    pub interest_years: u32,
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// A candidate annotated with its match score and draw weight
///
/// Ephemeral: built at the start of one ordering call and discarded once
/// the output permutation is produced. Borrows the profile rather than
/// owning it.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub profile: &'a Profile,
    pub match_score: u32,
    pub weight: u32,
}

/// Points awarded per matched scoring axis
#[derive(Debug, Clone, Copy)]
pub struct AxisWeights {
    /// Awarded when the candidate's expertise overlaps the viewer's interest
    pub expertise: u32,
    /// Awarded when the candidate's interest overlaps the viewer's expertise
    pub interest: u32,
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self {
            expertise: 50,
            interest: 50,
        }
    }
}

/// Score thresholds and the draw weight assigned to each tier
///
/// Thresholds are inclusive: `score >= high_threshold` draws with
/// `high_weight`, `score >= mid_threshold` with `mid_weight`, everything
/// else with `base_weight`. The thresholds are tuned against the axis
/// weights in [`AxisWeights`]; with the defaults a single-axis match
/// already lands in the top tier.
#[derive(Debug, Clone, Copy)]
pub struct WeightTiers {
    pub high_threshold: u32,
    pub mid_threshold: u32,
    pub high_weight: u32,
    pub mid_weight: u32,
    pub base_weight: u32,
}

impl Default for WeightTiers {
    fn default() -> Self {
        Self {
            high_threshold: 50,
            mid_threshold: 25,
            high_weight: 3,
            mid_weight: 2,
            base_weight: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parses_camel_case_document() {
        let doc = r#"{
            "name": "Ada",
            "expertise": "Compilers",
            "interest": "Numerical Analysis",
            "expertiseYears": 12,
            "interestYears": 2,
            "email": "ada@example.com",
            "phoneNumber": "+44 20 7946 0000",
            "location": "London"
        }"#;

        let profile: Profile = serde_json::from_str(doc).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.expertise_years, 12);
        assert_eq!(profile.interest_years, 2);
        assert_eq!(profile.phone_number, "+44 20 7946 0000");
        assert_eq!(profile.location.as_deref(), Some("London"));
    }

    #[test]
    fn test_profile_optional_fields_default() {
        // Older documents predate the years/phone/location fields
        let doc = r#"{
            "name": "Grace",
            "expertise": "Systems",
            "interest": "Teaching",
            "email": "grace@example.com"
        }"#;

        let profile: Profile = serde_json::from_str(doc).unwrap();
        assert_eq!(profile.expertise_years, 0);
        assert_eq!(profile.interest_years, 0);
        assert_eq!(profile.phone_number, "");
        assert_eq!(profile.location, None);
    }

    #[test]
    fn test_default_axis_weights() {
        let axes = AxisWeights::default();
        assert_eq!(axes.expertise, 50);
        assert_eq!(axes.interest, 50);
    }

    #[test]
    fn test_default_tiers() {
        let tiers = WeightTiers::default();
        assert_eq!(tiers.high_threshold, 50);
        assert_eq!(tiers.mid_threshold, 25);
        assert_eq!(tiers.high_weight, 3);
        assert_eq!(tiers.mid_weight, 2);
        assert_eq!(tiers.base_weight, 1);
    }
}
