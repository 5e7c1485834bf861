// ABOUTME: Keyword policy tables for free-text technology inference
// ABOUTME: Ordered rules matched case-insensitively against multi-select answers

use architect_core::utils::any_contains_ignore_case;

/// One ordered rule: if any answer contains any keyword, recommend `recommendation`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub recommendation: &'static str,
}

/// Ordered rules plus the recommendation used when no rule matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordPolicy {
    pub rules: &'static [KeywordRule],
    pub fallback: &'static str,
}

/// Video outranks images.
pub const STORAGE_POLICY: KeywordPolicy = KeywordPolicy {
    rules: &[
        KeywordRule {
            keywords: &["video"],
            recommendation: "AWS S3 or Cloudinary (with video optimization)",
        },
        KeywordRule {
            keywords: &["image"],
            recommendation: "Cloudinary or Supabase Storage (with image optimization)",
        },
    ],
    fallback: "Supabase Storage or AWS S3",
};

/// Chat or collaboration outranks notification-only.
pub const REALTIME_POLICY: KeywordPolicy = KeywordPolicy {
    rules: &[
        KeywordRule {
            keywords: &["chat", "collaboration", "real-time"],
            recommendation: "Supabase Realtime",
        },
        KeywordRule {
            keywords: &["notification"],
            recommendation: "Novu for notifications or Pusher for real-time updates",
        },
    ],
    fallback: "Supabase Realtime",
};

impl KeywordRule {
    pub fn matches(&self, values: &[String]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| any_contains_ignore_case(values, keyword))
    }
}

impl KeywordPolicy {
    /// First matching rule's recommendation, if any
    pub fn first_match(&self, values: &[String]) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(values))
            .map(|rule| rule.recommendation)
    }

    /// First matching recommendation, or the fallback
    pub fn recommend(&self, values: &[String]) -> &'static str {
        self.first_match(values).unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["Product Images", "Demo VIDEOS"], "AWS S3 or Cloudinary (with video optimization)")]
    #[case(&["profile-image"], "Cloudinary or Supabase Storage (with image optimization)")]
    #[case(&["documents"], "Supabase Storage or AWS S3")]
    fn test_storage_policy(#[case] uploads: &[&str], #[case] expected: &str) {
        assert_eq!(STORAGE_POLICY.recommend(&values(uploads)), expected);
    }

    #[rstest]
    #[case(&["push-notifications", "team chat"], "Supabase Realtime")]
    #[case(&["Real-Time cursors"], "Supabase Realtime")]
    #[case(&["notifications"], "Novu for notifications or Pusher for real-time updates")]
    #[case(&["live-updates"], "Supabase Realtime")]
    fn test_realtime_policy(#[case] features: &[&str], #[case] expected: &str) {
        assert_eq!(REALTIME_POLICY.recommend(&values(features)), expected);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(STORAGE_POLICY.first_match(&values(&["pdf"])), None);
        assert_eq!(REALTIME_POLICY.first_match(&[]), None);
    }
}
