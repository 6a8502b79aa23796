//! Crawl-hint policies: change frequency and priority per route.
//!
//! Both policies are fixed prefix-match tables evaluated in a set order;
//! the first match wins. A route could match several prefixes, but the
//! order below is part of the contract.

use serde::Serialize;

use crate::core::UrlPath;

/// Sitemap change-frequency hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Change-frequency policy.
///
/// Order: root, products/resources, about, default.
pub fn change_frequency(route: &UrlPath) -> ChangeFrequency {
    if route.is_root() {
        ChangeFrequency::Daily
    } else if route.starts_with("/products/") || route.starts_with("/resources/") {
        ChangeFrequency::Weekly
    } else if route.starts_with("/about/") {
        // Same as the default, but part of the policy table
        ChangeFrequency::Monthly
    } else {
        ChangeFrequency::Monthly
    }
}

/// Priority policy, values in [0, 1].
///
/// Order: root, products, contact (exact), applications, resources, default.
pub fn priority(route: &UrlPath) -> f32 {
    if route.is_root() {
        1.0
    } else if route.starts_with("/products/") {
        0.9
    } else if *route == "/contact/" {
        0.9
    } else if route.starts_with("/applications/") {
        0.8
    } else if route.starts_with("/resources/") {
        0.7
    } else {
        0.6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(path: &str) -> ChangeFrequency {
        change_frequency(&UrlPath::from_page(path))
    }

    fn prio(path: &str) -> f32 {
        priority(&UrlPath::from_page(path))
    }

    #[test]
    fn test_change_frequency_root() {
        assert_eq!(freq("/"), ChangeFrequency::Daily);
    }

    #[test]
    fn test_change_frequency_weekly_sections() {
        assert_eq!(freq("/products/copper-clad-aluminum/"), ChangeFrequency::Weekly);
        assert_eq!(freq("/resources/datasheets/"), ChangeFrequency::Weekly);
    }

    #[test]
    fn test_change_frequency_monthly() {
        assert_eq!(freq("/about/history/"), ChangeFrequency::Monthly);
        // Default for unmatched prefixes
        assert_eq!(freq("/blog/post-1/"), ChangeFrequency::Monthly);
        assert_eq!(freq("/contact/"), ChangeFrequency::Monthly);
    }

    #[test]
    fn test_priority_table() {
        assert_eq!(prio("/"), 1.0);
        assert_eq!(prio("/products/copper-clad-aluminum/"), 0.9);
        assert_eq!(prio("/contact/"), 0.9);
        assert_eq!(prio("/applications/power-cables/"), 0.8);
        assert_eq!(prio("/resources/"), 0.7);
        assert_eq!(prio("/blog/post-1/"), 0.6);
    }

    #[test]
    fn test_priority_contact_is_exact_match() {
        // Only the contact page itself gets the boost
        assert_eq!(prio("/contact/"), 0.9);
        assert_eq!(prio("/contact/form/"), 0.6);
    }

    #[test]
    fn test_policies_total_over_normalized_input() {
        // Unnormalized input is normalized first, so the tables still apply
        assert_eq!(prio("contact"), 0.9);
        assert_eq!(freq("products/x"), ChangeFrequency::Weekly);
    }
}
