//! Built-in per-locale site records.
//!
//! One record per locale, fixed at compile time. These are the canonical
//! company/SEO/navigation data for the two site editions; the config file
//! and environment only override the deployment origin, never the records
//! themselves.
//!
//! Invariants (checked by `registry::validate`):
//! - exactly one record per locale
//! - origins are distinct across locales
//! - the navigation *path* set is identical across locales (only the
//!   display names translate)

use serde::Serialize;

use crate::core::Locale;

/// Full metadata record for one locale edition of the site.
#[derive(Debug, Serialize)]
pub struct LocaleSite {
    pub locale: Locale,
    /// Canonical origin for this edition (scheme + host, no trailing slash).
    pub origin: &'static str,
    pub hreflang: &'static str,
    /// Short display name.
    pub name: &'static str,
    /// SEO title.
    pub title: &'static str,
    /// SEO description.
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub company: Company,
    pub social: Social,
    /// Ordered navigation list. Display order is significant.
    pub nav: &'static [NavEntry],
}

/// Company identity block.
#[derive(Debug, Serialize)]
pub struct Company {
    pub legal_name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

/// Social profile links.
#[derive(Debug, Serialize)]
pub struct Social {
    pub linkedin: &'static str,
    pub youtube: &'static str,
}

/// One navigation item: translated display name + locale-independent path.
#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
}

pub(super) static EN: LocaleSite = LocaleSite {
    locale: Locale::En,
    origin: "https://en.raytron.group",
    hreflang: "en",
    name: "Raytron",
    title: "Raytron | Metal Composite Materials Manufacturer",
    description: "Raytron manufactures copper-clad aluminum, copper-clad steel and other \
                  metal composite conductors for power transmission, electronics and \
                  new-energy applications.",
    keywords: &[
        "copper clad aluminum",
        "copper clad steel",
        "CCA wire",
        "metal composite materials",
        "bimetallic conductor",
    ],
    company: Company {
        legal_name: "Suzhou Raytron Advanced Materials Co., Ltd.",
        phone: "+86-512-6809-5517",
        email: "sales@raytron.group",
        street: "88 Jinling East Road",
        city: "Suzhou",
        region: "Jiangsu",
        postal_code: "215143",
        country: "China",
    },
    social: Social {
        linkedin: "https://www.linkedin.com/company/raytron-group",
        youtube: "https://www.youtube.com/@raytron-group",
    },
    nav: &[
        NavEntry {
            name: "Home",
            path: "/",
        },
        NavEntry {
            name: "Products",
            path: "/products/",
        },
        NavEntry {
            name: "Applications",
            path: "/applications/",
        },
        NavEntry {
            name: "Resources",
            path: "/resources/",
        },
        NavEntry {
            name: "About",
            path: "/about/",
        },
        NavEntry {
            name: "Contact",
            path: "/contact/",
        },
    ],
};

pub(super) static ZH_CN: LocaleSite = LocaleSite {
    locale: Locale::ZhCn,
    origin: "https://cn.raytron.group",
    hreflang: "zh-CN",
    name: "瑞创",
    title: "瑞创 | 金属复合材料制造商",
    description: "瑞创专业生产铜包铝、铜包钢等金属复合导体材料，服务于电力传输、电子与新能源行业。",
    keywords: &["铜包铝", "铜包钢", "金属复合材料", "双金属导体", "CCA 线材"],
    company: Company {
        legal_name: "苏州瑞创新材料科技有限公司",
        phone: "+86-512-6809-5517",
        email: "sales@raytron.group",
        street: "金陵东路88号",
        city: "苏州",
        region: "江苏",
        postal_code: "215143",
        country: "中国",
    },
    social: Social {
        linkedin: "https://www.linkedin.com/company/raytron-group",
        youtube: "https://www.youtube.com/@raytron-group",
    },
    nav: &[
        NavEntry {
            name: "首页",
            path: "/",
        },
        NavEntry {
            name: "产品中心",
            path: "/products/",
        },
        NavEntry {
            name: "应用领域",
            path: "/applications/",
        },
        NavEntry {
            name: "资源中心",
            path: "/resources/",
        },
        NavEntry {
            name: "关于我们",
            path: "/about/",
        },
        NavEntry {
            name: "联系我们",
            path: "/contact/",
        },
    ],
};

/// Look up the built-in record for a locale. Total over the closed set.
#[inline]
pub const fn record(locale: Locale) -> &'static LocaleSite {
    match locale {
        Locale::En => &EN,
        Locale::ZhCn => &ZH_CN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SUPPORTED_LOCALES;

    #[test]
    fn test_record_locale_matches_input() {
        for &locale in SUPPORTED_LOCALES {
            assert_eq!(record(locale).locale, locale);
        }
    }

    #[test]
    fn test_origins_distinct() {
        assert_ne!(EN.origin, ZH_CN.origin);
    }

    #[test]
    fn test_nav_paths_identical_across_locales() {
        let en_paths: Vec<&str> = EN.nav.iter().map(|e| e.path).collect();
        let zh_paths: Vec<&str> = ZH_CN.nav.iter().map(|e| e.path).collect();
        assert_eq!(en_paths, zh_paths);
    }

    #[test]
    fn test_nav_display_order_starts_at_home() {
        assert_eq!(EN.nav[0].path, "/");
        assert_eq!(ZH_CN.nav[0].path, "/");
    }

    #[test]
    fn test_hreflang_matches_locale_tag() {
        for &locale in SUPPORTED_LOCALES {
            assert_eq!(record(locale).hreflang, locale.hreflang());
        }
    }
}
