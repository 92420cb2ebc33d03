//! Experience-category table: the specialty description and the two unconditional
//! benefit phrases for each known category.

use crate::models::proposal::ExperienceCategory;

/// Used for categories outside the known set.
pub const GENERIC_CATEGORY_DESCRIPTION: &str = "design and development";

/// Human-readable specialty, e.g. "UI/UX design". Unknown categories fall back to the
/// generic description rather than failing.
pub fn category_description(category: &ExperienceCategory) -> &'static str {
    match category {
        ExperienceCategory::Website => "website design and development",
        ExperienceCategory::UiUx => "UI/UX design",
        ExperienceCategory::GraphicDesign => "graphic design",
        ExperienceCategory::LogoBranding => "logo design and branding",
        ExperienceCategory::Cms => "content management systems",
        ExperienceCategory::WebappMobile => "web app and mobile app development",
        ExperienceCategory::Development => "web and app development",
        ExperienceCategory::Other(_) => GENERIC_CATEGORY_DESCRIPTION,
    }
}

/// The two benefit phrases always offered for a known category. `None` for `Other`.
pub fn category_benefits(category: &ExperienceCategory) -> Option<[&'static str; 2]> {
    let pair = match category {
        ExperienceCategory::Website => [
            "designing a modern, conversion-focused website that represents your business",
            "delivering fast-loading pages built on a clean, maintainable structure",
        ],
        ExperienceCategory::UiUx => [
            "creating intuitive and user-friendly interfaces that enhance user experience",
            "delivering modern design aesthetics that align with current industry trends",
        ],
        ExperienceCategory::GraphicDesign => [
            "creating visually compelling designs that effectively communicate your brand message",
            "applying careful attention to detail and color theory to create impactful visuals",
        ],
        ExperienceCategory::LogoBranding => [
            "developing a distinctive visual identity that reflects your brand values",
            "ensuring comprehensive brand guidelines to maintain consistency",
        ],
        ExperienceCategory::Cms => [
            "building custom, responsive websites with your preferred CMS",
            "implementing user-friendly admin interfaces for easy content management",
        ],
        ExperienceCategory::WebappMobile => [
            "building scalable web and mobile applications with intuitive user flows",
            "ensuring stable performance and smooth releases across platforms",
        ],
        ExperienceCategory::Development => [
            "writing clean, efficient code that follows best practices",
            "ensuring seamless functionality across all devices and browsers",
        ],
        ExperienceCategory::Other(_) => return None,
    };
    Some(pair)
}
