use crate::models::{NationalResource, ResourceCategory};

/// Nationwide resources listed alongside local search results
pub const NATIONAL_RESOURCES: &[NationalResource] = &[
    NationalResource {
        name: "211",
        category: ResourceCategory::SocialServices,
        description: "Free, confidential referrals to local help for food, housing, utilities and more.",
        phone: Some("211"),
        website: "https://www.211.org",
    },
    NationalResource {
        name: "USDA National Hunger Hotline",
        category: ResourceCategory::Food,
        description: "Connects callers with emergency food providers, government programs and social services.",
        phone: Some("1-866-348-6479"),
        website: "https://www.fns.usda.gov/partnerships/national-hunger-clearinghouse",
    },
    NationalResource {
        name: "Feeding America Food Bank Locator",
        category: ResourceCategory::Food,
        description: "Find the member food bank that serves your area.",
        phone: None,
        website: "https://www.feedingamerica.org/find-your-local-foodbank",
    },
    NationalResource {
        name: "HUD Housing Counseling",
        category: ResourceCategory::HousingAndShelter,
        description: "HUD-approved counselors for rental help, foreclosure avoidance and homelessness resources.",
        phone: Some("1-800-569-4287"),
        website: "https://www.hud.gov/findacounselor",
    },
    NationalResource {
        name: "National Domestic Violence Hotline",
        category: ResourceCategory::HousingAndShelter,
        description: "24/7 support, safety planning and referrals to emergency shelter.",
        phone: Some("1-800-799-7233"),
        website: "https://www.thehotline.org",
    },
    NationalResource {
        name: "988 Suicide & Crisis Lifeline",
        category: ResourceCategory::Healthcare,
        description: "24/7 free and confidential support for people in distress.",
        phone: Some("988"),
        website: "https://988lifeline.org",
    },
    NationalResource {
        name: "SAMHSA National Helpline",
        category: ResourceCategory::Healthcare,
        description: "Treatment referral and information for mental health and substance use.",
        phone: Some("1-800-662-4357"),
        website: "https://www.samhsa.gov/find-help/national-helpline",
    },
    NationalResource {
        name: "Find a Health Center (HRSA)",
        category: ResourceCategory::Healthcare,
        description: "Locate federally funded health centers offering care on a sliding fee scale.",
        phone: None,
        website: "https://findahealthcenter.hrsa.gov",
    },
];

/// National resources, optionally restricted to one category, in listing order
pub fn national_resources(category: Option<ResourceCategory>) -> Vec<NationalResource> {
    NATIONAL_RESOURCES
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .cloned()
        .collect()
}
