use crate::models::{RawFacility, ResourceCategory};

/// A classification rule: the category applies when the predicate holds
pub type CategoryRule = (fn(&RawFacility) -> bool, ResourceCategory);

/// Ordered classification rules; the first matching rule wins
pub const CATEGORY_RULES: &[CategoryRule] = &[
    (is_food, ResourceCategory::Food),
    (is_housing, ResourceCategory::HousingAndShelter),
    (is_healthcare, ResourceCategory::Healthcare),
    (is_community_center, ResourceCategory::CommunityCenter),
];

/// Category used when no rule matches
pub const FALLBACK_CATEGORY: ResourceCategory = ResourceCategory::SocialServices;

/// Assign exactly one category to a facility
pub fn classify(facility: &RawFacility) -> ResourceCategory {
    classify_with(CATEGORY_RULES, facility)
}

/// Assign a category using a custom rule table
pub fn classify_with(rules: &[CategoryRule], facility: &RawFacility) -> ResourceCategory {
    rules
        .iter()
        .find(|(matches, _)| matches(facility))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

fn amenity_is(facility: &RawFacility, values: &[&str]) -> bool {
    facility.tag("amenity").is_some_and(|v| values.contains(&v))
}

fn social_facility_is(facility: &RawFacility, values: &[&str]) -> bool {
    facility.tag("social_facility").is_some_and(|v| values.contains(&v))
}

pub fn is_food(facility: &RawFacility) -> bool {
    amenity_is(facility, &["food_bank"]) || social_facility_is(facility, &["food_bank", "soup_kitchen"])
}

pub fn is_housing(facility: &RawFacility) -> bool {
    amenity_is(facility, &["shelter"])
        || social_facility_is(facility, &["shelter", "group_home", "housing", "assisted_living"])
}

pub fn is_healthcare(facility: &RawFacility) -> bool {
    amenity_is(facility, &["clinic"]) || social_facility_is(facility, &["healthcare", "clinic", "hospice"])
}

pub fn is_community_center(facility: &RawFacility) -> bool {
    amenity_is(facility, &["community_centre"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, ElementKind, Tags};

    fn facility(tags: &[(&str, &str)]) -> RawFacility {
        RawFacility {
            id: 1,
            kind: ElementKind::Node,
            coordinate: Coordinate::new(0.0, 0.0),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Tags>(),
        }
    }

    #[test]
    fn test_food_wins_over_later_rules() {
        // soup kitchen inside a community centre is still listed as Food
        let f = facility(&[("amenity", "community_centre"), ("social_facility", "soup_kitchen")]);
        assert_eq!(classify(&f), ResourceCategory::Food);
    }

    #[test]
    fn test_housing() {
        assert_eq!(classify(&facility(&[("social_facility", "shelter")])), ResourceCategory::HousingAndShelter);
        assert_eq!(classify(&facility(&[("amenity", "shelter")])), ResourceCategory::HousingAndShelter);
        assert_eq!(classify(&facility(&[("social_facility", "group_home")])), ResourceCategory::HousingAndShelter);
    }

    #[test]
    fn test_healthcare() {
        assert_eq!(classify(&facility(&[("social_facility", "hospice")])), ResourceCategory::Healthcare);
        assert_eq!(classify(&facility(&[("amenity", "clinic")])), ResourceCategory::Healthcare);
    }

    #[test]
    fn test_community_center() {
        assert_eq!(classify(&facility(&[("amenity", "community_centre")])), ResourceCategory::CommunityCenter);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify(&facility(&[])), ResourceCategory::SocialServices);
        assert_eq!(
            classify(&facility(&[("amenity", "social_facility"), ("social_facility", "outreach")])),
            ResourceCategory::SocialServices
        );
    }

    #[test]
    fn test_custom_rule_table() {
        let rules: &[CategoryRule] = &[(is_community_center, ResourceCategory::Food)];
        let f = facility(&[("amenity", "community_centre")]);
        assert_eq!(classify_with(rules, &f), ResourceCategory::Food);
        assert_eq!(classify_with(&[], &f), FALLBACK_CATEGORY);
    }
}
