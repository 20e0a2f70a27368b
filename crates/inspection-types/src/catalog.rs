//! Static inspection catalog: the category list and the fixed
//! corrective-action phrases.
//!
//! Each category carries an explicit capability record instead of being
//! re-matched by name at every use site, so the sub-item rules live in one
//! place.

/// Per-category configuration, looked up by exact category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    /// A non-empty sub-item is mandatory for finalization.
    pub requires_sub_item: bool,
    /// Fixed choice set offered instead of free text, when present.
    pub sub_item_choices: Option<&'static [&'static str]>,
    /// Fixed value that satisfies the requirement without free text.
    pub sub_item_waiver: Option<&'static str>,
}

impl CategorySpec {
    /// Whether this category still needs a typed sub-item given the current
    /// selection. The waiver value ("Dal" for Roti/Dal, Subzi) is a fixed
    /// choice, not a name to type.
    pub fn needs_sub_item(&self, sub_item: Option<&str>) -> bool {
        if !self.requires_sub_item {
            return false;
        }
        if let (Some(waiver), Some(value)) = (self.sub_item_waiver, sub_item) {
            if value == waiver {
                return false;
            }
        }
        sub_item.map(str::trim).unwrap_or("").is_empty()
    }
}

/// The checklist, one entry per counter, in serving order. Order is part of
/// the report contract: item IDs and analytics rows follow it.
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Breakfast",
        requires_sub_item: false,
        sub_item_choices: None,
        sub_item_waiver: None,
    },
    CategorySpec {
        name: "Roti/Dal, Subzi",
        requires_sub_item: true,
        sub_item_choices: None,
        sub_item_waiver: Some("Dal"),
    },
    CategorySpec {
        name: "Kadhi/Rajma Chawal",
        requires_sub_item: false,
        sub_item_choices: Some(&["Kadhi Chawal", "Rajma Chawal", "Biryani"]),
        sub_item_waiver: None,
    },
    CategorySpec {
        name: "Bread Pakoda/Snacks",
        // Accepts a food name but it is explicitly optional.
        requires_sub_item: false,
        sub_item_choices: None,
        sub_item_waiver: None,
    },
    CategorySpec {
        name: "Dessert",
        requires_sub_item: true,
        sub_item_choices: None,
        sub_item_waiver: None,
    },
    CategorySpec {
        name: "Special Counter",
        requires_sub_item: true,
        sub_item_choices: None,
        sub_item_waiver: None,
    },
    CategorySpec {
        name: "Tea/Coffee",
        requires_sub_item: false,
        sub_item_choices: None,
        sub_item_waiver: None,
    },
];

/// Selectable corrective-action phrases. Composition order in
/// `actions_taken` follows this order.
pub const CORRECTIVE_ACTIONS: &[&str] = &[
    "Informed the counter incharge immediately",
    "Item removed from the counter",
    "Replaced with a fresh batch",
    "Serving temperature corrected",
    "Kitchen team briefed on the issue",
    "Escalated to the kitchen supervisor",
];

/// Look up a category's spec by exact name.
pub fn spec_for(category: &str) -> Option<&'static CategorySpec> {
    CATEGORIES.iter().find(|spec| spec.name == category)
}

/// Category names in catalog order.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|spec| spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_are_unique() {
        let mut names: Vec<_> = category_names().collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn dal_waives_the_roti_dal_subzi_requirement() {
        let spec = spec_for("Roti/Dal, Subzi").unwrap();
        assert!(spec.needs_sub_item(None));
        assert!(spec.needs_sub_item(Some("   ")));
        assert!(!spec.needs_sub_item(Some("Dal")));
        assert!(!spec.needs_sub_item(Some("Aloo Gobi")));
    }

    #[test]
    fn dessert_and_special_counter_require_a_name() {
        for name in ["Dessert", "Special Counter"] {
            let spec = spec_for(name).unwrap();
            assert!(spec.needs_sub_item(None), "{} should require a sub-item", name);
            assert!(!spec.needs_sub_item(Some("Kheer")));
        }
    }

    #[test]
    fn snacks_counter_is_exempt() {
        let spec = spec_for("Bread Pakoda/Snacks").unwrap();
        assert!(!spec.needs_sub_item(None));
    }

    #[test]
    fn kadhi_rajma_offers_fixed_choices_without_mandatoryness() {
        let spec = spec_for("Kadhi/Rajma Chawal").unwrap();
        assert_eq!(
            spec.sub_item_choices,
            Some(&["Kadhi Chawal", "Rajma Chawal", "Biryani"][..])
        );
        assert!(!spec.needs_sub_item(None));
    }
}
