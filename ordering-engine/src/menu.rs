//! Menu selection validation
//!
//! Fail-fast gate ahead of submission: groups are checked in catalog
//! order, and within a group the count check precedes the allowed-option
//! check. The first violation is returned; errors are not aggregated.

use std::collections::BTreeMap;

use shared::models::Menu;
use shared::order::SelectedProduct;
use thiserror::Error;

/// Menu selection violations
///
/// Typed so the UI layer can localize each reason distinctly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuSelectionError {
    #[error("group '{group}': selection count must be between {min} and {max}")]
    CountOutOfRange { group: String, min: u32, max: u32 },

    #[error("group '{group}': selected option is not allowed")]
    OptionNotAllowed { group: String },
}

/// Validate a customer's selections against a menu's option groups.
///
/// `selections` maps group key to the picked options; a group with no
/// entry counts as zero selections. Bounds are inclusive on both ends.
pub fn validate_selections(
    menu: &Menu,
    selections: &BTreeMap<String, Vec<SelectedProduct>>,
) -> Result<(), MenuSelectionError> {
    static EMPTY: Vec<SelectedProduct> = Vec::new();

    for group in &menu.groups {
        let picked = selections.get(&group.key).unwrap_or(&EMPTY);

        let count = picked.len() as u32;
        if count < group.min || count > group.max {
            return Err(MenuSelectionError::CountOutOfRange {
                group: group.name.clone(),
                min: group.min,
                max: group.max,
            });
        }

        if picked.iter().any(|s| !group.allows(&s.product_id)) {
            return Err(MenuSelectionError::OptionNotAllowed {
                group: group.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuGroup, Prices};
    use shared::order::ProductCustomization;

    fn test_menu() -> Menu {
        Menu {
            id: "menu-1".to_string(),
            name: "Lunch Menu".to_string(),
            description: None,
            image: None,
            category: "cat-1".to_string(),
            sort_order: 0,
            groups: vec![
                MenuGroup {
                    key: "mains".to_string(),
                    name: "Main".to_string(),
                    min: 1,
                    max: 2,
                    options: vec!["prod-1".to_string(), "prod-2".to_string()],
                },
                MenuGroup {
                    key: "drinks".to_string(),
                    name: "Drink".to_string(),
                    min: 0,
                    max: 1,
                    options: vec!["prod-9".to_string()],
                },
            ],
            prices: Prices {
                pickup_cents: Some(990),
                delivery_cents: Some(1090),
            },
            is_active: true,
        }
    }

    fn pick(ids: &[&str]) -> Vec<SelectedProduct> {
        ids.iter()
            .map(|id| SelectedProduct {
                product_id: (*id).to_string(),
                customization: ProductCustomization::default(),
            })
            .collect()
    }

    #[test]
    fn zero_selections_below_min_is_count_error() {
        let menu = test_menu();
        let selections = BTreeMap::new();
        assert_eq!(
            validate_selections(&menu, &selections),
            Err(MenuSelectionError::CountOutOfRange {
                group: "Main".to_string(),
                min: 1,
                max: 2,
            })
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let menu = test_menu();

        let mut one = BTreeMap::new();
        one.insert("mains".to_string(), pick(&["prod-1"]));
        assert!(validate_selections(&menu, &one).is_ok());

        let mut two = BTreeMap::new();
        two.insert("mains".to_string(), pick(&["prod-1", "prod-2"]));
        assert!(validate_selections(&menu, &two).is_ok());
    }

    #[test]
    fn too_many_selections_is_count_error() {
        let menu = test_menu();
        let mut selections = BTreeMap::new();
        selections.insert("mains".to_string(), pick(&["prod-1", "prod-2", "prod-1"]));
        assert!(matches!(
            validate_selections(&menu, &selections),
            Err(MenuSelectionError::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn disallowed_option_is_reported() {
        let menu = test_menu();
        let mut selections = BTreeMap::new();
        selections.insert("mains".to_string(), pick(&["prod-7"]));
        assert_eq!(
            validate_selections(&menu, &selections),
            Err(MenuSelectionError::OptionNotAllowed {
                group: "Main".to_string(),
            })
        );
    }

    #[test]
    fn count_check_precedes_option_check() {
        // Three picks, all disallowed: the count violation wins.
        let menu = test_menu();
        let mut selections = BTreeMap::new();
        selections.insert("mains".to_string(), pick(&["x", "y", "z"]));
        assert!(matches!(
            validate_selections(&menu, &selections),
            Err(MenuSelectionError::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn groups_are_checked_in_catalog_order() {
        // Both groups violated; the first catalog group is reported.
        let menu = test_menu();
        let mut selections = BTreeMap::new();
        selections.insert("drinks".to_string(), pick(&["prod-9", "prod-9"]));
        let err = validate_selections(&menu, &selections).unwrap_err();
        assert_eq!(
            err,
            MenuSelectionError::CountOutOfRange {
                group: "Main".to_string(),
                min: 1,
                max: 2,
            }
        );
    }

    #[test]
    fn optional_group_may_be_absent() {
        let menu = test_menu();
        let mut selections = BTreeMap::new();
        selections.insert("mains".to_string(), pick(&["prod-2"]));
        // "drinks" has min=0 and no entry: valid.
        assert!(validate_selections(&menu, &selections).is_ok());
    }
}
