use crate::domain::model::{Item, Restaurant};
use serde::Serialize;

/// Priced breakdown of an order placed against one restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub items: Vec<Item>,
    pub unknown_items: Vec<String>,
    pub total: u64,
}

/// Totals orders by looking item names up on a restaurant's menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    /// Sums the prices of the named items. Names missing from the menu are
    /// skipped; duplicates are counted once per occurrence.
    pub fn calculate_order_value<S: AsRef<str>>(&self, restaurant: &Restaurant, item_names: &[S]) -> u64 {
        item_names
            .iter()
            .filter_map(|name| restaurant.find_item_by_name(name.as_ref()))
            .map(|item| u64::from(item.price()))
            .sum()
    }

    pub fn summarize_order<S: AsRef<str>>(&self, restaurant: &Restaurant, item_names: &[S]) -> OrderSummary {
        let mut summary = OrderSummary {
            items: Vec::with_capacity(item_names.len()),
            unknown_items: Vec::new(),
            total: 0,
        };

        for name in item_names {
            let name = name.as_ref();
            match restaurant.find_item_by_name(name) {
                Some(item) => {
                    summary.total += u64::from(item.price());
                    summary.items.push(item.clone());
                }
                None => {
                    tracing::debug!(restaurant = %restaurant.name(), item = name, "Skipping item not on menu");
                    summary.unknown_items.push(name.to_string());
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn cafe() -> Restaurant {
        let mut restaurant = Restaurant::new(
            "Amelie's cafe",
            "Chennai",
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        );
        restaurant.add_to_menu("Sweet corn soup", 119);
        restaurant.add_to_menu("Vegetable lasagne", 269);
        restaurant
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let service = OrderService::new();
        let total = service.calculate_order_value(&cafe(), &["French fries", "Vegetable lasagne"]);
        assert_eq!(total, 269);
    }

    #[test]
    fn test_duplicate_names_count_each_time() {
        let service = OrderService::new();
        let total = service.calculate_order_value(&cafe(), &["Sweet corn soup", "Sweet corn soup"]);
        assert_eq!(total, 238);
    }

    #[test]
    fn test_accepts_owned_names() {
        let names = vec!["Sweet corn soup".to_string(), "Vegetable lasagne".to_string()];
        assert_eq!(OrderService::new().calculate_order_value(&cafe(), &names), 388);
    }

    #[test]
    fn test_summarize_order() {
        let restaurant = cafe();
        let service = OrderService::new();
        let names = ["Vegetable lasagne", "French fries", "Sweet corn soup"];

        let summary = service.summarize_order(&restaurant, &names);
        assert_eq!(summary.total, 388);
        assert_eq!(summary.total, service.calculate_order_value(&restaurant, &names));
        assert_eq!(
            summary.items,
            vec![Item::new("Vegetable lasagne", 269), Item::new("Sweet corn soup", 119)]
        );
        assert_eq!(summary.unknown_items, vec!["French fries".to_string()]);
    }
}
