use crate::domain::ports::Clock;
use crate::utils::error::{RestaurantError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, priced menu entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

/// A restaurant with its operating hours and an ordered menu.
///
/// Menu order is insertion order. Item names are not required to be unique;
/// lookups and removals act on the first matching entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    location: String,
    opening_time: NaiveTime,
    closing_time: NaiveTime,
    menu: Vec<Item>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            opening_time,
            closing_time,
            menu: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn opening_time(&self) -> NaiveTime {
        self.opening_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Read-only view of the menu in display order.
    pub fn get_menu(&self) -> &[Item] {
        &self.menu
    }

    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = Item::new(name, price);
        tracing::debug!(restaurant = %self.name, item = %item, "Adding item to menu");
        self.menu.push(item);
    }

    /// Removes the first item named exactly `name` and returns it.
    ///
    /// # Errors
    /// [`RestaurantError::ItemNotFound`] when no item matches; the menu is left untouched.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<Item> {
        let position = self
            .menu
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| RestaurantError::item_not_found(name))?;

        let removed = self.menu.remove(position);
        tracing::debug!(restaurant = %self.name, item = %removed, "Removed item from menu");
        Ok(removed)
    }

    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.menu.iter().find(|item| item.name == name)
    }

    /// Checks the clock's current time of day against the operating hours.
    pub fn is_restaurant_open(&self, clock: &impl Clock) -> bool {
        self.is_open_at(clock.time_of_day())
    }

    /// Both bounds are inclusive. A closing time earlier than the opening
    /// time means the window runs past midnight.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.opening_time <= self.closing_time {
            self.opening_time <= time && time <= self.closing_time
        } else {
            time >= self.opening_time || time <= self.closing_time
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Opening time: {}", self.opening_time)?;
        writeln!(f, "Closing time: {}", self.closing_time)?;
        write!(f, "Menu:")?;
        for item in &self.menu {
            write!(f, "\n{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn cafe() -> Restaurant {
        let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", hms(10, 30, 0), hms(22, 0, 0));
        restaurant.add_to_menu("Sweet corn soup", 119);
        restaurant.add_to_menu("Vegetable lasagne", 269);
        restaurant
    }

    #[test]
    fn test_menu_keeps_insertion_order() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sizzling brownie", 319);

        let names: Vec<&str> = restaurant.get_menu().iter().map(Item::name).collect();
        assert_eq!(names, vec!["Sweet corn soup", "Vegetable lasagne", "Sizzling brownie"]);
    }

    #[test]
    fn test_duplicates_resolve_to_first_match() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sweet corn soup", 150);
        assert_eq!(restaurant.get_menu().len(), 3);
        assert_eq!(restaurant.find_item_by_name("Sweet corn soup").unwrap().price(), 119);

        let removed = restaurant.remove_from_menu("Sweet corn soup").unwrap();
        assert_eq!(removed.price(), 119);
        assert_eq!(restaurant.find_item_by_name("Sweet corn soup").unwrap().price(), 150);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut restaurant = cafe();
        assert!(restaurant.find_item_by_name("sweet corn soup").is_none());
        assert!(restaurant.remove_from_menu("VEGETABLE LASAGNE").is_err());
        assert_eq!(restaurant.get_menu().len(), 2);
    }

    #[test]
    fn test_remove_leaves_other_items_untouched() {
        let mut restaurant = cafe();
        restaurant.add_to_menu("Sizzling brownie", 319);
        restaurant.remove_from_menu("Vegetable lasagne").unwrap();

        assert_eq!(
            restaurant.get_menu(),
            &[Item::new("Sweet corn soup", 119), Item::new("Sizzling brownie", 319)]
        );
    }

    #[test]
    fn test_open_bounds_are_inclusive() {
        let restaurant = cafe();
        assert!(restaurant.is_open_at(hms(10, 30, 0)));
        assert!(restaurant.is_open_at(hms(22, 0, 0)));
        assert!(!restaurant.is_open_at(hms(10, 29, 59)));
        assert!(!restaurant.is_open_at(hms(22, 0, 1)));
    }

    #[test]
    fn test_overnight_hours_wrap_midnight() {
        let bar = Restaurant::new("Night owl", "Chennai", hms(18, 0, 0), hms(2, 0, 0));
        assert!(bar.is_open_at(hms(23, 0, 0)));
        assert!(bar.is_open_at(hms(0, 30, 0)));
        assert!(bar.is_open_at(hms(2, 0, 0)));
        assert!(!bar.is_open_at(hms(12, 0, 0)));
    }

    #[test]
    fn test_display() {
        let restaurant = cafe();
        assert_eq!(Item::new("Sweet corn soup", 119).to_string(), "Sweet corn soup:119");
        assert_eq!(
            restaurant.to_string(),
            "Restaurant: Amelie's cafe\nLocation: Chennai\nOpening time: 10:30:00\nClosing time: 22:00:00\nMenu:\nSweet corn soup:119\nVegetable lasagne:269"
        );
    }
}
