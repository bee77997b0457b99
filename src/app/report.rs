use crate::adapters::{FixedClock, SystemClock};
use crate::domain::model::{Item, Restaurant};
use crate::domain::ports::Clock;
use crate::domain::services::{OrderService, OrderSummary};
use crate::utils::error::Result;
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt::Write as _;

/// What the CLI answers about one restaurant: opening status at a time of day
/// and, when items were named, the priced order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub restaurant: Restaurant,
    pub checked_at: NaiveTime,
    pub open: bool,
    pub removed: Vec<Item>,
    pub order: Option<OrderSummary>,
}

/// `--at` pins the clock; otherwise the local wall clock is used.
pub fn clock_for(at: Option<&str>) -> Result<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match at {
        Some(at) => Box::new(FixedClock::parse(at)?),
        None => Box::new(SystemClock),
    };
    Ok(clock)
}

/// Removes `remove` from the menu in order, then checks the hours and prices `order`.
///
/// # Errors
/// The first name in `remove` missing from the menu aborts with
/// [`RestaurantError::ItemNotFound`](crate::utils::error::RestaurantError::ItemNotFound).
pub fn build_report<S: AsRef<str>>(
    mut restaurant: Restaurant,
    clock: &impl Clock,
    remove: &[S],
    order: &[S],
) -> Result<Report> {
    let mut removed = Vec::with_capacity(remove.len());
    for name in remove {
        removed.push(restaurant.remove_from_menu(name.as_ref())?);
    }

    let checked_at = clock.time_of_day();
    let open = restaurant.is_open_at(checked_at);

    let order = if order.is_empty() {
        None
    } else {
        let summary = OrderService::new().summarize_order(&restaurant, order);
        if !summary.unknown_items.is_empty() {
            tracing::warn!("Not on the menu, skipped: {}", summary.unknown_items.join(", "));
        }
        Some(summary)
    };

    Ok(Report {
        restaurant,
        checked_at,
        open,
        removed,
        order,
    })
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.restaurant);
        let _ = writeln!(out);
        for item in &self.removed {
            let _ = writeln!(out, "Removed from menu: {}", item);
        }
        let status = if self.open { "open" } else { "closed" };
        let _ = writeln!(out, "At {} the restaurant is {}", self.checked_at, status);
        if let Some(order) = &self.order {
            for item in &order.items {
                let _ = writeln!(out, "  {}", item);
            }
            let _ = writeln!(out, "Order total: {}", order.total);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

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

    /// Advances one second on every read.
    struct TickingClock(std::cell::Cell<u32>);

    impl Clock for TickingClock {
        fn time_of_day(&self) -> NaiveTime {
            let secs = self.0.get();
            self.0.set(secs + 1);
            NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap()
        }
    }

    #[test]
    fn test_status_agrees_with_reported_time() {
        let clock = TickingClock(std::cell::Cell::new(22 * 3600));
        let no_names: [&str; 0] = [];

        let report = build_report(cafe(), &clock, &no_names, &no_names).unwrap();
        assert_eq!(report.checked_at.num_seconds_from_midnight(), 22 * 3600);
        assert!(report.open);
    }

    #[test]
    fn test_clock_for_pins_time() {
        let clock = clock_for(Some("09:00:00")).unwrap();
        assert_eq!(clock.time_of_day(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert!(clock_for(Some("9am")).is_err());
        assert!(clock_for(None).is_ok());
    }

    #[test]
    fn test_render_text() {
        let clock = FixedClock::parse("12:00:00").unwrap();
        let report = build_report(cafe(), &clock, &["Sweet corn soup"], &["Vegetable lasagne"]).unwrap();

        let text = report.render_text();
        assert!(text.contains("Removed from menu: Sweet corn soup:119"));
        assert!(text.contains("At 12:00:00 the restaurant is open"));
        assert!(text.contains("  Vegetable lasagne:269\nOrder total: 269"));
    }
}
