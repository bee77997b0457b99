use chrono::NaiveTime;

/// Source of the current time of day.
pub trait Clock {
    fn time_of_day(&self) -> NaiveTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}
