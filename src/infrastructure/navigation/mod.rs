//! Page location handling.

mod location_navigator;

pub use location_navigator::LocationNavigator;
