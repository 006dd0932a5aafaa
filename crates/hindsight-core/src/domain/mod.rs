mod day;
mod series;
mod symbol;

pub use day::TradingDay;
pub use series::{PricePoint, Series};
pub use symbol::Symbol;
