//! Scalar types carried by record fields: calendar dates, wall-clock
//! timestamps, and exact decimal amounts.

mod date;
mod decimal;
mod timestamp;

pub use date::Date;
pub use decimal::Decimal;
pub use timestamp::Timestamp;
