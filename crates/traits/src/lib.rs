pub mod sink;
pub mod unit;

pub use sink::TextSink;
pub use unit::{FormUnits, UnitConverter};
