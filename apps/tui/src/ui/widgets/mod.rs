pub mod scatter;
pub mod spinner;
pub mod stat_bars;
