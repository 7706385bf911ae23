pub mod calculator;
pub mod stock_badges;
