pub mod money;
pub mod stock;
