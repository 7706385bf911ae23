//! Line-item calculator
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API function (fetch product quote)
//! - view_model.rs: state, events and commands (no DOM)
//! - binding.rs: wires the view model to the server-rendered form

mod binding;
mod model;
mod view_model;

pub use binding::{bind_calculator, CalculatorBinding};
pub use model::{classify_response, QuoteFetchError};
pub use view_model::{
    CalculatorCommand, CalculatorEvent, CalculatorLayout, CalculatorSettings, CalculatorState,
};
