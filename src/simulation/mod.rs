//! Session-scoped simulation input state

mod input;

pub use input::SimulationInput;
