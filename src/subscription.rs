pub mod core;
pub mod lifecycle;
pub mod run_effect;
