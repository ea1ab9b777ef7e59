//! High-level runtime engine settings
//!
//! Behavior switches consumed by the outer layers when running a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub auto_exit: bool, // terminate the process once the run finishes
}
