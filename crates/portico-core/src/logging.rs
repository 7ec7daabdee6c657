//! Logging facilities for Portico.
//!
//! Portico uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("portico_core::timing=debug")
//!     .init();
//! ```
//!
//! Clock start/stop and screen commands are logged at `debug`, individual
//! frame ticks and signal emissions at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Timing driver target (clock start/stop, ticks).
    pub const TIMING: &str = "portico_core::timing";
    /// Signal emission target.
    pub const SIGNAL: &str = "portico_core::signal";
    /// Screen controller target.
    pub const SCREEN: &str = "portico::screen";
    /// Configuration loading target.
    pub const CONFIG: &str = "portico::config";
}
