//! Prelude module for Portico.
//!
//! ```ignore
//! use portico::prelude::*;
//! ```

pub use crate::config::{RevealConfig, ScreenMetrics, ScreenStyle};
pub use crate::derived::DerivedValues;
pub use crate::geometry::{Color, Point, Rect, Size};
pub use crate::gesture::{GestureEvent, GestureState, ScreenCommand};
pub use crate::layout::{NodeId, NodeKind, SceneLayout};
pub use crate::screen::SignInScreen;

pub use portico_core::{Easing, TickOutcome, TimingPhase, ToggleTarget};
