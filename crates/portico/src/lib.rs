//! Portico - a gesture-driven sign-in reveal screen.
//!
//! The screen shows a background image with two sign-in buttons at the
//! bottom. Tapping "SIGN IN" pans the background up, fades the buttons out
//! and slides a credentials form into view; tapping the form's close button
//! reverses the animation. Every moving part is derived from a single
//! progress value animated by [`portico_core::TimingDriver`].
//!
//! This crate turns that progress into a layout description. Drawing,
//! hit-testing and text input belong to the host framework, which feeds
//! gesture events and frame timestamps in and reads [`SceneLayout`]s out.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use portico::prelude::*;
//!
//! let mut screen = SignInScreen::mount(RevealConfig::default())?;
//! screen.handle_gesture(GestureEvent::tap(NodeId::SignInButton));
//! screen.tick(Duration::from_millis(300));
//!
//! let layout = screen.layout();
//! let form = layout.node(NodeId::EmailInput).unwrap();
//! assert!(form.opacity > 0.0);
//! # Ok::<(), portico::Error>(())
//! ```

pub mod config;
pub mod derived;
mod error;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod prelude;
pub mod screen;

pub use config::{AnimationConfig, RevealConfig, ScreenMetrics, ScreenStyle};
pub use derived::{DerivedValues, RevealInterpolations};
pub use error::{Error, Result};
pub use gesture::{GestureEvent, GestureState, ScreenCommand};
pub use layout::{LayoutNode, NodeId, NodeKind, SceneLayout, render};
pub use screen::SignInScreen;

/// Animation primitives.
pub mod animation {
    pub use portico_core::*;
}
