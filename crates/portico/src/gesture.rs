//! Gesture events and the commands they produce.
//!
//! The host's gesture recognizer reports state changes for the tap handlers
//! attached to screen nodes. Only a gesture that reaches its terminal
//! [`GestureState::End`] state turns into a [`ScreenCommand`]; every
//! intermediate or aborted state is ignored.

use portico_core::ToggleTarget;

use crate::layout::NodeId;

/// Recognition state reported by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// The recognizer has not seen a touch yet.
    #[default]
    Undetermined,
    /// A touch started on the handler.
    Began,
    /// The gesture is in progress.
    Active,
    /// The gesture completed successfully.
    End,
    /// The recognizer rejected the touch sequence.
    Failed,
    /// The touch sequence was interrupted.
    Cancelled,
}

impl GestureState {
    /// Returns `true` for states after which the handler resets.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Failed | Self::Cancelled)
    }
}

/// A state change of the tap handler attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureEvent {
    /// The node whose tap handler changed state.
    pub node: NodeId,
    pub state: GestureState,
}

impl GestureEvent {
    pub fn new(node: NodeId, state: GestureState) -> Self {
        Self { node, state }
    }

    /// A completed tap on `node`.
    pub fn tap(node: NodeId) -> Self {
        Self::new(node, GestureState::End)
    }
}

/// A request the screen controller acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenCommand {
    /// Slide the credentials form into view.
    RevealForm,
    /// Slide the form away and bring back the sign-in buttons.
    HideForm,
}

impl ScreenCommand {
    /// The progress endpoint this command animates toward.
    pub fn target(self) -> ToggleTarget {
        match self {
            Self::RevealForm => ToggleTarget::Hidden,
            Self::HideForm => ToggleTarget::Shown,
        }
    }

    /// Map a gesture event to a command.
    ///
    /// Only completed taps on the "SIGN IN" button and the close button
    /// produce commands.
    pub fn from_gesture(event: GestureEvent) -> Option<Self> {
        if event.state != GestureState::End {
            return None;
        }
        match event.node {
            NodeId::SignInButton => Some(Self::RevealForm),
            NodeId::CloseButton => Some(Self::HideForm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_end_state_produces_command() {
        for state in [
            GestureState::Undetermined,
            GestureState::Began,
            GestureState::Active,
            GestureState::Failed,
            GestureState::Cancelled,
        ] {
            let event = GestureEvent::new(NodeId::SignInButton, state);
            assert_eq!(ScreenCommand::from_gesture(event), None, "{state:?}");
        }
        assert_eq!(
            ScreenCommand::from_gesture(GestureEvent::tap(NodeId::SignInButton)),
            Some(ScreenCommand::RevealForm)
        );
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            ScreenCommand::from_gesture(GestureEvent::tap(NodeId::CloseButton)),
            Some(ScreenCommand::HideForm)
        );
        assert_eq!(
            ScreenCommand::from_gesture(GestureEvent::tap(NodeId::FacebookButton)),
            None
        );
        assert_eq!(ScreenCommand::RevealForm.target(), ToggleTarget::Hidden);
        assert_eq!(ScreenCommand::HideForm.target(), ToggleTarget::Shown);
    }

    #[test]
    fn test_terminal_states() {
        assert!(GestureState::End.is_terminal());
        assert!(GestureState::Cancelled.is_terminal());
        assert!(!GestureState::Active.is_terminal());
    }
}
