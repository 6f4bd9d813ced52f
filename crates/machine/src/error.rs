//! # Errors
//!
//! Failures are confined to machine wiring; stepping and drawing are
//! infallible by design (bad inputs degrade silently, see the façade).

use thiserror::Error;

use crate::component::ComponentId;

/// Errors raised while building or wiring a machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// The producing component has no rotation source to connect from.
    #[error("component {0:?} has no rotation source")]
    NoSource(ComponentId),
    /// The consuming component has no rotation sink to connect to.
    #[error("component {0:?} has no rotation sink")]
    NoSink(ComponentId),
    /// Completing the edge would let rotation feed back into itself.
    #[error("connecting {source:?} to {sink:?} would close a rotation loop")]
    RotationCycle {
        // Raw identifier keeps the public field name `source` while
        // opting out of thiserror's implicit source-field inference,
        // which would require `ComponentId: std::error::Error`.
        r#source: ComponentId,
        sink: ComponentId,
    },
    /// The component id does not name a component of this machine.
    #[error("component {0:?} does not exist")]
    UnknownComponent(ComponentId),
}
