#[cfg(test)]
#[path = "fault_test.rs"]
mod fault_test;

/// Lifecycle of a render error boundary for one mount.
///
/// `Errored` is terminal: the only way back to `Ok` is remounting the
/// subtree from a fresh parent render (e.g. a key change).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FaultState {
    #[default]
    Ok,
    Errored(String),
}

impl FaultState {
    /// Record a render error. The first error wins; later errors from the
    /// same broken subtree do not replace it.
    pub fn trip(&mut self, message: String) {
        if matches!(self, Self::Ok) {
            *self = Self::Errored(message);
        }
    }

    /// The captured error message, if the boundary has tripped.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok => None,
            Self::Errored(message) => Some(message),
        }
    }
}
