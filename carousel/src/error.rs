/// Errors returned by centering requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CenterError {
    /// The requested index has no entry in the position table.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The shared engine is already borrowed (re-entrant call from a host callback).
    ///
    /// [`crate::CenteringEngine`] never returns this; it is raised by adapters that share the
    /// engine behind a `RefCell`, so both failure kinds reach the caller as one type.
    #[error("centering engine is busy")]
    EngineBusy,
}

pub type Result<T, E = CenterError> = core::result::Result<T, E>;
