//! Preemption masking capability
//!
//! Only the reference reader needs this. The lock-free reader never masks.

/// Disables preemption and later restores the previous state
///
/// Callers should go through [`MaskGuard`](crate::reader::MaskGuard), which
/// pairs every `disable` with a `restore` on all exit paths.
pub trait PreemptionControl {
    /// Opaque prior state returned by [`disable`](Self::disable)
    type Token;

    /// Disables preemption and returns the prior state
    ///
    /// # Safety
    /// The returned token must be passed to [`restore`](Self::restore)
    /// exactly once, and nested sections must be restored in reverse order.
    unsafe fn disable(&self) -> Self::Token;

    /// Restores the state captured by the matching [`disable`](Self::disable)
    ///
    /// # Safety
    /// `token` must come from the innermost still-open `disable` call on
    /// this control.
    unsafe fn restore(&self, token: Self::Token);
}
