//! Scoped preemption masking

use crate::traits::PreemptionControl;

/// Holds preemption disabled until dropped
///
/// The restore runs on every exit path, including early returns and panics
/// that unwind.
pub struct MaskGuard<'a, P: PreemptionControl> {
    control: &'a P,
    token: Option<P::Token>,
}

impl<'a, P: PreemptionControl> MaskGuard<'a, P> {
    /// Disables preemption through `control`
    pub fn new(control: &'a P) -> Self {
        // SAFETY: the token is restored exactly once, in Drop, and guards
        // are dropped in reverse order of creation.
        let token = unsafe { control.disable() };
        Self {
            control,
            token: Some(token),
        }
    }
}

impl<P: PreemptionControl> Drop for MaskGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            // SAFETY: token came from the matching disable in `new`.
            unsafe { self.control.restore(token) }
        }
    }
}

/// Preemption control backed by the `critical-section` crate
///
/// Uses whatever implementation the final binary registers: interrupt
/// masking on single-core MCUs, a global lock on hosted targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalSectionControl;

impl PreemptionControl for CriticalSectionControl {
    type Token = critical_section::RestoreState;

    unsafe fn disable(&self) -> Self::Token {
        // SAFETY: forwarded contract, paired with `restore`.
        unsafe { critical_section::acquire() }
    }

    unsafe fn restore(&self, token: Self::Token) {
        // SAFETY: forwarded contract, token from the matching `acquire`.
        unsafe { critical_section::release(token) }
    }
}
