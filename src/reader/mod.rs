//! Timestamp readers
//!
//! [`WrapClock`] is the production, lock-free reader and the owner of the
//! single [`ZoneUpdater`](crate::zone::ZoneUpdater). [`ReferenceReader`] is
//! the classic interrupt-masking extension, kept as a correctness oracle.

pub mod lockfree;
pub mod mask;
pub mod reference;

// Re-export main types
pub use lockfree::WrapClock;
pub use mask::{CriticalSectionControl, MaskGuard};
pub use reference::ReferenceReader;
