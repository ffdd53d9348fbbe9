//! Route-scoped scroll position restoration for single-page application views.
//!
//! For host integration utilities (navigation stream, interval scheduler, a ready-made host),
//! see the `scroll-restore-adapter` crate.
//!
//! When the user leaves a view, the scroll offset of its scrollable element is saved under the
//! route being left. When the user comes back, the offset is restored, polling the element until
//! its content is tall enough (or a small retry budget runs out).
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - router lifecycle events ([`NavigationEvent`])
//! - a scrollable element ([`ScrollElement`])
//! - a repeating timer ([`IntervalTimer`]) whose firings are forwarded to the restorer
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod element;
mod key;
mod navigation;
mod options;
mod restorer;
mod store;
mod timer;
mod types;

#[cfg(test)]
mod tests;

pub use element::ScrollElement;
pub use navigation::NavigationPairing;
pub use options::RestorerOptions;
pub use restorer::{RestorationState, ScrollRestorer, TickOutcome};
pub use store::PositionStore;
pub use timer::IntervalTimer;
pub use types::{NavigationEvent, NavigationKind, RouteKey, SavedPosition, TimerId};
