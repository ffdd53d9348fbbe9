//! Host integration utilities for the `scroll-restore` crate.
//!
//! The `scroll-restore` crate holds the save/restore state machine and consumes its collaborators
//! through traits. This crate provides small, framework-neutral implementations of those
//! collaborators and a host that wires them together:
//!
//! - A navigation event stream with idempotent unsubscribe
//! - An adapter-driven interval scheduler (no real clock, no rendering involvement)
//! - An in-memory scroll container for headless hosts and tests
//!
//! This crate is intentionally framework-agnostic (no DOM or web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod element;
mod host;
mod scheduler;
mod stream;


pub use element::MemoryElement;
pub use host::{Host, ViewId};
pub use scheduler::IntervalScheduler;
pub use stream::{NavigationStream, SubscriptionId};
