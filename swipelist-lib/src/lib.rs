//! Core catalog for the swipe-actions list demo.
//!
//! A host list view asks the catalog which contextual actions to show for
//! each row edge, and hands tapped action identifiers back for dispatch.
//! Everything here is plain data and pure lookups; rendering, gesture
//! handling, and modal presentation belong to the host.

pub mod action;
pub mod catalog;
pub mod color;
pub mod item;

pub use action::{AcknowledgementRequest, ActionConfiguration, ActionDescriptor, ActionStyle};
pub use catalog::{ActionSource, Catalog};
pub use color::Rgb;
pub use item::{Edge, RowItem};
