//! emend-workflow: the editorial workflow core
//!
//! This crate holds the state and rules behind the emend editorial UI:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        emend-workflow                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  seed        │ Immutable demo dataset (submissions, pools)   │
//! │  store       │ Override store merged over the seed at read   │
//! │  decision    │ Editor decision keywords → resulting status   │
//! │  visibility  │ (role, status) → tabs, actions, dashboard     │
//! │  timeline    │ Status → progress-track stages                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is an explicit container owned by the application and passed
//! down to views; there is no ambient global state. Mutators are total:
//! unknown ids and unknown decision keywords are ignored, reported through
//! [`Outcome`] rather than an error. Reads always return freshly merged
//! copies; the seed data is never mutated in place.

pub mod decision;
pub mod seed;
pub mod store;
pub mod timeline;
pub mod visibility;

pub use decision::EditorDecision;
pub use seed::{SeedData, DEMO_AUTHOR};
pub use store::{Outcome, WorkflowStore};
pub use timeline::{timeline_for, Stage, Timeline};
pub use visibility::{
    dashboard_submissions, dashboard_visible, editor_actions, visible_tabs, EditorAction, Tab,
};
