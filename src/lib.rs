//! This crate provides the per-message metadata contract of a topic-based
//! publish/subscribe transport: the MessageInfo descriptor handed to
//! subscriber callbacks, the naming rules for topics and partitions, and the
//! in-process delivery hand-off that carries a descriptor across a task
//! boundary.
pub mod delivery;
pub mod error;
pub mod info;
pub mod topic;
