//!
//! This module defines MessageInfo, the metadata descriptor attached to every
//! delivered message and handed to subscriber callbacks.
//!

use serde::{Deserialize, Serialize};

/// Routing metadata for a single delivered message.
///
/// The delivery subsystem constructs one instance per delivery, fills it in
/// from its routing tables and passes it to the subscriber callback alongside
/// the deserialized payload. The type performs no validation of its own;
/// legal topic and partition names are the business of the routing layer (see
/// [`crate::topic`]).
///
/// MessageInfo is a plain value: cloning yields a fully independent instance,
/// so an instance crossing a task or thread boundary is cloned, never shared.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageInfo {
    /// In the publisher-subscriber model, a topic is an address where messages
    /// are delivered to and subscribed from.
    topic: String,

    /// Fully-qualified name of the payload's schema/type.
    type_name: String,

    /// Namespacing scope that isolates otherwise-identical topic names.
    partition: String,

    /// Whether the message never left the publishing process.
    #[serde(default)]
    intra_process: bool,
}

impl MessageInfo {
    /// Creates a descriptor with every field set to the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> &str {
        self.topic.as_str()
    }

    /// Replaces the topic. Any string is accepted, including the empty one.
    pub fn set_topic(&mut self, topic: &str) {
        self.topic = topic.to_owned();
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn set_type_name(&mut self, type_name: &str) {
        self.type_name = type_name.to_owned();
    }

    pub fn partition(&self) -> &str {
        self.partition.as_str()
    }

    pub fn set_partition(&mut self, partition: &str) {
        self.partition = partition.to_owned();
    }

    pub fn is_intra_process(&self) -> bool {
        self.intra_process
    }

    pub fn set_intra_process(&mut self, intra_process: bool) {
        self.intra_process = intra_process;
    }

    /// Populates topic and partition from a fully qualified name of the form
    /// `@<partition>@<topic>`.
    ///
    /// Returns false and leaves the descriptor untouched when the input is
    /// not of that form or the topic part is empty.
    pub fn set_topic_and_partition(&mut self, fully_qualified: &str) -> bool {
        match crate::topic::decompose_fully_qualified(fully_qualified) {
            Ok((partition, topic)) => {
                self.partition = partition;
                self.topic = topic;
                true
            }
            Err(_) => false,
        }
    }
}
