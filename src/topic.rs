//!
//! This module defines the naming rules for topics and partitions. The
//! routing subsystem runs these checks before it populates a MessageInfo;
//! the descriptor itself accepts any string.
//!

use crate::error::MetaError;

/// Upper bound on the byte length of a fully qualified name.
pub const MAX_NAME_LENGTH: usize = 65535;

/// A partition name must not be a bare slash and must not contain `~`,
/// whitespace, consecutive slashes or `@`. The empty string is the default
/// partition and is valid.
pub fn is_valid_partition(partition: &str) -> bool {
    if partition == "/" {
        return false;
    }
    if partition.contains('~') || partition.contains('@') {
        return false;
    }
    if partition.contains(char::is_whitespace) {
        return false;
    }
    if partition.contains("//") {
        return false;
    }
    true
}

/// A topic name obeys the partition rules and additionally must not be empty.
pub fn is_valid_topic(topic: &str) -> bool {
    !topic.is_empty() && is_valid_partition(topic)
}

/// Builds the fully qualified name `@<partition>@<topic>` used to scope a
/// topic under a partition.
///
/// The partition gains a leading slash when non-empty and loses a trailing
/// one; the topic loses a trailing slash and gains a leading one unless it is
/// already absolute.
pub fn fully_qualified_name(partition: &str, topic: &str) -> Result<String, MetaError> {
    if !is_valid_partition(partition) {
        return Err(MetaError::InvalidPartition(partition.to_owned()));
    }
    if !is_valid_topic(topic) {
        return Err(MetaError::InvalidTopic(topic.to_owned()));
    }

    let mut partition = partition.to_owned();
    if !partition.is_empty() && !partition.starts_with('/') {
        partition.insert(0, '/');
    }
    if partition.ends_with('/') {
        partition.pop();
    }

    let mut topic = topic.to_owned();
    if topic.ends_with('/') {
        topic.pop();
    }
    if !topic.starts_with('/') {
        topic.insert(0, '/');
    }

    let name = format!("@{}@{}", partition, topic);
    if name.len() > MAX_NAME_LENGTH {
        return Err(MetaError::NameTooLong(name.len()));
    }
    Ok(name)
}

/// Splits a fully qualified name back into its partition and topic parts.
///
/// The check is on shape only: the name must start with `@`, contain a second
/// `@` and carry a non-empty topic after it.
pub fn decompose_fully_qualified(name: &str) -> Result<(String, String), MetaError> {
    let rest = match name.strip_prefix('@') {
        Some(rest) => rest,
        None => return Err(MetaError::MalformedName(name.to_owned())),
    };
    let (partition, topic) = match rest.split_once('@') {
        Some(parts) => parts,
        None => return Err(MetaError::MalformedName(name.to_owned())),
    };
    if topic.is_empty() {
        return Err(MetaError::MalformedName(name.to_owned()));
    }
    Ok((partition.to_owned(), topic.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_partition() {
        assert_eq!(is_valid_partition(""), true);
        assert_eq!(is_valid_partition("default"), true);
        assert_eq!(is_valid_partition("/robots/sim"), true);

        assert_eq!(is_valid_partition("/"), false);
        assert_eq!(is_valid_partition("~home"), false);
        assert_eq!(is_valid_partition("has space"), false);
        assert_eq!(is_valid_partition("has\ttab"), false);
        assert_eq!(is_valid_partition("a//b"), false);
        assert_eq!(is_valid_partition("a@b"), false);
    }

    #[test]
    fn test_is_valid_topic() {
        assert_eq!(is_valid_topic("/chat"), true);
        assert_eq!(is_valid_topic("chat"), true);

        assert_eq!(is_valid_topic(""), false);
        assert_eq!(is_valid_topic("/"), false);
        assert_eq!(is_valid_topic("/chat room"), false);
        assert_eq!(is_valid_topic("/a//b"), false);
    }

    #[test]
    fn test_fully_qualified_name() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(fully_qualified_name("part", "chat")?, "@/part@/chat");
        assert_eq!(fully_qualified_name("/part/", "/chat/")?, "@/part@/chat");
        assert_eq!(fully_qualified_name("", "/chat")?, "@@/chat");
        Ok(())
    }

    #[test]
    fn test_fully_qualified_name_rejects_invalid() {
        assert_eq!(
            fully_qualified_name("bad part", "/chat"),
            Err(MetaError::InvalidPartition("bad part".to_owned()))
        );
        assert_eq!(
            fully_qualified_name("part", ""),
            Err(MetaError::InvalidTopic("".to_owned()))
        );
        assert_eq!(
            fully_qualified_name("part", "a@b"),
            Err(MetaError::InvalidTopic("a@b".to_owned()))
        );
    }

    #[test]
    fn test_fully_qualified_name_too_long() {
        let topic = "a".repeat(MAX_NAME_LENGTH);
        match fully_qualified_name("part", &topic) {
            Err(MetaError::NameTooLong(len)) => assert_eq!(len > MAX_NAME_LENGTH, true),
            other => panic!("expected NameTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_decompose_fully_qualified() -> Result<(), Box<dyn std::error::Error>> {
        let (partition, topic) = decompose_fully_qualified("@/part@/chat")?;
        assert_eq!(partition, "/part");
        assert_eq!(topic, "/chat");

        let (partition, topic) = decompose_fully_qualified("@@/chat")?;
        assert_eq!(partition, "");
        assert_eq!(topic, "/chat");
        Ok(())
    }

    #[test]
    fn test_decompose_rejects_malformed() {
        for name in ["", "/chat", "@/part", "@/part@", "part@topic"] {
            assert_eq!(
                decompose_fully_qualified(name),
                Err(MetaError::MalformedName(name.to_owned()))
            );
        }
    }

    #[test]
    fn test_compose_decompose_agree() -> Result<(), Box<dyn std::error::Error>> {
        let name = fully_qualified_name("part", "chat")?;
        let (partition, topic) = decompose_fully_qualified(&name)?;
        assert_eq!(partition, "/part");
        assert_eq!(topic, "/chat");
        assert_eq!(fully_qualified_name(&partition, &topic)?, name);
        Ok(())
    }
}
