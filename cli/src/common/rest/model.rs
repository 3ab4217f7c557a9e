//! # Managed Resource Model
//!
//! File: cli/src/common/rest/model.rs
//!
//! ## Overview
//!
//! Value types describing one node of the management tree as exposed over
//! REST: its description, its children and the operations it supports, each
//! pointing somewhere through a `Link`.
//!
//! The `serde` derives double as the wire contract. Field declaration order
//! is the JSON key order, and absent optional link attributes are omitted
//! rather than written as `null`. Descriptions are written as `null` when
//! missing.
//!
use serde::{Deserialize, Serialize};

/// A managed resource: description, children and (optionally) operations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub description: Option<String>,
    #[serde(default)]
    pub children: Vec<Child>,
    /// `None` means the resource does not list operations at all, which is
    /// different from an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<Operation>>,
}

/// A child resource reachable from its parent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: Link,
}

/// An operation that can be invoked on a resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    #[serde(rename = "operation-name")]
    pub operation_name: String,
    #[serde(rename = "operation-description", default)]
    pub operation_description: Option<String>,
    #[serde(rename = "link")]
    pub operation_link: Link,
}

/// Hyperlink descriptor attached to a child or an operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Resource {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.get_or_insert_with(Vec::new).push(operation);
        self
    }
}

impl AsRef<Resource> for Resource {
    fn as_ref(&self) -> &Resource {
        self
    }
}

impl Child {
    pub fn new(name: impl Into<String>, description: impl Into<String>, link: Link) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            link,
        }
    }
}

impl Operation {
    pub fn new(name: impl Into<String>, description: impl Into<String>, link: Link) -> Self {
        Self {
            operation_name: name.into(),
            operation_description: Some(description.into()),
            operation_link: link,
        }
    }
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_document() {
        let body = r#"{
            "description": "Sites",
            "children": [
                {"name": "classic", "description": null, "link": {"rel": "child", "href": "/mop/portalsites/classic"}}
            ],
            "operations": [
                {"operation-name": "read-resource", "operation-description": "Lists sites",
                 "link": {"href": "/mop/portalsites", "method": "get", "type": "application/json"}}
            ]
        }"#;

        let resource: Resource = serde_json::from_str(body).unwrap();
        assert_eq!(resource.description.as_deref(), Some("Sites"));
        assert_eq!(resource.children[0].name, "classic");
        assert_eq!(resource.children[0].description, None);
        assert_eq!(resource.children[0].link.rel.as_deref(), Some("child"));

        let ops = resource.operations.unwrap();
        assert_eq!(ops[0].operation_name, "read-resource");
        assert_eq!(ops[0].operation_link.method.as_deref(), Some("get"));
        assert_eq!(
            ops[0].operation_link.media_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_missing_children_defaults_to_empty() {
        let resource: Resource = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert!(resource.children.is_empty());
        assert!(resource.operations.is_none());
    }

    #[test]
    fn test_with_operation_creates_list() {
        let resource = Resource::new("root").with_operation(Operation::new(
            "export-resource",
            "Exports",
            Link::new("/root?op=export-resource"),
        ));
        assert_eq!(resource.operations.map(|o| o.len()), Some(1));
    }
}
