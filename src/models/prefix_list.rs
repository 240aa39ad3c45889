//! AWS managed prefix list data model.

use serde::{Deserialize, Serialize};

/// Display name substituted when the API returns a prefix list without a name.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Represents one managed prefix list as returned by
/// `aws ec2 describe-managed-prefix-lists`.
///
/// Every field is optional: the API omits attributes freely and a record with
/// holes must still deserialize. Field names map onto the PascalCase keys of
/// the JSON response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PrefixList {
    /// Opaque identifier (`pl-...`) of the prefix list.
    pub prefix_list_id: Option<String>,
    /// Display name of the prefix list.
    pub prefix_list_name: Option<String>,
    /// Account id of the owner; AWS-managed lists carry the literal `"AWS"`.
    pub owner_id: Option<String>,
    /// Address family, `IPv4` or `IPv6`.
    pub address_family: Option<String>,
    /// Lifecycle state, e.g. `create-complete`.
    pub state: Option<String>,
    /// Full ARN of the prefix list.
    pub prefix_list_arn: Option<String>,
    /// Maximum number of entries the list can hold.
    pub max_entries: Option<i32>,
    /// Version number of the list contents.
    pub version: Option<i64>,
    /// Resource tags.
    pub tags: Option<Vec<Tag>>,
}

/// Resource tag attached to a prefix list.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl PrefixList {
    /// Usable identifier of this record.
    ///
    /// Returns `None` when the id is absent or an empty string - such records
    /// can never appear in a selection result.
    pub fn id(&self) -> Option<&str> {
        self.prefix_list_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Display name, falling back to [`NAME_PLACEHOLDER`] when absent.
    pub fn display_name(&self) -> &str {
        self.prefix_list_name.as_deref().unwrap_or(NAME_PLACEHOLDER)
    }
}
