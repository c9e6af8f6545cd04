use serde::{Deserialize, Serialize};

/// Storage and visibility domain of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Authored content shared by every usage of a definition
    Content,
    /// Authored settings specific to one usage
    Settings,
    /// Ids of child blocks
    Children,
    /// Id of the parent block
    Parent,
    /// Per-user state for one usage
    UserState,
    /// Aggregate of user state across users
    UserStateSummary,
    /// Per-user preferences shared across usages of a block type
    Preferences,
    /// Per-user information shared across all blocks
    UserInfo,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Content => "content",
            Scope::Settings => "settings",
            Scope::Children => "children",
            Scope::Parent => "parent",
            Scope::UserState => "user_state",
            Scope::UserStateSummary => "user_state_summary",
            Scope::Preferences => "preferences",
            Scope::UserInfo => "user_info",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
