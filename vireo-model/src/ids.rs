use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for media items
///
/// The nil value is a sentinel for the "empty identity"; what it resolves to
/// is decided by the owning library graph, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub Uuid);

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::now_v7())
    }

    pub fn nil() -> Self {
        ItemId(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Parse an item id from its textual form.
    ///
    /// Empty input maps to the nil sentinel rather than an error.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        if text.is_empty() {
            return Ok(Self::nil());
        }
        text.parse()
            .map(ItemId)
            .map_err(|_| ModelError::InvalidId(text.to_string()))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for users
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserId(pub Uuid);

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl UserId {
    pub fn new() -> Self {
        UserId(Uuid::now_v7())
    }

    /// Parse a user id from its textual form. Unlike [`ItemId::parse`],
    /// empty input is rejected: there is no anonymous-user convention.
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        if text.is_empty() {
            return Err(ModelError::InvalidId(text.to_string()));
        }
        text.parse()
            .map(UserId)
            .map_err(|_| ModelError::InvalidId(text.to_string()))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for UserId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
