use serde::{Deserialize, Serialize};

/// Name of a slice in the aggregate tree.
///
/// The `as_str()` value doubles as the storage key in the per-slice layout
/// and as the field name in the whole-tree layout. Once published, do not
/// rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliceKey {
    Session,
    Users,
    LeaveSummary,
    RecentRequests,
}

impl SliceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Users => "users",
            Self::LeaveSummary => "leaveSummary",
            Self::RecentRequests => "recentRequests",
        }
    }

    /// All slices in tree order.
    pub fn all() -> &'static [SliceKey] {
        &[
            Self::Session,
            Self::Users,
            Self::LeaveSummary,
            Self::RecentRequests,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for SliceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SliceKey;

    #[test]
    fn parse_round_trips_every_key() {
        for key in SliceKey::all() {
            assert_eq!(SliceKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(SliceKey::parse("leave_summary"), None);
    }

    #[test]
    fn serde_name_matches_storage_key() {
        for key in SliceKey::all() {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, serde_json::Value::String(key.as_str().to_string()));
        }
    }
}
