use core::fmt;

/// Opaque workout identifier.
///
/// The single correlation key between a stored record, its list entry and its
/// map marker. Fresh ids are random v4 UUIDs; ids read back from storage are
/// kept verbatim whatever their shape.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a new random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkoutId({})", self.0)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_distinct() {
        let ids: HashSet<WorkoutId> = (0..1_000).map(|_| WorkoutId::generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn legacy_ids_are_kept_verbatim() {
        let id = WorkoutId::from("4812739012");
        assert_eq!(id.as_str(), "4812739012");
        assert_eq!(id.to_string(), "4812739012");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_string() {
        let id = WorkoutId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
