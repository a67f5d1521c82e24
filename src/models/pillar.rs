use serde::Serialize;

/// A top-level strategic grouping label. Projects reference pillars by
/// name only; deleting a pillar leaves its projects pointing at a name
/// that no longer exists, and that is fine.
#[derive(Debug, Clone, Serialize)]
pub struct Pillar {
    pub id: i64,
    pub name: String,
}
