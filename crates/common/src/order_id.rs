use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a placed order.
///
/// Nothing in the workflow mints one: a priced order leaves pricing without
/// an id, and whatever persists it supplies the UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "6f1c2d3e-4a5b-4c6d-8e7f-901234567890";

    #[test]
    fn displays_as_hyphenated_uuid() {
        let id = OrderId::from_uuid(Uuid::parse_str(RAW).unwrap());
        assert_eq!(id.to_string(), RAW);
    }

    #[test]
    fn json_is_the_bare_uuid_string() {
        let id = OrderId::from_uuid(Uuid::parse_str(RAW).unwrap());

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{RAW}\""));

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_uuid(), id.as_uuid());
    }
}
