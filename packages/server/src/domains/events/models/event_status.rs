use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domains::events::error::EventError;

/// EventStatus - lifecycle state lookup row.
///
/// Seeded by migration; `symbol` is the stable key events reference.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventStatus {
    pub symbol: String,
    pub name: String,
    pub description: Option<String>,
    pub sequence: i32,
}

impl EventStatus {
    /// All statuses in display order (for the status chooser).
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, EventError> {
        let statuses = sqlx::query_as::<_, EventStatus>(
            "SELECT * FROM event_statuses ORDER BY sequence",
        )
        .fetch_all(pool)
        .await?;
        Ok(statuses)
    }

    /// Find one status by its symbol.
    pub async fn find_by_symbol(symbol: &str, pool: &PgPool) -> Result<Option<Self>, EventError> {
        let status = sqlx::query_as::<_, EventStatus>(
            "SELECT * FROM event_statuses WHERE symbol = $1",
        )
        .bind(symbol)
        .fetch_optional(pool)
        .await?;
        Ok(status)
    }
}

/// Status symbol enum for type-safe lifecycle handling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventStatusSymbol {
    Draft,
    Unlisted,
    Published,
    Archived,
}

impl EventStatusSymbol {
    /// Drafts are only visible to their organizer.
    pub fn is_public(&self) -> bool {
        matches!(self, EventStatusSymbol::Published | EventStatusSymbol::Unlisted)
    }
}

impl std::fmt::Display for EventStatusSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatusSymbol::Draft => write!(f, "DRAFT"),
            EventStatusSymbol::Unlisted => write!(f, "UNLISTED"),
            EventStatusSymbol::Published => write!(f, "PUBLISHED"),
            EventStatusSymbol::Archived => write!(f, "ARCHIVED"),
        }
    }
}

impl std::str::FromStr for EventStatusSymbol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "DRAFT" => Ok(EventStatusSymbol::Draft),
            "UNLISTED" => Ok(EventStatusSymbol::Unlisted),
            "PUBLISHED" => Ok(EventStatusSymbol::Published),
            "ARCHIVED" => Ok(EventStatusSymbol::Archived),
            _ => Err(anyhow::anyhow!("Invalid event status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_from_str_roundtrip() {
        for symbol in [
            EventStatusSymbol::Draft,
            EventStatusSymbol::Unlisted,
            EventStatusSymbol::Published,
            EventStatusSymbol::Archived,
        ] {
            let parsed = EventStatusSymbol::from_str(&symbol.to_string()).unwrap();
            assert_eq!(parsed, symbol);
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(EventStatusSymbol::from_str("PENDING").is_err());
    }

    #[test]
    fn test_visibility() {
        assert!(!EventStatusSymbol::Draft.is_public());
        assert!(EventStatusSymbol::Published.is_public());
    }
}
