//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{EventId, OrganizerId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let event_id: EventId = EventId::new();
//! let organizer_id: OrganizerId = OrganizerId::new();
//!
//! // This would be a compile error:
//! // let wrong: OrganizerId = event_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Event entities (publishable event posts).
pub struct Event;

/// Marker type for Organizer entities (users who own events).
pub struct Organizer;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for Organizer entities.
pub type OrganizerId = Id<Organizer>;
