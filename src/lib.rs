/// Best-effort hydration of raw account-data payloads into typed snapshots.
pub mod account;
/// Models for payloads served by the public REST API.
pub mod api;
/// Decoding of shared army-composition links.
pub mod army;
/// Typed game entities (troops, spells, heroes, buildings, ...) and the
/// shared leveled-unit behavior they are built from.
pub mod entities;
/// Error definitions
pub mod error;
/// Game concept types (identifiers, villages, resources, time spans) useful
/// across every module.
pub mod game_types;
/// Generic wrapper for values that may or may not match a known variant.
pub mod recognized;
/// Loading and indexing of the static game-data tables.
pub mod static_data;

#[cfg(feature = "arc")]
pub type Rc<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub type Rc<T> = std::rc::Rc<T>;
