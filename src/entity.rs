//! Entity base types: reusable generic shapes for persisted domain objects.
//!
//! Application code derives its concrete types from these so it does not
//! redeclare identity and audit fields per type. All fields are plain mutable
//! state: construction performs no validation (a default key is accepted;
//! uniqueness and non-defaultness belong to the persistence layer), and no field
//! transition is constrained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auditing::{
    HasCreationTime, HasDeletionTime, HasModificationTime, MayHaveCreator, MayHaveDeleter,
    MayHaveModifier, SoftDelete,
};
use crate::id::ActorId;

/// Bound for identity key types.
///
/// Equality is the minimal contract; `Hash` and `Debug` come along so keys can
/// be used in maps and in diagnostics. Satisfied by the observed key kinds
/// (uuid, signed integer, text) and anything comparable.
pub trait EntityId: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
impl<T: Clone + Eq + core::hash::Hash + core::fmt::Debug> EntityId for T {}

/// Marker: the type is a persisted domain object.
///
/// The keyless contract carries no state, so it is a bare marker here; keyed
/// objects add [`HasId`] on top.
pub trait DomainObject {}

/// Carries a unique identity key.
///
/// The key is mutable by contract (there is no compiler-enforced identity
/// stability); callers that need a stable identity must impose that discipline
/// themselves.
pub trait HasId {
    type Id: EntityId;

    fn id(&self) -> &Self::Id;
    fn set_id(&mut self, id: Self::Id);
}

/// Entity base: identity key only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity<K: EntityId> {
    pub id: K,
}

impl<K: EntityId> Entity<K> {
    /// Create an entity with an explicit key. No validation is performed.
    pub fn new(id: K) -> Self {
        Self { id }
    }
}

impl<K: EntityId> DomainObject for Entity<K> {}

impl<K: EntityId> HasId for Entity<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

/// Entity base with creation audit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationAuditedEntity<K: EntityId> {
    pub id: K,
    pub creation_time: DateTime<Utc>,
    pub creator_id: Option<ActorId>,
}

impl<K: EntityId> CreationAuditedEntity<K> {
    /// Create with an explicit key; audit fields stay at their defaults.
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation_time: DateTime::UNIX_EPOCH,
            creator_id: None,
        }
    }
}

// Hand-written: `DateTime<Utc>` has no `Default`, and the epoch default for
// `creation_time` is part of the contract ("never set" looks like the epoch).
impl<K: EntityId + Default> Default for CreationAuditedEntity<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: EntityId> DomainObject for CreationAuditedEntity<K> {}

impl<K: EntityId> HasId for CreationAuditedEntity<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

impl<K: EntityId> HasCreationTime for CreationAuditedEntity<K> {
    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn set_creation_time(&mut self, time: DateTime<Utc>) {
        self.creation_time = time;
    }
}

impl<K: EntityId> MayHaveCreator for CreationAuditedEntity<K> {
    fn creator_id(&self) -> Option<ActorId> {
        self.creator_id
    }

    fn set_creator_id(&mut self, actor: Option<ActorId>) {
        self.creator_id = actor;
    }
}

/// Entity base with creation and modification audit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditedEntity<K: EntityId> {
    pub id: K,
    pub creation_time: DateTime<Utc>,
    pub creator_id: Option<ActorId>,
    pub last_modification_time: Option<DateTime<Utc>>,
    pub last_modifier_id: Option<ActorId>,
}

impl<K: EntityId> AuditedEntity<K> {
    /// Create with an explicit key; audit fields stay at their defaults.
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation_time: DateTime::UNIX_EPOCH,
            creator_id: None,
            last_modification_time: None,
            last_modifier_id: None,
        }
    }
}

impl<K: EntityId + Default> Default for AuditedEntity<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: EntityId> DomainObject for AuditedEntity<K> {}

impl<K: EntityId> HasId for AuditedEntity<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

impl<K: EntityId> HasCreationTime for AuditedEntity<K> {
    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn set_creation_time(&mut self, time: DateTime<Utc>) {
        self.creation_time = time;
    }
}

impl<K: EntityId> MayHaveCreator for AuditedEntity<K> {
    fn creator_id(&self) -> Option<ActorId> {
        self.creator_id
    }

    fn set_creator_id(&mut self, actor: Option<ActorId>) {
        self.creator_id = actor;
    }
}

impl<K: EntityId> HasModificationTime for AuditedEntity<K> {
    fn last_modification_time(&self) -> Option<DateTime<Utc>> {
        self.last_modification_time
    }

    fn set_last_modification_time(&mut self, time: Option<DateTime<Utc>>) {
        self.last_modification_time = time;
    }
}

impl<K: EntityId> MayHaveModifier for AuditedEntity<K> {
    fn last_modifier_id(&self) -> Option<ActorId> {
        self.last_modifier_id
    }

    fn set_last_modifier_id(&mut self, actor: Option<ActorId>) {
        self.last_modifier_id = actor;
    }
}

/// Entity base with creation, modification, and deletion audit fields.
///
/// `deletion_time` and `deleter_id` are meaningful only while `is_deleted`;
/// restoring is expected to clear all three (caller convention, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAuditedEntity<K: EntityId> {
    pub id: K,
    pub creation_time: DateTime<Utc>,
    pub creator_id: Option<ActorId>,
    pub last_modification_time: Option<DateTime<Utc>>,
    pub last_modifier_id: Option<ActorId>,
    pub is_deleted: bool,
    pub deletion_time: Option<DateTime<Utc>>,
    pub deleter_id: Option<ActorId>,
}

impl<K: EntityId> FullAuditedEntity<K> {
    /// Create with an explicit key; audit fields stay at their defaults.
    pub fn new(id: K) -> Self {
        Self {
            id,
            creation_time: DateTime::UNIX_EPOCH,
            creator_id: None,
            last_modification_time: None,
            last_modifier_id: None,
            is_deleted: false,
            deletion_time: None,
            deleter_id: None,
        }
    }
}

impl<K: EntityId + Default> Default for FullAuditedEntity<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: EntityId> DomainObject for FullAuditedEntity<K> {}

impl<K: EntityId> HasId for FullAuditedEntity<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

impl<K: EntityId> HasCreationTime for FullAuditedEntity<K> {
    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn set_creation_time(&mut self, time: DateTime<Utc>) {
        self.creation_time = time;
    }
}

impl<K: EntityId> MayHaveCreator for FullAuditedEntity<K> {
    fn creator_id(&self) -> Option<ActorId> {
        self.creator_id
    }

    fn set_creator_id(&mut self, actor: Option<ActorId>) {
        self.creator_id = actor;
    }
}

impl<K: EntityId> HasModificationTime for FullAuditedEntity<K> {
    fn last_modification_time(&self) -> Option<DateTime<Utc>> {
        self.last_modification_time
    }

    fn set_last_modification_time(&mut self, time: Option<DateTime<Utc>>) {
        self.last_modification_time = time;
    }
}

impl<K: EntityId> MayHaveModifier for FullAuditedEntity<K> {
    fn last_modifier_id(&self) -> Option<ActorId> {
        self.last_modifier_id
    }

    fn set_last_modifier_id(&mut self, actor: Option<ActorId>) {
        self.last_modifier_id = actor;
    }
}

impl<K: EntityId> SoftDelete for FullAuditedEntity<K> {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

impl<K: EntityId> HasDeletionTime for FullAuditedEntity<K> {
    fn deletion_time(&self) -> Option<DateTime<Utc>> {
        self.deletion_time
    }

    fn set_deletion_time(&mut self, time: Option<DateTime<Utc>>) {
        self.deletion_time = time;
    }
}

impl<K: EntityId> MayHaveDeleter for FullAuditedEntity<K> {
    fn deleter_id(&self) -> Option<ActorId> {
        self.deleter_id
    }

    fn set_deleter_id(&mut self, actor: Option<ActorId>) {
        self.deleter_id = actor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    #[test]
    fn entity_default_yields_default_key() {
        let entity = Entity::<Uuid>::default();
        assert_eq!(entity.id, Uuid::nil());

        let entity = Entity::<i64>::default();
        assert_eq!(entity.id, 0);
    }

    #[test]
    fn entity_accepts_each_observed_key_kind() {
        let uuid = Uuid::now_v7();
        assert_eq!(*Entity::new(uuid).id(), uuid);
        assert_eq!(*Entity::new(42_i32).id(), 42);
        assert_eq!(*Entity::new("order-7".to_string()).id(), "order-7");
    }

    #[test]
    fn entity_key_is_mutable() {
        let mut entity = Entity::<i64>::default();
        entity.set_id(99);
        assert_eq!(*entity.id(), 99);
    }

    #[test]
    fn creation_audited_entity_defaults_to_epoch_and_no_creator() {
        let entity = CreationAuditedEntity::<Uuid>::default();
        assert_eq!(entity.creation_time, DateTime::UNIX_EPOCH);
        assert_eq!(entity.creator_id, None);
    }

    #[test]
    fn audited_entity_defaults_are_all_unset() {
        let entity = AuditedEntity::<i32>::default();
        assert_eq!(entity.id, 0);
        assert_eq!(entity.creation_time, DateTime::UNIX_EPOCH);
        assert_eq!(entity.creator_id, None);
        assert_eq!(entity.last_modification_time, None);
        assert_eq!(entity.last_modifier_id, None);
    }

    #[test]
    fn full_audited_entity_defaults_are_all_unset() {
        let entity = FullAuditedEntity::<Uuid>::default();
        assert_eq!(entity.id, Uuid::nil());
        assert_eq!(entity.creation_time, DateTime::UNIX_EPOCH);
        assert_eq!(entity.creator_id, None);
        assert_eq!(entity.last_modification_time, None);
        assert_eq!(entity.last_modifier_id, None);
        assert!(!entity.is_deleted);
        assert_eq!(entity.deletion_time, None);
        assert_eq!(entity.deleter_id, None);
    }

    #[test]
    fn new_with_explicit_key_leaves_audit_fields_defaulted() {
        let id = Uuid::now_v7();
        let entity = AuditedEntity::new(id);
        assert_eq!(entity.id, id);
        assert_eq!(entity.creation_time, DateTime::UNIX_EPOCH);
        assert_eq!(entity.creator_id, None);
    }

    #[test]
    fn soft_delete_then_restore_returns_to_pre_delete_state() {
        let mut entity = FullAuditedEntity::new(Uuid::now_v7());
        entity.set_creation_time(Utc::now());
        entity.set_creator_id(Some(ActorId::new()));
        let before = entity.clone();

        entity.set_deleted(true);
        entity.set_deletion_time(Some(Utc::now()));
        entity.set_deleter_id(Some(ActorId::new()));
        assert_ne!(entity, before);

        entity.set_deleted(false);
        entity.set_deletion_time(None);
        entity.set_deleter_id(None);
        assert_eq!(entity, before);
    }

    #[test]
    fn audited_entity_serde_round_trips() {
        let mut entity = AuditedEntity::new(Uuid::now_v7());
        entity.set_creation_time(Utc::now());
        entity.set_creator_id(Some(ActorId::new()));

        let json = serde_json::to_string(&entity).unwrap();
        let back: AuditedEntity<Uuid> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }

    proptest! {
        #[test]
        fn integer_keys_round_trip(id: i64) {
            let entity = Entity::new(id);
            prop_assert_eq!(*entity.id(), id);
        }

        #[test]
        fn text_keys_round_trip(id in "[a-z0-9-]{1,32}") {
            let mut entity = Entity::<String>::default();
            entity.set_id(id.clone());
            prop_assert_eq!(entity.id(), &id);
        }
    }
}
