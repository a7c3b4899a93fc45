//! Transfer-object base types.
//!
//! Structural mirrors of the entity bases for the transfer boundary, so callers
//! can expose persisted data without coupling to the entity types. Mapping
//! between the two sides is an external collaborator's job; nothing here copies
//! fields or serializes beyond the serde derives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auditing::{HasCreationTime, HasModificationTime, MayHaveCreator, MayHaveModifier};
use crate::entity::{EntityId, HasId};
use crate::id::ActorId;

/// Marker: the type is a transfer-object representation.
pub trait TransferObject {}

/// Transfer object base: identity key only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityDto<K: EntityId> {
    pub id: K,
}

impl<K: EntityId> EntityDto<K> {
    pub fn new(id: K) -> Self {
        Self { id }
    }
}

impl<K: EntityId> TransferObject for EntityDto<K> {}

impl<K: EntityId> HasId for EntityDto<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

/// Transfer object base with creation and modification audit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditedEntityDto<K: EntityId> {
    pub id: K,
    pub creation_time: DateTime<Utc>,
    pub creator_id: Option<ActorId>,
    pub last_modification_time: Option<DateTime<Utc>>,
    pub last_modifier_id: Option<ActorId>,
}

impl<K: EntityId> AuditedEntityDto<K> {
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

// Same epoch default as the entity side; `DateTime<Utc>` has no `Default`.
impl<K: EntityId + Default> Default for AuditedEntityDto<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: EntityId> TransferObject for AuditedEntityDto<K> {}

impl<K: EntityId> HasId for AuditedEntityDto<K> {
    type Id = K;

    fn id(&self) -> &K {
        &self.id
    }

    fn set_id(&mut self, id: K) {
        self.id = id;
    }
}

impl<K: EntityId> HasCreationTime for AuditedEntityDto<K> {
    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn set_creation_time(&mut self, time: DateTime<Utc>) {
        self.creation_time = time;
    }
}

impl<K: EntityId> MayHaveCreator for AuditedEntityDto<K> {
    fn creator_id(&self) -> Option<ActorId> {
        self.creator_id
    }

    fn set_creator_id(&mut self, actor: Option<ActorId>) {
        self.creator_id = actor;
    }
}

impl<K: EntityId> HasModificationTime for AuditedEntityDto<K> {
    fn last_modification_time(&self) -> Option<DateTime<Utc>> {
        self.last_modification_time
    }

    fn set_last_modification_time(&mut self, time: Option<DateTime<Utc>>) {
        self.last_modification_time = time;
    }
}

impl<K: EntityId> MayHaveModifier for AuditedEntityDto<K> {
    fn last_modifier_id(&self) -> Option<ActorId> {
        self.last_modifier_id
    }

    fn set_last_modifier_id(&mut self, actor: Option<ActorId>) {
        self.last_modifier_id = actor;
    }
}
