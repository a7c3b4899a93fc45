//! `domainkit` — shared-kernel object model for audited domain entities.
//!
//! This crate contains **pure data shapes** (no persistence, mapping, or IO):
//! capability traits for audit/identity attributes, generic entity base types,
//! and their transfer-object mirrors. A persistence or mapping layer integrates
//! by probing for the capability traits and reacting generically (stamp creation
//! audit on insert, convert hard deletes to soft-delete writes, and so on).

pub mod auditing;
pub mod dto;
pub mod entity;
pub mod error;
pub mod id;

pub use auditing::{
    Audited, CreationAudited, DeletionAudited, FullAudited, HasConcurrencyStamp,
    HasCorrelationId, HasCreationTime, HasDeletionTime, HasModificationTime, HasSessionId,
    HasSnapshotId, MayHaveCreator, MayHaveDeleter, MayHaveModifier, ModificationAudited,
    SoftDelete,
};
pub use dto::{AuditedEntityDto, EntityDto, TransferObject};
pub use entity::{
    AuditedEntity, CreationAuditedEntity, DomainObject, Entity, EntityId, FullAuditedEntity,
    HasId,
};
pub use error::{KernelError, KernelResult};
pub use id::{ActorId, CorrelationId, SessionId, SnapshotId};
