//! Audit capability traits and their composites.
//!
//! Each leaf trait names exactly one capability (one or two stored fields, getter
//! and setter, no behavior). Persistence and mapping layers probe for these traits
//! individually, so they are kept narrow instead of collapsed into one contract.
//! Composite traits are pure unions with blanket impls: implementing the leaves is
//! implementing the composite.

use chrono::{DateTime, Utc};

use crate::id::{ActorId, CorrelationId, SessionId, SnapshotId};

/// Carries the instant the object was created.
///
/// The value is required but defaults to the Unix epoch until a caller (normally
/// the persistence layer, on insert) sets it. The epoch default is therefore
/// indistinguishable from "never set"; callers own that distinction.
pub trait HasCreationTime {
    fn creation_time(&self) -> DateTime<Utc>;
    fn set_creation_time(&mut self, time: DateTime<Utc>);
}

/// May carry a reference to the actor that created the object.
pub trait MayHaveCreator {
    fn creator_id(&self) -> Option<ActorId>;
    fn set_creator_id(&mut self, actor: Option<ActorId>);
}

/// Carries the instant of the most recent update, `None` until the first one.
pub trait HasModificationTime {
    fn last_modification_time(&self) -> Option<DateTime<Utc>>;
    fn set_last_modification_time(&mut self, time: Option<DateTime<Utc>>);
}

/// May carry a reference to the actor behind the most recent update.
pub trait MayHaveModifier {
    fn last_modifier_id(&self) -> Option<ActorId>;
    fn set_last_modifier_id(&mut self, actor: Option<ActorId>);
}

/// Logically deleted via a flag instead of physically removed.
///
/// A persistence layer that sees this capability is expected to convert hard
/// deletes into `set_deleted(true)` writes and filter deleted rows from queries.
pub trait SoftDelete {
    fn is_deleted(&self) -> bool;
    fn set_deleted(&mut self, deleted: bool);
}

/// Carries the instant of the soft delete.
///
/// Only meaningful while `is_deleted()` holds; restoring an object is expected to
/// clear the deletion time as well. That is a caller convention, not enforced here.
pub trait HasDeletionTime: SoftDelete {
    fn deletion_time(&self) -> Option<DateTime<Utc>>;
    fn set_deletion_time(&mut self, time: Option<DateTime<Utc>>);
}

/// May carry a reference to the actor that soft-deleted the object.
pub trait MayHaveDeleter {
    fn deleter_id(&self) -> Option<ActorId>;
    fn set_deleter_id(&mut self, actor: Option<ActorId>);
}

/// Carries an opaque token changed on every update.
///
/// An external optimistic-concurrency check compares stamps by equality and
/// rejects a write on mismatch. The token has no ordering semantics and this
/// crate never compares it.
pub trait HasConcurrencyStamp {
    fn concurrency_stamp(&self) -> Option<&str>;
    fn set_concurrency_stamp(&mut self, stamp: Option<String>);
}

/// Carries the logical operation a change traces back to.
pub trait HasCorrelationId {
    fn correlation_id(&self) -> Option<CorrelationId>;
    fn set_correlation_id(&mut self, id: Option<CorrelationId>);
}

/// Carries the session a change was made under.
pub trait HasSessionId {
    fn session_id(&self) -> Option<SessionId>;
    fn set_session_id(&mut self, id: Option<SessionId>);
}

/// Carries the point-in-time snapshot a change belongs to.
pub trait HasSnapshotId {
    fn snapshot_id(&self) -> Option<SnapshotId>;
    fn set_snapshot_id(&mut self, id: Option<SnapshotId>);
}

/// Creation audit: when and (optionally) by whom the object was created.
pub trait CreationAudited: HasCreationTime + MayHaveCreator {}
impl<T: HasCreationTime + MayHaveCreator> CreationAudited for T {}

/// Modification audit: when and (optionally) by whom the object was last updated.
pub trait ModificationAudited: HasModificationTime + MayHaveModifier {}
impl<T: HasModificationTime + MayHaveModifier> ModificationAudited for T {}

/// Deletion audit: soft-delete flag plus when and by whom.
pub trait DeletionAudited: HasDeletionTime + MayHaveDeleter {}
impl<T: HasDeletionTime + MayHaveDeleter> DeletionAudited for T {}

/// Creation + modification audit.
pub trait Audited: CreationAudited + ModificationAudited {}
impl<T: CreationAudited + ModificationAudited> Audited for T {}

/// Creation + modification + deletion audit.
pub trait FullAudited: Audited + DeletionAudited {}
impl<T: Audited + DeletionAudited> FullAudited for T {}
