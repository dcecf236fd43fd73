// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only store traits the access engine evaluates against.
//!
//! Storage mechanics live outside this crate; implementations adapt
//! whatever backs the production database to these two seams. The engine
//! never writes through them, holds no cache in front of them, and treats
//! every `None` the same way — "absent". An implementation whose backend
//! can fail decides for itself whether a fault maps to absent (denying
//! access) or is surfaced through its own outer error type.

use async_trait::async_trait;
use std::collections::HashSet;

use slate_access_core::{
	AssetId, EpisodeId, ProjectId, ProjectPermission, ProjectRole, SequenceId, ShotId, UserId,
	VersionId, VersionRef,
};

/// Lookup of per-project role assignments and project listings.
#[async_trait]
pub trait PermissionStore: Send + Sync {
	/// All project ids known to the system. Only consulted for admins.
	async fn list_all_project_ids(&self) -> HashSet<ProjectId>;

	/// Every permission record the user holds, across all projects.
	async fn list_permissions_for_user(&self, user_id: UserId) -> Vec<ProjectPermission>;

	/// The user's role on one project, if a record exists.
	///
	/// At most one record exists per (user, project); storage upholds
	/// that invariant.
	async fn find_permission(&self, user_id: UserId, project_id: ProjectId)
		-> Option<ProjectRole>;
}

/// Lookup of parent links in the entity ownership chain.
///
/// Each method is a single hop. A missing row and a row whose parent
/// link is null are both reported as `None`; the resolver stops walking
/// at the first one it meets.
#[async_trait]
pub trait EntityStore: Send + Sync {
	/// The project owning an episode.
	async fn find_episode(&self, id: EpisodeId) -> Option<ProjectId>;

	/// The episode containing a sequence.
	async fn find_sequence(&self, id: SequenceId) -> Option<EpisodeId>;

	/// The sequence containing a shot.
	async fn find_shot(&self, id: ShotId) -> Option<SequenceId>;

	/// The project owning an asset.
	async fn find_asset(&self, id: AssetId) -> Option<ProjectId>;

	/// The polymorphic reference stored on a version.
	async fn find_version(&self, id: VersionId) -> Option<VersionRef>;
}
