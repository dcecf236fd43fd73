// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory store implementation.
//!
//! Backs both store traits with plain hash maps. Used by the test suites
//! in this crate and suitable for embedding the engine without a database
//! (demos, single-process tools). Parent links are stored as written,
//! including null ones, so broken chains behave exactly as they do
//! against a real backend.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use slate_access_core::{
	AssetId, EpisodeId, ProjectId, ProjectPermission, ProjectRole, SequenceId, ShotId, UserId,
	VersionId, VersionRef,
};

use crate::store::{EntityStore, PermissionStore};

#[derive(Debug, Default)]
struct Inner {
	projects: HashSet<ProjectId>,
	episodes: HashMap<EpisodeId, Option<ProjectId>>,
	sequences: HashMap<SequenceId, Option<EpisodeId>>,
	shots: HashMap<ShotId, Option<SequenceId>>,
	assets: HashMap<AssetId, Option<ProjectId>>,
	versions: HashMap<VersionId, VersionRef>,
	permissions: HashMap<(UserId, ProjectId), ProjectPermission>,
}

/// Hash-map backed implementation of [`PermissionStore`] and [`EntityStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a project.
	pub async fn insert_project(&self, id: ProjectId) {
		self.inner.write().await.projects.insert(id);
	}

	/// Registers an episode with its owning project, or a null link.
	pub async fn insert_episode(&self, id: EpisodeId, project_id: Option<ProjectId>) {
		self.inner.write().await.episodes.insert(id, project_id);
	}

	/// Registers a sequence with its containing episode, or a null link.
	pub async fn insert_sequence(&self, id: SequenceId, episode_id: Option<EpisodeId>) {
		self.inner.write().await.sequences.insert(id, episode_id);
	}

	/// Registers a shot with its containing sequence, or a null link.
	pub async fn insert_shot(&self, id: ShotId, sequence_id: Option<SequenceId>) {
		self.inner.write().await.shots.insert(id, sequence_id);
	}

	/// Registers an asset with its owning project, or a null link.
	pub async fn insert_asset(&self, id: AssetId, project_id: Option<ProjectId>) {
		self.inner.write().await.assets.insert(id, project_id);
	}

	/// Registers a version with its polymorphic reference.
	pub async fn insert_version(&self, id: VersionId, reference: VersionRef) {
		self.inner.write().await.versions.insert(id, reference);
	}

	/// Grants a role on a project, replacing any existing grant.
	///
	/// Keying on (user, project) keeps the one-record-per-pair invariant
	/// by construction.
	pub async fn grant(&self, user_id: UserId, project_id: ProjectId, role: ProjectRole) {
		self.inner.write().await.permissions.insert(
			(user_id, project_id),
			ProjectPermission::new(user_id, project_id, role),
		);
	}

	/// Removes a user's grant on a project, if present.
	pub async fn revoke(&self, user_id: UserId, project_id: ProjectId) {
		self.inner
			.write()
			.await
			.permissions
			.remove(&(user_id, project_id));
	}
}

#[async_trait]
impl PermissionStore for MemoryStore {
	async fn list_all_project_ids(&self) -> HashSet<ProjectId> {
		self.inner.read().await.projects.clone()
	}

	async fn list_permissions_for_user(&self, user_id: UserId) -> Vec<ProjectPermission> {
		self.inner
			.read()
			.await
			.permissions
			.values()
			.filter(|permission| permission.user_id == user_id)
			.cloned()
			.collect()
	}

	async fn find_permission(
		&self,
		user_id: UserId,
		project_id: ProjectId,
	) -> Option<ProjectRole> {
		self.inner
			.read()
			.await
			.permissions
			.get(&(user_id, project_id))
			.map(|permission| permission.role)
	}
}

#[async_trait]
impl EntityStore for MemoryStore {
	async fn find_episode(&self, id: EpisodeId) -> Option<ProjectId> {
		self.inner.read().await.episodes.get(&id).copied().flatten()
	}

	async fn find_sequence(&self, id: SequenceId) -> Option<EpisodeId> {
		self.inner
			.read()
			.await
			.sequences
			.get(&id)
			.copied()
			.flatten()
	}

	async fn find_shot(&self, id: ShotId) -> Option<SequenceId> {
		self.inner.read().await.shots.get(&id).copied().flatten()
	}

	async fn find_asset(&self, id: AssetId) -> Option<ProjectId> {
		self.inner.read().await.assets.get(&id).copied().flatten()
	}

	async fn find_version(&self, id: VersionId) -> Option<VersionRef> {
		self.inner.read().await.versions.get(&id).cloned()
	}
}
