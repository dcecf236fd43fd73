// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ownership chain resolution.
//!
//! Every access check ultimately runs against a project, but callers hold
//! references to leaf entities. [`ProjectResolver`] walks a reference up
//! its parent links until it reaches the owning project:
//!
//! - project: identity, no lookup
//! - episode: one hop
//! - sequence: two hops (sequence → episode → project)
//! - shot: three hops (shot → sequence → episode → project)
//! - version: load the version's polymorphic reference, then dispatch on
//!   its target kind
//!
//! The walk stops at the first broken link — a missing row, a null parent,
//! an unrecognized version target — and reports `None`. Hops within one
//! call are strictly sequential (each output feeds the next lookup);
//! separate calls share nothing and run freely in parallel.

use std::sync::Arc;

use tracing::debug;

use slate_access_core::{
	AssetId, EntityRef, EpisodeId, ProjectId, SequenceId, ShotId, VersionId, VersionTarget,
};

use crate::store::EntityStore;

/// Resolves production entities to their owning project.
#[derive(Clone)]
pub struct ProjectResolver {
	entities: Arc<dyn EntityStore>,
}

impl ProjectResolver {
	/// Creates a resolver over the given entity store.
	pub fn new(entities: Arc<dyn EntityStore>) -> Self {
		Self { entities }
	}

	/// Walks the ownership chain to the owning project id.
	///
	/// `None` means the chain never reached a project; the evaluator
	/// turns that into a refusal, never into implicit access.
	pub async fn resolve_project_id(&self, entity: EntityRef) -> Option<ProjectId> {
		match entity {
			EntityRef::Project(id) => Some(id),
			EntityRef::Episode(id) => self.episode_project(id).await,
			EntityRef::Sequence(id) => self.sequence_project(id).await,
			EntityRef::Shot(id) => self.shot_project(id).await,
			EntityRef::Version(id) => self.version_project(id).await,
		}
	}

	async fn episode_project(&self, id: EpisodeId) -> Option<ProjectId> {
		self.entities.find_episode(id).await
	}

	async fn sequence_project(&self, id: SequenceId) -> Option<ProjectId> {
		let episode_id = self.entities.find_sequence(id).await?;
		self.episode_project(episode_id).await
	}

	async fn shot_project(&self, id: ShotId) -> Option<ProjectId> {
		let sequence_id = self.entities.find_shot(id).await?;
		self.sequence_project(sequence_id).await
	}

	async fn version_project(&self, id: VersionId) -> Option<ProjectId> {
		let version = self.entities.find_version(id).await?;
		let entity_id = version.entity_id?;

		let Some(target) = version.target() else {
			debug!(version_id = %id, entity_type = %version.entity_type, "unrecognized version target");
			return None;
		};

		match target {
			VersionTarget::Asset => self.entities.find_asset(AssetId::new(entity_id)).await,
			VersionTarget::Sequence => self.sequence_project(SequenceId::new(entity_id)).await,
			VersionTarget::Episode => self.episode_project(EpisodeId::new(entity_id)).await,
			// The stored id is the project id; existence is not checked.
			VersionTarget::Project => Some(ProjectId::new(entity_id)),
		}
	}
}
