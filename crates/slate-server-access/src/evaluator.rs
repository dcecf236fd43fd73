// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access decision evaluation.
//!
//! [`AccessEvaluator`] is the entry point request handlers call. Every
//! decision is two-phase, in the same shape as the rest of the codebase's
//! policy evaluation:
//!
//! 1. **Global role check**: admins bypass everything, before any store
//!    lookup runs
//! 2. **Per-project check**: the user's role on the owning project is
//!    compared against the required minimum
//!
//! Targets that are not projects are first resolved through
//! [`ProjectResolver`]; a target that cannot be resolved is refused with
//! a signal distinct from plain denial, so callers can tell "no such
//! linked project" apart from "insufficient role". Evaluation is pure
//! read-and-decide: no caching, no retries, no mutation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::instrument;

use slate_access_core::{
	AccessError, EntityRef, ProjectId, ProjectRole, Result, UserContext,
};

use crate::resolver::ProjectResolver;
use crate::store::{EntityStore, PermissionStore};

/// Decides whether a user may act on a project or on an entity it owns.
#[derive(Clone)]
pub struct AccessEvaluator {
	permissions: Arc<dyn PermissionStore>,
	resolver: ProjectResolver,
}

impl AccessEvaluator {
	/// Creates an evaluator over the given stores.
	pub fn new(permissions: Arc<dyn PermissionStore>, entities: Arc<dyn EntityStore>) -> Self {
		Self {
			permissions,
			resolver: ProjectResolver::new(entities),
		}
	}

	/// Returns true if the user bypasses per-project checks.
	///
	/// Reads only the request context; never touches a store, so admin
	/// paths stay decidable when storage is unavailable.
	pub fn is_admin(&self, user: &UserContext) -> bool {
		user.is_admin()
	}

	/// The set of projects the user can see.
	///
	/// Admins see every project; everyone else sees the projects they
	/// hold any permission record on, regardless of role level. This is
	/// a visibility list for browsing — it must not gate writes.
	pub async fn accessible_project_ids(&self, user: &UserContext) -> HashSet<ProjectId> {
		if user.is_admin() {
			return self.permissions.list_all_project_ids().await;
		}

		self.permissions
			.list_permissions_for_user(user.user_id)
			.await
			.into_iter()
			.map(|permission| permission.project_id)
			.collect()
	}

	/// Returns true if the user holds at least `min_role` on the project.
	///
	/// Admins pass without a permission lookup. A user with no permission
	/// record on the project fails every minimum, including viewer.
	#[instrument(
	    level = "debug",
	    skip(self, user),
	    fields(user_id = %user.user_id, project_id = %project_id, min_role = %min_role)
	)]
	pub async fn has_permission(
		&self,
		user: &UserContext,
		project_id: ProjectId,
		min_role: ProjectRole,
	) -> bool {
		if user.is_admin() {
			return true;
		}

		match self
			.permissions
			.find_permission(user.user_id, project_id)
			.await
		{
			Some(role) => role.has_permission_of(&min_role),
			None => false,
		}
	}

	/// Returns true if the user can read the project.
	///
	/// Viewer is the explicit default minimum for callers that do not
	/// require more.
	pub async fn can_access(&self, user: &UserContext, project_id: ProjectId) -> bool {
		self.has_permission(user, project_id, ProjectRole::Viewer)
			.await
	}

	/// Checks the project like [`Self::has_permission`], signaling
	/// [`AccessError::PermissionDenied`] instead of returning false.
	pub async fn verify(
		&self,
		user: &UserContext,
		project_id: ProjectId,
		min_role: ProjectRole,
	) -> Result<()> {
		if self.has_permission(user, project_id, min_role).await {
			Ok(())
		} else {
			Err(AccessError::PermissionDenied {
				project_id,
				min_role,
			})
		}
	}

	/// Walks the entity's ownership chain to its owning project id.
	pub async fn resolve_project_id(&self, entity: EntityRef) -> Option<ProjectId> {
		self.resolver.resolve_project_id(entity).await
	}

	/// Resolves the entity, then checks the user's role on its project.
	///
	/// Signals [`AccessError::EntityUnresolvable`] when the chain never
	/// reaches a project — refusal, not denial, so the caller can report
	/// the entity rather than the user's role. Otherwise behaves exactly
	/// like [`Self::verify`].
	#[instrument(
	    level = "debug",
	    skip(self, user),
	    fields(user_id = %user.user_id, entity = %entity, min_role = %min_role)
	)]
	pub async fn verify_entity(
		&self,
		user: &UserContext,
		entity: EntityRef,
		min_role: ProjectRole,
	) -> Result<()> {
		let Some(project_id) = self.resolver.resolve_project_id(entity).await else {
			return Err(AccessError::EntityUnresolvable {
				kind: entity.kind(),
				id: entity.id(),
			});
		};

		self.verify(user, project_id, min_role).await
	}

	/// Returns true if the user can read the entity's owning project.
	///
	/// Viewer-level counterpart of [`Self::verify_entity`]; an
	/// unresolvable entity is false, never an implicit grant.
	pub async fn can_access_entity(&self, user: &UserContext, entity: EntityRef) -> bool {
		self.verify_entity(user, entity, ProjectRole::Viewer)
			.await
			.is_ok()
	}
}
