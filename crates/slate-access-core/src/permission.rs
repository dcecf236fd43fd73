// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-project role assignments.
//!
//! A [`ProjectPermission`] links one user to one project with one role.
//! Storage owns creation and revocation; the access engine only reads
//! these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProjectId, ProjectRole, UserId};

/// A user's role assignment on a single project.
///
/// At most one record exists per (user, project) pair; storage upholds
/// that invariant and the engine assumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPermission {
	/// The user the role is granted to.
	pub user_id: UserId,

	/// The project the role applies to.
	pub project_id: ProjectId,

	/// The granted role.
	pub role: ProjectRole,

	/// When this permission was granted.
	pub created_at: DateTime<Utc>,
}

impl ProjectPermission {
	/// Creates a new permission record, stamped with the current time.
	pub fn new(user_id: UserId, project_id: ProjectId, role: ProjectRole) -> Self {
		Self {
			user_id,
			project_id,
			role,
			created_at: Utc::now(),
		}
	}

	/// Returns true if this permission grants at least the given role's access.
	pub fn has_permission_of(&self, role: &ProjectRole) -> bool {
		self.role.has_permission_of(role)
	}
}
