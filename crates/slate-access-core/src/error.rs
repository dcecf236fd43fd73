// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for access evaluation.
//!
//! Exactly two conditions are signaled, and they are never conflated: a
//! resolvable target the user lacks the role for, and a target that could
//! not be resolved to a project at all. Both refuse access.

use thiserror::Error;
use uuid::Uuid;

use crate::entity::EntityKind;
use crate::types::{ProjectId, ProjectRole};

/// Result type for access evaluation.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors signaled by access evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	/// The project resolved, but the user's role does not satisfy the
	/// required minimum (or the user holds no role on it at all).
	#[error("access to project {project_id} denied: at least {min_role} required")]
	PermissionDenied {
		/// The project the check ran against.
		project_id: ProjectId,
		/// The minimum role the operation required.
		min_role: ProjectRole,
	},

	/// The ownership chain below the target never reached a project: a
	/// missing row, a null parent link, or an unrecognized version target.
	#[error("{kind} {id} not found or not associated with a project")]
	EntityUnresolvable {
		/// The kind of entity the walk started from.
		kind: EntityKind,
		/// The identifier the walk started from.
		id: Uuid,
	},
}
