// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for project access control.
//!
//! This module defines the foundational types used throughout the access
//! engine:
//!
//! - **ID newtypes**: Type-safe wrappers around UUIDs for each entity kind
//!   ([`ProjectId`], [`ShotId`], etc.) preventing accidental mixing
//! - **Role enums**: The system-wide [`GlobalRole`] and the per-project
//!   [`ProjectRole`] hierarchy
//! - **Request context**: [`UserContext`], the identity a request acts as
//!
//! All ID types implement transparent serde serialization (as UUID strings)
//! and provide conversion to/from [`uuid::Uuid`]. "Absent" is always an
//! `Option`; no identifier value doubles as a sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}

			/// Get a reference to the inner UUID.
			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(ProjectId, "Unique identifier for a project.");
define_id_type!(EpisodeId, "Unique identifier for an episode.");
define_id_type!(SequenceId, "Unique identifier for a sequence.");
define_id_type!(ShotId, "Unique identifier for a shot.");
define_id_type!(AssetId, "Unique identifier for an asset.");
define_id_type!(VersionId, "Unique identifier for a version.");

// =============================================================================
// Global Roles
// =============================================================================

/// System-wide role attached to a user account.
///
/// Only [`GlobalRole::Admin`] carries meaning inside the access engine: it
/// bypasses every per-project check. The remaining labels exist because the
/// surrounding product assigns them, and they must all evaluate as
/// non-admin here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalRole {
	/// Unconditional access to every project.
	Admin,
	/// Production supervisor; no special treatment in access checks.
	Supervisor,
	/// Standard account.
	User,
	/// External client account.
	Client,
}

impl GlobalRole {
	/// Returns all available global roles.
	pub fn all() -> &'static [GlobalRole] {
		&[
			GlobalRole::Admin,
			GlobalRole::Supervisor,
			GlobalRole::User,
			GlobalRole::Client,
		]
	}
}

impl fmt::Display for GlobalRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GlobalRole::Admin => write!(f, "admin"),
			GlobalRole::Supervisor => write!(f, "supervisor"),
			GlobalRole::User => write!(f, "user"),
			GlobalRole::Client => write!(f, "client"),
		}
	}
}

// =============================================================================
// Project Roles
// =============================================================================

/// Roles a user can hold on a single project, weakest to strongest.
///
/// The default is [`ProjectRole::Viewer`]: every entry point that accepts
/// an optional minimum settles on viewer-level access when the caller does
/// not say otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRole {
	/// Read-only access.
	#[default]
	Viewer,
	/// Can create and update entities.
	Contributor,
	/// Full control over the project.
	Owner,
}

impl ProjectRole {
	/// Returns all available project roles, weakest first.
	pub fn all() -> &'static [ProjectRole] {
		&[
			ProjectRole::Viewer,
			ProjectRole::Contributor,
			ProjectRole::Owner,
		]
	}

	// Ranks are assigned here and nowhere else. Declaration order is not
	// load-bearing; a new role must be given a rank before this compiles.
	fn rank(self) -> u8 {
		match self {
			ProjectRole::Viewer => 0,
			ProjectRole::Contributor => 1,
			ProjectRole::Owner => 2,
		}
	}

	/// Returns true if this role has at least the permissions of the given role.
	pub fn has_permission_of(&self, other: &ProjectRole) -> bool {
		self.rank() >= other.rank()
	}
}

impl fmt::Display for ProjectRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ProjectRole::Viewer => write!(f, "viewer"),
			ProjectRole::Contributor => write!(f, "contributor"),
			ProjectRole::Owner => write!(f, "owner"),
		}
	}
}

// =============================================================================
// User Context
// =============================================================================

/// The identity a request is evaluated as.
///
/// Constructed per request from the external identity layer and threaded
/// explicitly through every access check; the engine never reads ambient
/// or thread-local state. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
	/// The user making the request.
	pub user_id: UserId,

	/// The user's system-wide role.
	pub role: GlobalRole,
}

impl UserContext {
	/// Creates a context for the given user and global role.
	pub fn new(user_id: UserId, role: GlobalRole) -> Self {
		Self { user_id, role }
	}

	/// Returns true if this user bypasses per-project checks.
	pub fn is_admin(&self) -> bool {
		self.role == GlobalRole::Admin
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	mod id_types {
		use super::*;

		#[test]
		fn project_id_roundtrips() {
			let uuid = Uuid::new_v4();
			let project_id = ProjectId::new(uuid);
			assert_eq!(project_id.into_inner(), uuid);
		}

		#[test]
		fn project_id_generates_unique() {
			let id1 = ProjectId::generate();
			let id2 = ProjectId::generate();
			assert_ne!(id1, id2);
		}

		#[test]
		fn shot_id_serializes_as_uuid() {
			let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
			let shot_id = ShotId::new(uuid);
			let json = serde_json::to_string(&shot_id).unwrap();
			assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
		}

		#[test]
		fn user_id_deserializes_from_uuid() {
			let json = "\"550e8400-e29b-41d4-a716-446655440000\"";
			let user_id: UserId = serde_json::from_str(json).unwrap();
			assert_eq!(
				user_id.into_inner(),
				Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()
			);
		}

		proptest! {
				#[test]
				fn project_id_roundtrip_any_uuid(
						a: u128
				) {
						let uuid = Uuid::from_u128(a);
						let project_id = ProjectId::new(uuid);
						prop_assert_eq!(project_id.into_inner(), uuid);
						prop_assert_eq!(Uuid::from(project_id), uuid);
				}

				#[test]
				fn user_id_serde_roundtrip(
						a: u128
				) {
						let uuid = Uuid::from_u128(a);
						let user_id = UserId::new(uuid);
						let json = serde_json::to_string(&user_id).unwrap();
						let deserialized: UserId = serde_json::from_str(&json).unwrap();
						prop_assert_eq!(user_id, deserialized);
				}

				#[test]
				fn episode_id_display_matches_uuid(
						a: u128
				) {
						let uuid = Uuid::from_u128(a);
						let episode_id = EpisodeId::new(uuid);
						prop_assert_eq!(episode_id.to_string(), uuid.to_string());
				}
		}
	}

	mod project_role {
		use super::*;

		#[test]
		fn hierarchy_is_total() {
			// Every role satisfies viewer.
			for role in ProjectRole::all() {
				assert!(role.has_permission_of(&ProjectRole::Viewer));
			}

			// Every role satisfies itself.
			for role in ProjectRole::all() {
				assert!(role.has_permission_of(role));
			}

			assert!(!ProjectRole::Viewer.has_permission_of(&ProjectRole::Contributor));
			assert!(!ProjectRole::Viewer.has_permission_of(&ProjectRole::Owner));
			assert!(!ProjectRole::Contributor.has_permission_of(&ProjectRole::Owner));

			assert!(ProjectRole::Owner.has_permission_of(&ProjectRole::Contributor));
			assert!(ProjectRole::Owner.has_permission_of(&ProjectRole::Owner));
			assert!(ProjectRole::Contributor.has_permission_of(&ProjectRole::Viewer));
		}

		#[test]
		fn default_is_viewer() {
			assert_eq!(ProjectRole::default(), ProjectRole::Viewer);
		}

		#[test]
		fn serializes_snake_case() {
			let json = serde_json::to_string(&ProjectRole::Contributor).unwrap();
			assert_eq!(json, "\"contributor\"");
		}

		#[test]
		fn display_is_lowercase() {
			assert_eq!(ProjectRole::Owner.to_string(), "owner");
			assert_eq!(ProjectRole::Viewer.to_string(), "viewer");
		}

		proptest! {
				#[test]
				fn distinct_roles_satisfy_in_exactly_one_direction(
						a in 0usize..3,
						b in 0usize..3,
				) {
						let have = ProjectRole::all()[a];
						let need = ProjectRole::all()[b];
						if have != need {
								// Exactly one direction holds between distinct roles.
								prop_assert_ne!(
										have.has_permission_of(&need),
										need.has_permission_of(&have)
								);
						}
				}
		}
	}

	mod global_role {
		use super::*;

		#[test]
		fn only_admin_is_admin() {
			for role in GlobalRole::all() {
				let user = UserContext::new(UserId::generate(), *role);
				assert_eq!(user.is_admin(), *role == GlobalRole::Admin);
			}
		}

		#[test]
		fn serializes_snake_case() {
			let json = serde_json::to_string(&GlobalRole::Supervisor).unwrap();
			assert_eq!(json, "\"supervisor\"");
		}

		#[test]
		fn all_returns_every_role() {
			assert_eq!(GlobalRole::all().len(), 4);
		}
	}

	mod user_context {
		use super::*;

		#[test]
		fn new_carries_identity() {
			let user_id = UserId::generate();
			let user = UserContext::new(user_id, GlobalRole::User);
			assert_eq!(user.user_id, user_id);
			assert_eq!(user.role, GlobalRole::User);
			assert!(!user.is_admin());
		}

		#[test]
		fn serde_roundtrip() {
			let user = UserContext::new(UserId::generate(), GlobalRole::Client);
			let json = serde_json::to_string(&user).unwrap();
			let deserialized: UserContext = serde_json::from_str(&json).unwrap();
			assert_eq!(deserialized, user);
		}
	}
}
