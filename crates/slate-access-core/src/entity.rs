// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! References to production entities.
//!
//! Production entities form an ownership chain (shot → sequence → episode
//! → project). Versions sit outside that chain: a version row carries a
//! stringly-typed reference to whichever entity it was published against.
//! This module gives both shapes a closed, typed representation:
//!
//! - [`EntityRef`]: a kind-tagged reference the resolver can walk
//! - [`VersionRef`]: the raw polymorphic reference as stored on a version
//! - [`VersionTarget`]: the recognized version targets, parsed from the
//!   stored label with explicit normalization

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::{EpisodeId, ProjectId, SequenceId, ShotId, VersionId};

// =============================================================================
// Entity References
// =============================================================================

/// A typed reference to one production entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
	/// A project itself.
	Project(ProjectId),
	/// An episode within a project.
	Episode(EpisodeId),
	/// A sequence within an episode.
	Sequence(SequenceId),
	/// A shot within a sequence.
	Shot(ShotId),
	/// A version, resolved through its polymorphic reference.
	Version(VersionId),
}

impl EntityRef {
	/// The kind tag of this reference.
	pub fn kind(&self) -> EntityKind {
		match self {
			EntityRef::Project(_) => EntityKind::Project,
			EntityRef::Episode(_) => EntityKind::Episode,
			EntityRef::Sequence(_) => EntityKind::Sequence,
			EntityRef::Shot(_) => EntityKind::Shot,
			EntityRef::Version(_) => EntityKind::Version,
		}
	}

	/// The untyped identifier, for error reporting.
	pub fn id(&self) -> Uuid {
		match self {
			EntityRef::Project(id) => id.into_inner(),
			EntityRef::Episode(id) => id.into_inner(),
			EntityRef::Sequence(id) => id.into_inner(),
			EntityRef::Shot(id) => id.into_inner(),
			EntityRef::Version(id) => id.into_inner(),
		}
	}
}

impl fmt::Display for EntityRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.kind(), self.id())
	}
}

/// The kinds of entity a reference can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	/// A project.
	Project,
	/// An episode.
	Episode,
	/// A sequence.
	Sequence,
	/// A shot.
	Shot,
	/// A version.
	Version,
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EntityKind::Project => write!(f, "project"),
			EntityKind::Episode => write!(f, "episode"),
			EntityKind::Sequence => write!(f, "sequence"),
			EntityKind::Shot => write!(f, "shot"),
			EntityKind::Version => write!(f, "version"),
		}
	}
}

// =============================================================================
// Version References
// =============================================================================

/// The polymorphic reference stored on a version row.
///
/// Both fields come straight from storage: the id may be null, and the
/// type label is free-form text owned by whatever wrote the row. Use
/// [`VersionRef::target`] to interpret the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRef {
	/// The entity the version was published against, if any.
	pub entity_id: Option<Uuid>,

	/// The stored kind label, uninterpreted.
	pub entity_type: String,
}

impl VersionRef {
	/// Creates a reference from stored fields.
	pub fn new(entity_type: impl Into<String>, entity_id: Option<Uuid>) -> Self {
		Self {
			entity_id,
			entity_type: entity_type.into(),
		}
	}

	/// Interprets the stored label as a recognized target, if it is one.
	pub fn target(&self) -> Option<VersionTarget> {
		VersionTarget::parse(&self.entity_type)
	}
}

/// The entity kinds a version reference is allowed to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionTarget {
	/// A loosely-attached asset; owns a direct project link.
	Asset,
	/// A sequence in the ownership chain.
	Sequence,
	/// An episode in the ownership chain.
	Episode,
	/// A project itself.
	Project,
}

impl VersionTarget {
	/// Parses a stored kind label, case-insensitively.
	///
	/// Unrecognized labels (including the empty string) yield `None`;
	/// resolution then reports the version as unresolvable rather than
	/// guessing.
	pub fn parse(label: &str) -> Option<VersionTarget> {
		match label.to_ascii_lowercase().as_str() {
			"asset" => Some(VersionTarget::Asset),
			"sequence" => Some(VersionTarget::Sequence),
			"episode" => Some(VersionTarget::Episode),
			"project" => Some(VersionTarget::Project),
			_ => None,
		}
	}
}

impl fmt::Display for VersionTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			VersionTarget::Asset => write!(f, "asset"),
			VersionTarget::Sequence => write!(f, "sequence"),
			VersionTarget::Episode => write!(f, "episode"),
			VersionTarget::Project => write!(f, "project"),
		}
	}
}
