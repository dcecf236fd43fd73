// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project access resolution engine for Slate.
//!
//! This crate decides, for every request, whether a user may act on a
//! production entity: it walks the entity's ownership chain up to its
//! owning project, determines the user's effective role there, and
//! compares it against the minimum the operation requires.
//!
//! # Architecture
//!
//! - `store` - Read-only lookup traits over external storage
//! - `memory` - Hash-map backed store for tests and embedding
//! - `resolver` - Ownership chain walking, including polymorphic versions
//! - `evaluator` - Allow/deny decisions and the two refusal signals
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use slate_server_access::{
//!     AccessEvaluator, GlobalRole, MemoryStore, ProjectId, ProjectRole,
//!     UserContext, UserId,
//! };
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(MemoryStore::new());
//! let project_id = ProjectId::generate();
//! store.insert_project(project_id).await;
//!
//! let user = UserContext::new(UserId::generate(), GlobalRole::User);
//! store.grant(user.user_id, project_id, ProjectRole::Contributor).await;
//!
//! let evaluator = AccessEvaluator::new(store.clone(), store);
//! assert!(evaluator.has_permission(&user, project_id, ProjectRole::Contributor).await);
//! assert!(!evaluator.has_permission(&user, project_id, ProjectRole::Owner).await);
//! # });
//! ```

pub mod evaluator;
pub mod memory;
pub mod resolver;
pub mod store;

pub use evaluator::AccessEvaluator;
pub use memory::MemoryStore;
pub use resolver::ProjectResolver;
pub use store::{EntityStore, PermissionStore};

// Re-export core types for convenience
pub use slate_access_core::*;
