// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orgchart_sync::SyncError;
use orgchart_tree::TreeError;

/// Failure of a chart operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// No tree has been rendered yet.
    #[error("no tree has been rendered yet")]
    NotRendered,
    /// The tree store rejected the edit.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// Syncing with, or rebuilding from, the surface failed.
    #[error(transparent)]
    Sync(#[from] SyncError),
}
