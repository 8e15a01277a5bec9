// SPDX-License-Identifier: MPL-2.0
//! Rendering surface contract.
//!
//! The manager never draws anything itself; it emits mount/append/closing/remove
//! operations against a [`Surface`]. Any retained-mode target will do: the
//! iced toast layer, a log, or the recorder used by tests.

use super::notification::{Notification, NotificationId};

/// Target the manager renders notifications onto.
pub trait Surface {
    /// Creates the mounting point. Called once, before the first `append`.
    fn mount(&mut self);

    /// Appends a node after every currently visible node.
    fn append(&mut self, notification: &Notification);

    /// Switches a node to its closing (exit animation) treatment.
    fn mark_closing(&mut self, id: NotificationId);

    /// Removes a node.
    fn remove(&mut self, id: NotificationId);
}

/// One operation received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Mount,
    Append(NotificationId),
    MarkClosing(NotificationId),
    Remove(NotificationId),
}

/// Surface that records every operation and tracks visible nodes.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    nodes: Vec<(NotificationId, bool)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation received so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Visible node ids in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<NotificationId> {
        self.nodes.iter().map(|(id, _)| *id).collect()
    }

    /// Whether the node is currently shown with the closing treatment.
    #[must_use]
    pub fn is_closing(&self, id: NotificationId) -> bool {
        self.nodes
            .iter()
            .any(|(node, closing)| *node == id && *closing)
    }

    /// Number of operations that targeted `id`.
    #[must_use]
    pub fn count_for(&self, id: NotificationId) -> usize {
        self.ops
            .iter()
            .filter(|op| match op {
                SurfaceOp::Mount => false,
                SurfaceOp::Append(x) | SurfaceOp::MarkClosing(x) | SurfaceOp::Remove(x) => *x == id,
            })
            .count()
    }
}

impl Surface for RecordingSurface {
    fn mount(&mut self) {
        self.ops.push(SurfaceOp::Mount);
    }

    fn append(&mut self, notification: &Notification) {
        self.ops.push(SurfaceOp::Append(notification.id()));
        self.nodes.push((notification.id(), false));
    }

    fn mark_closing(&mut self, id: NotificationId) {
        self.ops.push(SurfaceOp::MarkClosing(id));
        if let Some(node) = self.nodes.iter_mut().find(|(node, _)| *node == id) {
            node.1 = true;
        }
    }

    fn remove(&mut self, id: NotificationId) {
        self.ops.push(SurfaceOp::Remove(id));
        self.nodes.retain(|(node, _)| *node != id);
    }
}

/// Surface that reports every operation as a `tracing` event.
///
/// Used by the headless demo, where there is nothing to draw on.
#[derive(Debug, Default)]
pub struct LogSurface {
    visible: usize,
}

impl LogSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }
}

impl Surface for LogSurface {
    fn mount(&mut self) {
        tracing::info!("notification container mounted");
    }

    fn append(&mut self, notification: &Notification) {
        self.visible += 1;
        tracing::info!(
            id = %notification.id(),
            kind = %notification.kind(),
            title = notification.title(),
            message = notification.message(),
            visible = self.visible,
            "toast shown"
        );
    }

    fn mark_closing(&mut self, id: NotificationId) {
        tracing::info!(%id, "toast closing");
    }

    fn remove(&mut self, id: NotificationId) {
        self.visible = self.visible.saturating_sub(1);
        tracing::info!(%id, visible = self.visible, "toast removed");
    }
}
