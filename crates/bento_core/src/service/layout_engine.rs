//! Editable bento-grid layout engine.
//!
//! # Responsibility
//! - Own the current tile order and restore a saved order at start-up.
//! - Apply drag reorders while edit mode is on and commit them on exit.
//! - Sequence shuffle/reset through a single timed transition.
//!
//! # Invariants
//! - `current` always holds exactly the canonical id set.
//! - At most one transition is in flight; new triggers are rejected, never
//!   queued or cancelled.
//! - `tick` is the only path from `Transitioning` back to `Idle`.
//! - Edit mode changes only through this engine; session requests are
//!   applied on the next operation and refused while a transition runs.
//! - A persisted layout contributes order only; item data always comes from
//!   the canonical definition.

use crate::config::EngineConfig;
use crate::model::grid_item::GridItem;
use crate::model::layout::{Layout, LayoutValidationError, ReorderError};
use crate::repo::layout_repo::LayoutRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::notify::{Notice, Notifier};
use crate::service::session::SessionContext;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Why a stored layout was discarded at start-up.
#[derive(Debug)]
pub enum MalformedPersistedLayout {
    /// The value could not be read or is not an array of `{ "id": .. }`.
    Storage(RepoError),
    /// The value decoded but names a different id set.
    Incompatible(ReorderError),
}

impl Display for MalformedPersistedLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Incompatible(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MalformedPersistedLayout {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Incompatible(err) => Some(err),
        }
    }
}

/// Where the layout in effect after `initialize` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    /// Nothing was stored.
    Canonical,
    /// A compatible stored order was adopted.
    Persisted,
    /// A stored value was discarded as malformed or incompatible.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Shuffle,
    Reset,
}

/// Animation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning {
        kind: TransitionKind,
        ready_at: Instant,
    },
}

/// Result of asking for a shuffle or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Started,
    /// Another transition is still in flight.
    Busy,
    /// Edit mode is on; shuffle and reset are disabled.
    Editing,
}

/// Layout engine for one dashboard instance.
pub struct LayoutEngine<R: LayoutRepository, N: Notifier> {
    canonical: Layout,
    current: Layout,
    repo: R,
    session: SessionContext,
    notifier: N,
    rng: StdRng,
    transition_delay: Duration,
    transition: TransitionState,
    drag_source: Option<usize>,
    restore_source: RestoreSource,
}

impl<R: LayoutRepository, N: Notifier> LayoutEngine<R, N> {
    /// Builds the engine and restores a compatible stored order if any.
    ///
    /// A malformed or incompatible stored value is logged and ignored; the
    /// canonical order is used instead. This call never writes storage.
    ///
    /// # Errors
    /// - `LayoutValidationError` when `canonical_items` has blank or duplicate ids.
    pub fn initialize(
        canonical_items: Vec<GridItem>,
        repo: R,
        session: SessionContext,
        notifier: N,
        config: &EngineConfig,
    ) -> Result<Self, LayoutValidationError> {
        let canonical = Layout::from_canonical(canonical_items)?;

        let (current, restore_source) = match restore_layout(&canonical, &repo) {
            Ok(Some(layout)) => (layout, RestoreSource::Persisted),
            Ok(None) => (canonical.clone(), RestoreSource::Canonical),
            Err(err) => {
                warn!("event=layout_restore module=layout status=fallback error={err}");
                (canonical.clone(), RestoreSource::Fallback)
            }
        };
        info!(
            "event=layout_restore module=layout status=ok source={:?} items={}",
            restore_source,
            current.len()
        );

        Ok(Self {
            canonical,
            current,
            repo,
            session,
            notifier,
            rng: StdRng::from_entropy(),
            transition_delay: config.transition_delay(),
            transition: TransitionState::Idle,
            drag_source: None,
            restore_source,
        })
    }

    /// Replaces the shuffle RNG with a seeded one.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.current
    }

    pub fn canonical(&self) -> &Layout {
        &self.canonical
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn restore_source(&self) -> RestoreSource {
        self.restore_source
    }

    pub fn transition(&self) -> TransitionState {
        self.transition
    }

    pub fn is_reordering(&self) -> bool {
        matches!(self.transition, TransitionState::Transitioning { .. })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.session.is_editing_layout()
    }

    /// Picks up the tile at `source_index`.
    ///
    /// Returns `false` outside edit mode, during a transition, or for an
    /// out-of-bounds index.
    pub fn begin_drag(&mut self, source_index: usize) -> bool {
        self.sync_logged();
        if !self.is_edit_mode() || self.is_reordering() || source_index >= self.current.len() {
            return false;
        }
        self.drag_source = Some(source_index);
        true
    }

    /// Moves the dragged tile to `target_index` and keeps following it.
    ///
    /// Returns whether the layout changed.
    pub fn drag_over(&mut self, target_index: usize) -> bool {
        self.sync_logged();
        let Some(source_index) = self.drag_source else {
            return false;
        };
        if !self.is_edit_mode() || !self.current.move_item(source_index, target_index) {
            return false;
        }
        debug!("event=drag_over module=layout from={source_index} to={target_index}");
        self.drag_source = Some(target_index);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag_source = None;
    }

    /// Starts a shuffle transition. The new order appears on `tick`.
    pub fn shuffle(&mut self) -> TriggerOutcome {
        self.start_transition(TransitionKind::Shuffle)
    }

    /// Starts a reset transition back to the canonical order.
    pub fn reset(&mut self) -> TriggerOutcome {
        self.start_transition(TransitionKind::Reset)
    }

    /// Enters or leaves edit mode and returns the new state.
    ///
    /// A pending session request is applied first. Leaving edit mode always
    /// saves the current order. Ignored while a transition is in flight.
    ///
    /// # Errors
    /// - Returns the storage error when saving fails; edit mode stays on.
    pub fn toggle_edit_mode(&mut self) -> RepoResult<bool> {
        self.sync()?;
        let editing = !self.is_edit_mode();
        self.set_edit_mode(editing)
    }

    /// Applies an edit-mode request filed through the shared session and
    /// returns the resulting state.
    ///
    /// # Errors
    /// - Returns the storage error when the implied save fails; edit mode
    ///   stays on.
    pub fn sync(&mut self) -> RepoResult<bool> {
        match self.session.take_edit_request() {
            Some(editing) => self.set_edit_mode(editing),
            None => Ok(self.is_edit_mode()),
        }
    }

    fn set_edit_mode(&mut self, editing: bool) -> RepoResult<bool> {
        if self.is_reordering() {
            debug!("event=edit_mode module=layout status=busy requested={editing}");
            return Ok(self.is_edit_mode());
        }
        if editing == self.is_edit_mode() {
            return Ok(editing);
        }

        if editing {
            self.session.set_editing_layout(true);
            info!("event=edit_mode module=layout status=on");
            self.notifier
                .notify(Notice::info("Drag tiles to rearrange your dashboard", "move"));
            return Ok(true);
        }

        self.drag_source = None;
        self.repo.save_layout(&self.current)?;
        self.session.set_editing_layout(false);
        info!(
            "event=edit_mode module=layout status=saved items={}",
            self.current.len()
        );
        self.notifier.notify(Notice::success("Layout saved", "check"));
        Ok(false)
    }

    fn sync_logged(&mut self) {
        if let Err(err) = self.sync() {
            warn!("event=edit_mode module=layout status=save_failed error={err}");
        }
    }

    /// Returns the navigation target for the tile at `index`.
    ///
    /// Tiles are not navigable while edit mode is on.
    pub fn activate(&self, index: usize) -> Option<&str> {
        if self.is_edit_mode() {
            return None;
        }
        self.current.get(index).map(|item| item.destination.as_str())
    }

    /// Time left before the in-flight transition may complete.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.transition {
            TransitionState::Idle => None,
            TransitionState::Transitioning { ready_at, .. } => {
                Some(ready_at.saturating_duration_since(now))
            }
        }
    }

    /// Completes the in-flight transition once its delay has elapsed.
    ///
    /// Returns the completed transition, or `None` when idle or still waiting.
    ///
    /// # Errors
    /// - Returns the save error of a pending request to leave edit mode.
    /// - Reset returns the storage error when clearing the saved layout
    ///   fails. The in-memory reset has already been applied.
    pub fn tick(&mut self, now: Instant) -> RepoResult<Option<TransitionKind>> {
        self.sync()?;
        let TransitionState::Transitioning { kind, ready_at } = self.transition else {
            return Ok(None);
        };
        if now < ready_at {
            return Ok(None);
        }
        self.transition = TransitionState::Idle;

        match kind {
            TransitionKind::Shuffle => {
                self.current.shuffle_with(&mut self.rng);
                info!("event=shuffle module=layout status=ok");
                self.notifier.notify(Notice::success("Dashboard shuffled", "shuffle"));
            }
            TransitionKind::Reset => {
                self.current = self.canonical.clone();
                self.session.set_editing_layout(false);
                let cleared = self.repo.clear_layout()?;
                info!("event=reset module=layout status=ok cleared={cleared}");
                self.notifier
                    .notify(Notice::success("Layout reset to default", "rotate-ccw"));
            }
        }
        Ok(Some(kind))
    }

    /// Blocks for the remaining delay, then completes the transition.
    pub fn wait_for_transition(&mut self) -> RepoResult<Option<TransitionKind>> {
        if let Some(remaining) = self.remaining(Instant::now()) {
            std::thread::sleep(remaining);
        }
        self.tick(Instant::now())
    }

    fn start_transition(&mut self, kind: TransitionKind) -> TriggerOutcome {
        self.sync_logged();
        if self.is_reordering() {
            debug!("event=transition module=layout status=busy kind={kind:?}");
            return TriggerOutcome::Busy;
        }
        if self.is_edit_mode() {
            debug!("event=transition module=layout status=editing kind={kind:?}");
            return TriggerOutcome::Editing;
        }
        self.drag_source = None;
        self.transition = TransitionState::Transitioning {
            kind,
            ready_at: Instant::now() + self.transition_delay,
        };
        debug!(
            "event=transition module=layout status=start kind={kind:?} delay_ms={}",
            self.transition_delay.as_millis()
        );
        TriggerOutcome::Started
    }
}

fn restore_layout<R: LayoutRepository>(
    canonical: &Layout,
    repo: &R,
) -> Result<Option<Layout>, MalformedPersistedLayout> {
    let Some(order) = repo
        .load_order()
        .map_err(MalformedPersistedLayout::Storage)?
    else {
        return Ok(None);
    };
    canonical
        .reorder_by(&order)
        .map(Some)
        .map_err(MalformedPersistedLayout::Incompatible)
}
