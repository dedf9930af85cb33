//! Panel actions: synchronisation, jump-to-optimum, reset and save.
//!
//! The controller owns the [`Panel`] behind a `RefCell` and is shared through
//! an `Rc` with the event handlers. Borrows never span an `.await`, so
//! handlers may interleave freely on the UI thread.

use crate::api::Backend;
use crate::error::PanelError;
use crate::model::PanelConfig;
use crate::panel::{Panel, SyncOutcome};
use log::{debug, info};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

/// Sequence number of one synchronisation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out tickets; only the newest ticket may apply its response.
#[derive(Debug, Default)]
pub struct SyncSequencer {
    latest: Cell<u64>,
}

impl SyncSequencer {
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

pub struct Controller<B> {
    backend: B,
    panel: RefCell<Panel>,
    sequencer: SyncSequencer,
}

impl<B: Backend> Controller<B> {
    pub fn new(config: Rc<PanelConfig>, backend: B) -> Self {
        Self {
            backend,
            panel: RefCell::new(Panel::new(config)),
            sequencer: SyncSequencer::default(),
        }
    }

    pub fn panel(&self) -> Ref<'_, Panel> {
        self.panel.borrow()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// In-progress drag: moves the slider without talking to the backend.
    pub fn drag(&self, slider: &str, value: f64) -> Option<f64> {
        self.panel.borrow_mut().set_value(slider, value)
    }

    /// Released drag: moves the slider, then synchronises.
    pub async fn commit(&self, slider: &str, value: f64) -> Result<SyncOutcome, PanelError> {
        self.drag(slider, value);
        self.sync().await
    }

    /// Push the current values to `/update` and apply the answer, unless a
    /// newer cycle has started in the meantime.
    pub async fn sync(&self) -> Result<SyncOutcome, PanelError> {
        let ticket = self.sequencer.begin();
        let values = self.panel.borrow().values();
        debug!("sync cycle {:?} with {} sliders", ticket, values.len());

        let response = self.backend.update(&values).await?;

        if !self.sequencer.is_latest(ticket) {
            debug!("sync cycle {:?} superseded, dropping its response", ticket);
            return Ok(SyncOutcome::Superseded);
        }
        Ok(self.panel.borrow_mut().apply_update(&response))
    }

    /// Jump every slider to the point minimising `metric`, then synchronise.
    /// The jump is dropped if another action started while `/minmetric` was
    /// pending.
    pub async fn minimize(&self, metric: &str) -> Result<SyncOutcome, PanelError> {
        let ticket = self.sequencer.begin();
        info!("minimising '{}'", metric);
        let response = self.backend.min_metric(metric).await?;

        if !self.sequencer.is_latest(ticket) {
            debug!("minimise {:?} superseded, ignoring coordinates", ticket);
            return Ok(SyncOutcome::Superseded);
        }
        self.panel.borrow_mut().jump_to(&response.coords);
        self.sync().await
    }

    /// Return every slider to its default, then synchronise.
    pub async fn reset(&self) -> Result<SyncOutcome, PanelError> {
        info!("resetting sliders to defaults");
        self.panel.borrow_mut().reset();
        self.sync().await
    }

    /// Submit the current values to `/save`.
    pub async fn save(&self) -> Result<(), PanelError> {
        let values = self.panel.borrow().values();
        info!("saving {} slider values", values.len());
        self.backend
            .save(&values)
            .await
            .map_err(PanelError::SaveRejected)
    }
}
