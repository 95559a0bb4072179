//! Attach/detach protocol for callback-style paged views.
//!
//! [`SlidingTabLayoutMediator`] owns the lifecycle of the link between a
//! [`SlidingTabLayout`] and a [`PagedView`]: [`attach`] wires the callbacks
//! and populates the tabs, [`detach`] tears everything down. Attaching twice
//! without detaching is a caller bug and fails fast; detaching without a
//! prior attach is a safe no-op.
//!
//! [`attach`]: SlidingTabLayoutMediator::attach
//! [`detach`]: SlidingTabLayoutMediator::detach

use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::{layout::SlidingTabLayout, pager::PagedView};

/// Errors from [`SlidingTabLayoutMediator::attach`].
#[derive(Debug, Error)]
pub enum MediatorError {
    /// `attach` was called while already attached.
    #[error("mediator is already attached; call detach first")]
    AlreadyAttached,
    /// The paged view has no adapter to populate tabs from.
    #[error("paged view has no adapter to populate tabs from")]
    NoAdapter,
}

/// Mediates between a tab layout and a callback-style paged view.
pub struct SlidingTabLayoutMediator {
    layout: SlidingTabLayout,
    view: Rc<dyn PagedView>,
    attached: bool,
}

impl SlidingTabLayoutMediator {
    /// Creates a detached mediator over a layout and a paged view.
    pub fn new(layout: SlidingTabLayout, view: Rc<dyn PagedView>) -> Self {
        Self {
            layout,
            view,
            attached: false,
        }
    }

    /// Wires the layout to the paged view and populates the tabs from the
    /// view's adapter.
    pub fn attach(&mut self) -> Result<(), MediatorError> {
        if self.attached {
            return Err(MediatorError::AlreadyAttached);
        }
        if self.view.adapter().is_none() {
            return Err(MediatorError::NoAdapter);
        }
        self.layout.bind_paged_view(self.view.clone());
        self.attached = true;
        debug!("mediator attached");
        Ok(())
    }

    /// Unwires the layout and empties the tabs. Safe to call at any time,
    /// including before [`attach`](Self::attach) or repeatedly.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.layout.unbind_and_clear();
        self.attached = false;
        debug!("mediator detached");
    }

    /// Whether the mediator is currently attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for SlidingTabLayoutMediator {
    fn drop(&mut self) {
        self.detach();
    }
}
