//! The single in-flight document generation slot.
//!
//! At most one generation runs at a time. Starting one clears whatever was
//! generated before, so a stale download is never offered next to a running
//! request. The flag is released on every outcome: success, backend failure,
//! or the work being dropped/panicking.

use std::sync::{Arc, Mutex, MutexGuard};

use invoicer_render::{RenderError, RenderedDocument};

use crate::error::GenerationError;

/// The latest successfully generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub document: RenderedDocument,
    /// Store version of the snapshot the document was rendered from.
    pub source_version: u64,
}

#[derive(Debug, Default)]
struct SlotState {
    in_flight: bool,
    latest_ticket: u64,
    output: Option<GeneratedOutput>,
}

#[derive(Debug, Default)]
pub struct GenerationSlot {
    state: Mutex<SlotState>,
}

impl GenerationSlot {
    /// A fresh idle slot, ready to hand to the generation task.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // The state is plain data; a panic while holding the lock cannot
        // leave it half-updated in a way later readers care about.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claim the slot. Fails if a generation is already running.
    pub fn begin(self: &Arc<Self>) -> Result<InFlight, GenerationError> {
        let mut state = self.lock();
        if state.in_flight {
            return Err(GenerationError::AlreadyInFlight);
        }
        state.in_flight = true;
        state.latest_ticket += 1;
        state.output = None;

        Ok(InFlight {
            slot: Arc::clone(self),
            ticket: state.latest_ticket,
            done: false,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    pub fn output(&self) -> Option<GeneratedOutput> {
        self.lock().output.clone()
    }
}

/// Proof that the caller owns the running generation.
///
/// Dropping it without calling [`InFlight::complete`] releases the slot and
/// stores nothing.
#[derive(Debug)]
pub struct InFlight {
    slot: Arc<GenerationSlot>,
    ticket: u64,
    done: bool,
}

impl InFlight {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Release the slot and publish the outcome.
    pub fn complete(
        mut self,
        outcome: Result<RenderedDocument, RenderError>,
        source_version: u64,
    ) -> Result<RenderedDocument, GenerationError> {
        self.done = true;
        let mut state = self.slot.lock();
        let current = state.latest_ticket == self.ticket;
        if current {
            state.in_flight = false;
        }

        match outcome {
            Ok(document) => {
                if current {
                    state.output = Some(GeneratedOutput {
                        document: document.clone(),
                        source_version,
                    });
                } else {
                    tracing::debug!(ticket = self.ticket, "discarding superseded document");
                }
                Ok(document)
            }
            Err(e) => {
                tracing::error!(ticket = self.ticket, error = %e, "failed to generate document");
                Err(GenerationError::Render(e))
            }
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let mut state = self.slot.lock();
        if state.latest_ticket == self.ticket {
            state.in_flight = false;
        }
        tracing::warn!(ticket = self.ticket, "document generation ended without a result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> RenderedDocument {
        RenderedDocument {
            bytes: name.as_bytes().to_vec(),
            media_type: "application/pdf",
            filename: format!("{name}.pdf"),
        }
    }

    #[test]
    fn second_begin_is_refused_while_running() {
        let slot = GenerationSlot::shared();
        let running = slot.begin().unwrap();

        assert!(slot.is_in_flight());
        assert_eq!(slot.begin().unwrap_err(), GenerationError::AlreadyInFlight);

        running.complete(Ok(doc("a")), 1).unwrap();
        assert!(!slot.is_in_flight());
        assert!(slot.begin().is_ok());
    }

    #[test]
    fn success_stores_output_with_source_version() {
        let slot = GenerationSlot::shared();
        slot.begin().unwrap().complete(Ok(doc("a")), 4).unwrap();

        let output = slot.output().unwrap();
        assert_eq!(output.document.filename, "a.pdf");
        assert_eq!(output.source_version, 4);
    }

    #[test]
    fn begin_clears_previous_output() {
        let slot = GenerationSlot::shared();
        slot.begin().unwrap().complete(Ok(doc("a")), 1).unwrap();
        assert!(slot.output().is_some());

        let _running = slot.begin().unwrap();
        assert!(slot.output().is_none());
    }

    #[test]
    fn failure_releases_slot_and_stores_nothing() {
        let slot = GenerationSlot::shared();
        let err = slot
            .begin()
            .unwrap()
            .complete(Err(RenderError::EmptyLayout), 1)
            .unwrap_err();

        assert_eq!(err, GenerationError::Render(RenderError::EmptyLayout));
        assert!(!slot.is_in_flight());
        assert!(slot.output().is_none());
    }

    #[test]
    fn dropping_the_ticket_releases_slot() {
        let slot = GenerationSlot::shared();
        drop(slot.begin().unwrap());

        assert!(!slot.is_in_flight());
        assert!(slot.output().is_none());
    }

    #[test]
    fn tickets_increase() {
        let slot = GenerationSlot::shared();
        let first = slot.begin().unwrap();
        let t1 = first.ticket();
        drop(first);
        let second = slot.begin().unwrap();
        assert!(second.ticket() > t1);
    }
}
