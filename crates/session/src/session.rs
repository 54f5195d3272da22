use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use invoicer_core::LineItemId;
use invoicer_events::Subscription;
use invoicer_invoicing::{
    Invoice, InvoiceChanged, InvoiceField, InvoiceStore, ItemUpdate, PartyField, PartyRole,
};
use invoicer_layout::PageTemplate;
use invoicer_render::{PdfBackend, RenderBackend, RenderedDocument, render_invoice};

use crate::config::SessionConfig;
use crate::error::{GenerationError, SessionError};
use crate::generation::{GeneratedOutput, GenerationSlot};

struct Inner {
    store: Mutex<InvoiceStore>,
    slot: Arc<GenerationSlot>,
    backend: Arc<dyn RenderBackend>,
    template: PageTemplate,
    latency: Duration,
}

/// Handle to one editing session.
///
/// Cheap to clone; every clone talks to the same invoice and the same
/// generation slot. Construct it once per session and hand clones to
/// whatever needs to read or edit the invoice.
#[derive(Clone)]
pub struct EditorSession {
    inner: Arc<Inner>,
}

impl core::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditorSession")
            .field("version", &self.version())
            .field("generating", &self.is_generating())
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Seed invoice, PDF backend.
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        Self::with_parts(config, InvoiceStore::new(), Arc::new(PdfBackend::new()))
    }

    pub fn with_parts(
        config: &SessionConfig,
        store: InvoiceStore,
        backend: Arc<dyn RenderBackend>,
    ) -> Result<Self, SessionError> {
        let template = config.template()?;
        tracing::info!(
            page = %config.page,
            latency_ms = config.simulated_latency_ms,
            "editor session started"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                store: Mutex::new(store),
                slot: GenerationSlot::shared(),
                backend,
                template,
                latency: config.simulated_latency(),
            }),
        })
    }

    fn store(&self) -> MutexGuard<'_, InvoiceStore> {
        // Store mutations are total and never panic mid-update.
        self.inner
            .store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Arc<Invoice> {
        self.store().snapshot()
    }

    pub fn version(&self) -> u64 {
        self.store().version()
    }

    pub fn total(&self) -> f64 {
        self.store().total()
    }

    pub fn subscribe(&self) -> Subscription<InvoiceChanged> {
        self.store().subscribe()
    }

    pub fn set_field(&self, field: InvoiceField, value: impl Into<String>) {
        self.store().set_field(field, value);
    }

    pub fn set_party_field(&self, party: PartyRole, field: PartyField, value: impl Into<String>) {
        self.store().set_party_field(party, field, value);
    }

    pub fn add_item(&self) -> LineItemId {
        self.store().add_item()
    }

    pub fn remove_item(&self, id: LineItemId) -> bool {
        self.store().remove_item(id)
    }

    pub fn set_item_field(&self, id: LineItemId, update: ItemUpdate) -> bool {
        self.store().set_item_field(id, update)
    }

    pub fn is_generating(&self) -> bool {
        self.inner.slot.is_in_flight()
    }

    /// The last generated document, if any and not cleared by a newer request.
    pub fn output(&self) -> Option<GeneratedOutput> {
        self.inner.slot.output()
    }

    /// Whether the last generated document reflects the invoice as it is now.
    pub fn output_is_current(&self) -> bool {
        self.output()
            .is_some_and(|out| out.source_version == self.version())
    }

    /// Render the current invoice into a downloadable document.
    ///
    /// Refused while another generation runs. The work runs on its own task:
    /// dropping the returned future does not cancel it, the slot is still
    /// released and the result still stored.
    pub async fn generate_document(&self) -> Result<RenderedDocument, GenerationError> {
        let running = self.inner.slot.begin()?;
        let (snapshot, version) = {
            let store = self.store();
            (store.snapshot(), store.version())
        };
        tracing::info!(
            ticket = running.ticket(),
            version,
            items = snapshot.items.len(),
            "document generation started"
        );

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            if !inner.latency.is_zero() {
                tokio::time::sleep(inner.latency).await;
            }
            let outcome = render_invoice(&snapshot, &inner.template, inner.backend.as_ref());
            let result = running.complete(outcome, version);
            if let Ok(doc) = &result {
                tracing::info!(
                    filename = %doc.filename,
                    bytes = doc.bytes.len(),
                    "document generation finished"
                );
            }
            result
        });

        task.await.map_err(|e| {
            tracing::error!(error = %e, "document generation task aborted");
            GenerationError::Aborted
        })?
    }
}
