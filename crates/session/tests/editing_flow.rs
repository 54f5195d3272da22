use std::sync::Arc;

use anyhow::{Context, Result};
use invoicer_invoicing::{
    Amount, ChangeKind, InvoiceField, InvoiceStore, ItemUpdate, PartyField, PartyRole,
};
use invoicer_render::PdfBackend;
use invoicer_session::{EditorSession, GenerationError, SessionConfig};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[tokio::test]
async fn edit_then_download() -> Result<()> {
    let config = SessionConfig::from_json(r#"{"log": {"default_filter": "debug", "json": false}}"#)?;
    config.init_logging();
    let session = EditorSession::new(&config)?;
    let changes = session.subscribe();
    assert_eq!(session.total(), 2000.0);

    session.set_field(InvoiceField::InvoiceNumber, "INV-042");
    session.set_party_field(PartyRole::To, PartyField::Name, "Acme Corp");

    let id = session.add_item();
    assert!(session.set_item_field(id, ItemUpdate::Description("Hosting".to_string())));
    assert!(session.set_item_field(id, ItemUpdate::Quantity(Amount::new(2.0)?)));
    assert!(session.set_item_field(id, ItemUpdate::UnitPrice(Amount::parse_input("25")?)));
    assert_eq!(session.total(), 2050.0);

    let kinds: Vec<ChangeKind> = changes.drain().into_iter().map(|c| c.change).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(kinds[0], ChangeKind::FieldSet(InvoiceField::InvoiceNumber));
    assert_eq!(kinds[2], ChangeKind::ItemAdded(id));

    let doc = session.generate_document().await?;
    assert_eq!(doc.filename, "Invoice-INV-042.pdf");
    assert!(contains(&doc.bytes, b"(Acme Corp)"));
    assert!(contains(&doc.bytes, b"($2050.00)"));
    assert!(doc.to_data_uri().starts_with("data:application/pdf;base64,"));

    let output = session.output().context("generated document is kept")?;
    assert_eq!(output.document, doc);
    assert!(session.output_is_current());
    Ok(())
}

#[tokio::test]
async fn removing_every_item_still_renders() -> Result<()> {
    let session = EditorSession::new(&SessionConfig::default())?;
    let ids: Vec<_> = session.snapshot().items.iter().map(|i| i.id).collect();
    for id in ids {
        assert!(session.remove_item(id));
    }
    assert_eq!(session.total(), 0.0);

    let doc = session.generate_document().await?;
    assert!(contains(&doc.bytes, b"($0.00)"));
    Ok(())
}

#[tokio::test]
async fn concurrent_requests_yield_one_document() -> Result<()> {
    let config = SessionConfig::from_json(r#"{"simulated_latency_ms": 40}"#)?;
    let session = EditorSession::with_parts(
        &config,
        InvoiceStore::new(),
        Arc::new(PdfBackend::with_title("Invoice")),
    )?;

    let (a, b) = tokio::join!(session.generate_document(), session.generate_document());
    let results = [a, b];

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let refused = results
        .iter()
        .filter(|r| matches!(r, Err(GenerationError::AlreadyInFlight)))
        .count();
    assert_eq!((ok, refused), (1, 1));
    assert!(!session.is_generating());
    Ok(())
}
