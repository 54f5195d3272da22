use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use invoicer_core::LineItemId;
use invoicer_invoicing::{Amount, Invoice, LineItem, Party};
use invoicer_layout::{PageTemplate, layout_invoice};
use invoicer_layout::wrap::wrap_text;

fn invoice_with(rows: usize) -> Invoice {
    let items = (0..rows)
        .map(|i| {
            LineItem::new(
                LineItemId::new(),
                format!("Consulting block {i}"),
                Amount::ONE,
                Amount::new(125.0 + i as f64).unwrap_or(Amount::ZERO),
            )
        })
        .collect();
    Invoice {
        invoice_number: "INV-BENCH".to_string(),
        invoice_date: "2024-01-01".to_string(),
        due_date: "2024-01-31".to_string(),
        from: Party::new("Bench Co", "1 Loop Rd, Cycle City, Nowhere", "bench@example.com"),
        to: Party::new("Client", "2 Hot Path, Tight Loop", "client@example.com"),
        items,
        notes: "Payment terms: net thirty days. ".repeat(10),
        currency: "$".to_string(),
    }
}

fn bench_layout(c: &mut Criterion) {
    let template = PageTemplate::a4();
    let mut group = c.benchmark_group("layout_invoice");

    for rows in [0usize, 10, 25] {
        let invoice = invoice_with(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &invoice, |b, inv| {
            b.iter(|| layout_invoice(black_box(inv), black_box(&template)))
        });
    }

    group.finish();
}

fn bench_wrap(c: &mut Criterion) {
    let notes = "The quick brown fox jumps over the lazy dog. ".repeat(50);
    c.bench_function("wrap_text_2kb", |b| {
        b.iter(|| wrap_text(black_box(&notes), 182.0, 10.0))
    });
}

criterion_group!(benches, bench_layout, bench_wrap);
criterion_main!(benches);
