//! Assembly benchmark: session record → ordered feature vector (per-trigger path).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shopper_intent::features::encode;
use shopper_intent::session::{Month, OperatingSystem, Session, VisitorType, Weekend};

fn sample_session() -> Session {
    Session {
        administrative: 3,
        administrative_duration: 64.5,
        informational: 1,
        informational_duration: 12.0,
        product_related: 42,
        product_related_duration: 812.3,
        bounce_rate: 0.02,
        exit_rate: 0.04,
        page_value: 18.7,
        special_day: 0.2,
        month: Month::Nov,
        operating_system: OperatingSystem::Windows,
        browser: 2,
        region: 4,
        traffic_type: 3,
        visitor_type: VisitorType::Returning,
        weekend: Weekend::Yes,
    }
}

fn bench_encode(c: &mut Criterion) {
    let session = sample_session();
    c.bench_function("encode_session_17d", |b| {
        b.iter(|| encode(black_box(&session)))
    });
}

fn bench_parse_and_encode(c: &mut Criterion) {
    let line = serde_json::to_string(&sample_session()).unwrap();
    c.bench_function("parse_and_encode", |b| {
        b.iter(|| {
            let s: Session = serde_json::from_str(black_box(&line)).unwrap();
            encode(&s)
        })
    });
}

criterion_group!(benches, bench_encode, bench_parse_and_encode);
criterion_main!(benches);
