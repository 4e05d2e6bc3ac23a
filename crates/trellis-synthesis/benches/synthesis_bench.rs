use criterion::{criterion_group, criterion_main, Criterion};

use trellis_core::config::SynthesisConfig;
use trellis_core::skeleton::{Skeleton, SlotSpec};
use trellis_synthesis::SynthesisEngine;

/// A skeleton shaped like real mined output: several patterns, a mix of
/// required and optional slots with realistic value-set sizes.
fn representative_skeleton() -> Skeleton {
    Skeleton {
        id: "bench-skel".to_string(),
        intent_code: "report.sales".to_string(),
        patterns: vec![
            "查{TIME}的{METRIC}".to_string(),
            "{TIME}{METRIC}是多少".to_string(),
            "统计{TIME}的{METRIC}，按{DIM}分".to_string(),
            "show {METRIC} for {TIME}".to_string(),
        ],
        slots: vec![
            SlotSpec::required("TIME", &["今天", "昨天", "本周", "上周", "本月", "最近7天"]),
            SlotSpec::required("METRIC", &["销售额", "订单量", "客单价", "毛利"]),
            SlotSpec::optional("DIM", &["门店", "品类", "渠道"]),
        ],
    }
}

fn bench_generate_batch(c: &mut Criterion) {
    let engine = SynthesisEngine::with_seed(&SynthesisConfig::default(), 42);
    let skeleton = representative_skeleton();

    c.bench_function("generate_150_candidates", |b| {
        b.iter(|| {
            let samples = engine.generate(&skeleton, 150);
            assert!(!samples.is_empty());
        });
    });
}

fn bench_generate_single(c: &mut Criterion) {
    let engine = SynthesisEngine::with_seed(&SynthesisConfig::default(), 42);
    let skeleton = representative_skeleton();

    c.bench_function("generate_single_candidate", |b| {
        b.iter(|| {
            engine.generate(&skeleton, 1);
        });
    });
}

criterion_group!(benches, bench_generate_batch, bench_generate_single);
criterion_main!(benches);
