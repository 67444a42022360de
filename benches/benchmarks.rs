//! Performance benchmarks for zkview

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::NoColor;
use zkview::test_utils::MemoryNamespace;
use zkview::{
    MetadataBlock, MetadataConfig, NodeMetadata, OutputConfig, StreamingFormatter, TreeWalker,
    WalkerConfig,
};

/// A namespace shaped like a busy Kafka cluster: `topics` topics with
/// `partitions` partitions each, every partition holding a small state payload.
fn create_namespace(topics: usize, partitions: usize) -> MemoryNamespace {
    let mut ns = MemoryNamespace::new().with_node("/controller", br#"{"brokerid":1}"#);
    for broker in 0..5 {
        ns = ns.with_node(
            &format!("/brokers/ids/{}", broker),
            format!(r#"{{"host":"kafka-{}","port":9092}}"#, broker).as_bytes(),
        );
    }
    for topic in 0..topics {
        for partition in 0..partitions {
            ns = ns.with_node(
                &format!("/brokers/topics/topic-{}/partitions/{}/state", topic, partition),
                br#"{"leader":1,"isr":[1,2,3]}"#,
            );
        }
    }
    ns
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for (name, topics) in [("small", 10), ("medium", 100), ("large", 500)] {
        let ns = create_namespace(topics, 8);

        group.bench_function(format!("{}_plain", name), |b| {
            b.iter(|| {
                let walker = TreeWalker::new(WalkerConfig::default(), &ns);
                let mut formatter =
                    StreamingFormatter::with_writer(OutputConfig::plain(), NoColor::new(Vec::new()));
                black_box(walker.walk("/", &mut formatter).unwrap())
            })
        });

        group.bench_function(format!("{}_meta_human", name), |b| {
            let config = OutputConfig {
                metadata: MetadataConfig::shown(true),
                ..OutputConfig::plain()
            };
            b.iter(|| {
                let walker = TreeWalker::new(WalkerConfig::default(), &ns);
                let mut formatter =
                    StreamingFormatter::with_writer(config.clone(), NoColor::new(Vec::new()));
                black_box(walker.walk("/", &mut formatter).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_metadata_block(c: &mut Criterion) {
    let meta = NodeMetadata {
        data_version: 12,
        child_version: 3,
        created_at: 1_700_000_000_000,
        modified_at: 1_700_000_123_456,
        ephemeral_owner: 0,
        data_length: 42,
        child_count: 3,
    };

    c.bench_function("metadata_block_raw", |b| {
        b.iter(|| {
            let block = MetadataBlock::from_metadata(black_box(&meta), false);
            black_box(block.render("│   │").unwrap())
        })
    });

    c.bench_function("metadata_block_human", |b| {
        b.iter(|| {
            let block = MetadataBlock::from_metadata(black_box(&meta), true);
            black_box(block.render("│   │").unwrap())
        })
    });
}

criterion_group!(benches, bench_walk, bench_metadata_block);
criterion_main!(benches);
