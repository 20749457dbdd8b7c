#![no_main]

use grangebench::graph::{GraphFileBuilder, GraphStore, NodeId};
use grangebench::measure::AccessTrace;
use grangebench::spatial::{OBJECT_RECORD_BYTES, load_object_records, parse_object_records};
use libfuzzer_sys::fuzz_target;

// Fuzz object-file loading with arbitrary text
//
// Parsing must never panic. When a load succeeds, every indexed object must
// resolve to a real node and the accounted data size must match the record
// count.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parser alone first: any outcome is fine, panics are not.
    let _ = parse_object_records(text);

    // Then a full load against a small fixed graph.
    let mut builder = GraphFileBuilder::with_page_size(64);
    let nodes: Vec<NodeId> = (0..16).map(|i| builder.add_node(i as f32, 0.0)).collect();
    for pair in nodes.windows(2) {
        builder.add_road(pair[0], pair[1], 1.0);
    }
    let store = GraphStore::from_bytes(builder.to_bytes()).unwrap();

    let mut trace = AccessTrace::new();
    if let Ok(loaded) = load_object_records(text, &store, &mut trace) {
        loaded.index.debug_validate_invariants();
        assert_eq!(loaded.record_count, loaded.index.len() as u64);
        assert_eq!(loaded.data_bytes, loaded.record_count * OBJECT_RECORD_BYTES);
        for entry in loaded.index.entries() {
            assert!(store.contains(entry.node));
        }
    }
});
