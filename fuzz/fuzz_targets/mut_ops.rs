#![no_main]

use libfuzzer_sys::fuzz_target;

use depgraph::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
