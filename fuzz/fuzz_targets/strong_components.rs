#![no_main]

use libfuzzer_sys::fuzz_target;

use depgraph::{
    algo::{strong_components::Order, StrongComponents},
    infra::{arbitrary::MutOpsSeq, testing::check_strong_components},
    Graph,
};

fuzz_target!(|ops: MutOpsSeq<u8>| {
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);

        for order in [Order::DependenciesFirst, Order::DependentsFirst] {
            let components = StrongComponents::on(&graph).order(order).run();
            check_strong_components(&graph, &components)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();
        }
    }
});
