pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

/// One entry of the algorithm registry: a stable CLI id, a display name, and
/// the in-place ascending sort it dispatches to.
pub struct AlgorithmSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub sort: fn(&mut [i64]),
}

/// Process-wide registry of the six benchmarked algorithms.
pub const ALGORITHMS: &[AlgorithmSpec] = &[
    AlgorithmSpec {
        id: "insertion",
        name: "Insertion Sort",
        sort: insertion::sort,
    },
    AlgorithmSpec {
        id: "selection",
        name: "Selection Sort",
        sort: selection::sort,
    },
    AlgorithmSpec {
        id: "bubble",
        name: "Bubble Sort",
        sort: bubble::sort,
    },
    AlgorithmSpec {
        id: "merge",
        name: "Merge Sort",
        sort: merge::sort,
    },
    AlgorithmSpec {
        id: "heap",
        name: "Heap Sort",
        sort: heap::sort,
    },
    AlgorithmSpec {
        id: "quick",
        name: "Quick Sort",
        sort: quick::sort,
    },
];

/// Looks up an algorithm by its registry id.
pub fn resolve(id: &str) -> Option<&'static AlgorithmSpec> {
    ALGORITHMS.iter().find(|a| a.id == id)
}

/// The valid ids, in registry order, for usage messages.
pub fn algorithm_ids() -> Vec<&'static str> {
    ALGORITHMS.iter().map(|a| a.id).collect()
}
