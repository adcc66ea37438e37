#![no_main]

use libfuzzer_sys::fuzz_target;

use algobench_core::{DefaultFactory, SorterFactory};

fuzz_target!(|data: &[u8]| {
    // Bubble sort is quadratic
    let items: Vec<i64> = data
        .chunks_exact(8)
        .take(512)
        .map(|chunk| i64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();

    let mut expected = items.clone();
    expected.sort_unstable();

    let factory = DefaultFactory::new();
    for label in factory.available_sorters() {
        let sorted = factory.get_sorter(label).unwrap().sort(items.clone()).unwrap();
        assert_eq!(sorted, expected, "{label} on {} elements", items.len());
    }
});
