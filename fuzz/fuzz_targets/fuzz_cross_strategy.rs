#![no_main]

use libfuzzer_sys::fuzz_target;

use algobench_core::{Calculator, CalculatorFactory, DefaultFactory, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Small enough for the recursive strategy to stay cheap
    let n = i64::from(u16::from_le_bytes([data[0], data[1]]) % 2_000) - 10;

    let factory = DefaultFactory::new();
    let opts = Options::default().normalize();
    let reference = factory.get("iterative").unwrap().calculate(n, &opts).unwrap();

    for label in factory.available() {
        let calc = factory.get(label).unwrap();
        if calc.recursion_depth(n).is_some_and(|depth| depth > 20) {
            continue;
        }
        let within_precision = calc
            .exact_limit(&opts)
            .map_or(true, |limit| u64::try_from(n).map_or(true, |n| n <= limit));
        if !within_precision {
            continue;
        }
        let value = calc.calculate(n, &opts).unwrap();
        assert_eq!(value, reference, "{} != Iterative at n={n}", calc.name());
    }
});
