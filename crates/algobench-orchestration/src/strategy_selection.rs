//! Strategy selection logic.

use std::sync::Arc;

use algobench_core::{BenchError, Calculator, CalculatorFactory, Element, SortStrategy, SorterFactory};

/// Get calculators to run based on a label, or `"all"`.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, BenchError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

/// Get sorters to run based on a label, or `"all"`.
pub fn get_sorters_to_run(
    algo: &str,
    factory: &dyn SorterFactory,
) -> Result<Vec<Arc<dyn SortStrategy<Element>>>, BenchError> {
    match algo {
        "all" => factory
            .available_sorters()
            .into_iter()
            .map(|name| factory.get_sorter(name))
            .collect(),
        name => Ok(vec![factory.get_sorter(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        assert_eq!(get_calculators_to_run("all", &factory).unwrap().len(), 6);
        assert_eq!(get_sorters_to_run("all", &factory).unwrap().len(), 4);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("matrix", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "MatrixExponentiation");

        let sorters = get_sorters_to_run("bubble", &factory).unwrap();
        assert_eq!(sorters[0].name(), "BubbleSort");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(get_calculators_to_run("unknown", &factory).is_err());
        assert!(get_sorters_to_run("unknown", &factory).is_err());
    }
}
