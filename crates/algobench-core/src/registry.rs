//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bubble_sort::BubbleSort;
use crate::calculator::{Calculator, CoreCalculator, FibCalculator};
use crate::closed_form::ClosedForm;
use crate::error::BenchError;
use crate::heap_sort::HeapSort;
use crate::iterative::Iterative;
use crate::matrix::MatrixExponentiation;
use crate::memoized::Memoized;
use crate::merge_sort::MergeSort;
use crate::quick_sort::QuickSort;
use crate::recursive::Recursive;
use crate::sort::SortStrategy;
use crate::tabulated::Tabulated;

/// Element type of the benchmarked arrays.
pub type Element = i64;

/// Labels accepted by [`CalculatorFactory::get`], in presentation order.
pub const FIBONACCI_LABELS: [&str; 6] = [
    "recursive",
    "memoized",
    "tabulated",
    "iterative",
    "matrix",
    "closed-form",
];

/// Labels accepted by [`SorterFactory::get_sorter`], in presentation order.
pub const SORT_LABELS: [&str; 4] = ["quick", "merge", "heap", "bubble"];

/// Factory trait for Fibonacci strategies.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by label.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, BenchError>;

    /// List all available calculator labels.
    fn available(&self) -> Vec<&str>;
}

/// Factory trait for sort strategies.
pub trait SorterFactory: Send + Sync {
    /// Get or create a sorter by label.
    fn get_sorter(&self, name: &str) -> Result<Arc<dyn SortStrategy<Element>>, BenchError>;

    /// List all available sorter labels.
    fn available_sorters(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// Cached strategies are stateless; per-call state such as the memoization
/// cache lives inside each invocation.
pub struct DefaultFactory {
    calculators: RwLock<HashMap<String, Arc<dyn Calculator>>>,
    sorters: RwLock<HashMap<String, Arc<dyn SortStrategy<Element>>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculators: RwLock::new(HashMap::new()),
            sorters: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, BenchError> {
        let core: Arc<dyn CoreCalculator> = match name {
            "recursive" => Arc::new(Recursive::new()),
            "memoized" | "memo" => Arc::new(Memoized::new()),
            "tabulated" | "tabulation" => Arc::new(Tabulated::new()),
            "iterative" => Arc::new(Iterative::new()),
            "matrix" => Arc::new(MatrixExponentiation::new()),
            "closed-form" | "binet" => Arc::new(ClosedForm::new()),
            _ => return Err(BenchError::Config(format!("unknown fibonacci strategy: {name}"))),
        };
        Ok(Arc::new(FibCalculator::new(core)))
    }

    fn create_sorter(name: &str) -> Result<Arc<dyn SortStrategy<Element>>, BenchError> {
        match name {
            "quick" | "quicksort" => Ok(Arc::new(QuickSort::new())),
            "merge" | "mergesort" => Ok(Arc::new(MergeSort::new())),
            "heap" | "heapsort" => Ok(Arc::new(HeapSort::new())),
            "bubble" | "bubblesort" => Ok(Arc::new(BubbleSort::new())),
            _ => Err(BenchError::Config(format!("unknown sort strategy: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, BenchError> {
        // Check cache first
        if let Some(calc) = self.calculators.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        tracing::debug!(label = name, strategy = calc.name(), "created fibonacci strategy");
        self.calculators
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        FIBONACCI_LABELS.to_vec()
    }
}

impl SorterFactory for DefaultFactory {
    fn get_sorter(&self, name: &str) -> Result<Arc<dyn SortStrategy<Element>>, BenchError> {
        if let Some(sorter) = self.sorters.read().get(name) {
            return Ok(Arc::clone(sorter));
        }

        let sorter = Self::create_sorter(name)?;
        tracing::debug!(label = name, strategy = sorter.name(), "created sort strategy");
        self.sorters
            .write()
            .insert(name.to_string(), Arc::clone(&sorter));
        Ok(sorter)
    }

    fn available_sorters(&self) -> Vec<&str> {
        SORT_LABELS.to_vec()
    }
}
