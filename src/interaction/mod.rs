use serde::{Deserialize, Serialize};

/// The resolved selection of a touch or programmatic highlight call.
///
/// `stack_index` is `None` when the whole bar is selected: unstacked entries,
/// full-bar highlight mode, or a programmatic whole-bar request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub x: f64,
    pub data_set_index: usize,
    pub stack_index: Option<usize>,
}

impl Highlight {
    #[must_use]
    pub fn new(x: f64, data_set_index: usize, stack_index: Option<usize>) -> Self {
        Self {
            x,
            data_set_index,
            stack_index,
        }
    }

    /// Whole-bar selection of one entry.
    #[must_use]
    pub fn full_bar(x: f64, data_set_index: usize) -> Self {
        Self::new(x, data_set_index, None)
    }

    /// Selection of one segment inside a stacked bar.
    #[must_use]
    pub fn stacked_segment(x: f64, data_set_index: usize, stack_index: usize) -> Self {
        Self::new(x, data_set_index, Some(stack_index))
    }
}
