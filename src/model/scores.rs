use crate::model::dimension::{DIMENSION_COUNT, Dimension};

/// One normalized 0-100 score per dimension, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScores {
    values: [f32; DIMENSION_COUNT],
}

impl DimensionScores {
    pub fn new(values: [f32; DIMENSION_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, dim: Dimension) -> f32 {
        self.values[dim.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL.iter().map(|&dim| (dim, self.get(dim)))
    }

    pub fn values(&self) -> &[f32; DIMENSION_COUNT] {
        &self.values
    }
}
