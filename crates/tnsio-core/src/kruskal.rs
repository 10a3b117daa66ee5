//! Kruskal (CP) tensor
//!
//! A Kruskal tensor represents
//!
//! X = Σᵣ λᵣ (u₁ᵣ ⊗ u₂ᵣ ⊗ ... ⊗ uₙᵣ)
//!
//! Where:
//! - R is the rank (number of components)
//! - λᵣ are the component weights
//! - uᵢᵣ are the columns of factor matrix Uᵢ ∈ ℝ^(Iᵢ×R)
//!
//! This crate only stores and validates the factors. Reconstruction of the
//! full tensor belongs to the decomposition layer, not here.

use crate::error::{CoreError, CoreResult};
use scirs2_core::ndarray_ext::{Array1, Array2};

/// Weighted sum of rank-one tensors
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalTensor {
    /// Weight of each rank-one component, length R
    weights: Array1<f64>,

    /// One factor matrix per mode, each of shape (Iₙ, R)
    factors: Vec<Array2<f64>>,
}

impl KruskalTensor {
    /// Create a Kruskal tensor from weights and factor matrices
    ///
    /// # Errors
    ///
    /// Fails if there are no factors, the rank is zero, a factor has no rows,
    /// or any factor's column count differs from `weights.len()`.
    pub fn new(weights: Array1<f64>, factors: Vec<Array2<f64>>) -> CoreResult<Self> {
        let rank = weights.len();
        if rank == 0 {
            return Err(CoreError::InvalidRank(rank));
        }
        if factors.is_empty() {
            return Err(CoreError::NoFactors);
        }
        for (mode, factor) in factors.iter().enumerate() {
            if factor.nrows() == 0 {
                return Err(CoreError::EmptyFactor { mode });
            }
            if factor.ncols() != rank {
                return Err(CoreError::FactorRank {
                    mode,
                    expected: rank,
                    got: factor.ncols(),
                });
            }
        }

        Ok(Self { weights, factors })
    }

    /// Create a Kruskal tensor with all weights equal to one
    pub fn from_factors(factors: Vec<Array2<f64>>) -> CoreResult<Self> {
        let rank = factors.first().map_or(0, |f| f.ncols());
        Self::new(Array1::ones(rank), factors)
    }

    /// Shape of the represented tensor (row count of each factor)
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// Number of modes
    pub fn order(&self) -> usize {
        self.factors.len()
    }

    /// Number of rank-one components
    pub fn rank(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn factors(&self) -> &[Array2<f64>] {
        &self.factors
    }

    /// Factor matrix of one mode
    pub fn factor(&self, mode: usize) -> Option<&Array2<f64>> {
        self.factors.get(mode)
    }

    /// Exact equality of weights and every factor matrix
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }
}
