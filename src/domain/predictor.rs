use std::path::Path;

use serde::Deserialize;

use crate::domain::spectrum::analyzer::N_FEATURES;
use crate::domain::spectrum::snapshot::FEATURE_WINDOW;
use crate::error::{Error, Result};
use crate::loader::parser::parse_json_file;

/// Congestion predictor consumed by the simulation as an opaque capability.
///
/// The concrete regression model is trained and owned entirely outside the
/// simulator; the loop only needs a pure function from a three-snapshot
/// feature window to a scalar penalty. Implementations must be stateless
/// with respect to `predict`.
pub trait PenaltyPredictor {
    /// Predicts the congestion penalty for a node from its feature window
    /// `[latest, 5th-latest, 10th-latest]`.
    ///
    /// Values above `1.0` are anomalous; the caller logs them but still uses
    /// them.
    fn predict(&self, window: &[[f64; N_FEATURES]; FEATURE_WINDOW]) -> f64;
}

/// Linear regression over the flattened 15-element feature window.
///
/// The weight vector is an offline training artifact loaded from a JSON
/// file, which keeps the model swappable without touching the simulator.
#[derive(Debug, Deserialize)]
pub struct LinearPenaltyModel {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPenaltyModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self> {
        if weights.len() != N_FEATURES * FEATURE_WINDOW {
            return Err(Error::InvalidModel(format!("expected {} weights, got {}", N_FEATURES * FEATURE_WINDOW, weights.len())));
        }

        Ok(LinearPenaltyModel { weights, bias })
    }

    /// Loads model weights from a JSON file of the form
    /// `{"weights": [...], "bias": ...}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let model: LinearPenaltyModel = parse_json_file(path)?;
        LinearPenaltyModel::new(model.weights, model.bias)
    }
}

impl PenaltyPredictor for LinearPenaltyModel {
    fn predict(&self, window: &[[f64; N_FEATURES]; FEATURE_WINDOW]) -> f64 {
        let mut prediction = self.bias;

        for (i, features) in window.iter().enumerate() {
            for (j, feature) in features.iter().enumerate() {
                prediction += self.weights[i * N_FEATURES + j] * feature;
            }
        }

        return prediction;
    }
}
