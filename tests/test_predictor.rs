use eon_rsa_sim::domain::predictor::{LinearPenaltyModel, PenaltyPredictor};
use eon_rsa_sim::error::Error;

#[test]
fn test_linear_model_applies_weights_and_bias() {
    // One weight per feature position, flattened window order.
    let mut weights = vec![0.0; 15];
    weights[0] = 0.5; // latest mean occupancy
    weights[5] = 0.25; // 5th-latest mean occupancy
    weights[10] = 0.25; // 10th-latest mean occupancy

    let model = LinearPenaltyModel::new(weights, 0.1).expect("15 weights");

    let window = [[0.8, 0.0, 0.0, 0.0, 0.0], [0.4, 0.0, 0.0, 0.0, 0.0], [0.2, 0.0, 0.0, 0.0, 0.0]];

    let prediction = model.predict(&window);

    // 0.1 + 0.5*0.8 + 0.25*0.4 + 0.25*0.2
    assert!((prediction - 0.65).abs() < 1e-9);
}

#[test]
fn test_linear_model_rejects_wrong_weight_count() {
    let result = LinearPenaltyModel::new(vec![0.0; 14], 0.0);

    match result {
        Err(Error::InvalidModel(reason)) => assert!(reason.contains("15")),
        other => panic!("Expected InvalidModel, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_zero_model_predicts_bias() {
    let model = LinearPenaltyModel::new(vec![0.0; 15], 0.42).expect("15 weights");

    let window = [[1.0; 5]; 3];

    assert!((model.predict(&window) - 0.42).abs() < 1e-9);
}
