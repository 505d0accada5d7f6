use crate::error::{LossError, Result};

/// Precondition checks shared by both strategies.
///
/// `w_shape` is (D, C), `x_shape` is (N, D). Fails on the first violation:
/// W/X feature dimensions, label count, empty batch, label range, then `reg`.
pub fn validate_inputs(
    w_shape: (usize, usize),
    x_shape: (usize, usize),
    y: &[usize],
    reg: f64,
) -> Result<()> {
    let (dim, num_classes) = w_shape;
    let (num_train, x_dim) = x_shape;

    if x_dim != dim {
        return Err(LossError::ShapeMismatch {
            what: "X columns vs W rows",
            expected: dim,
            got: x_dim,
        });
    }
    if y.len() != num_train {
        return Err(LossError::ShapeMismatch {
            what: "label count vs X rows",
            expected: num_train,
            got: y.len(),
        });
    }
    if num_train == 0 {
        return Err(LossError::EmptyBatch);
    }
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &l)| l >= num_classes) {
        return Err(LossError::LabelOutOfRange { index, label, num_classes });
    }
    if !reg.is_finite() || reg < 0.0 {
        return Err(LossError::InvalidRegularization(reg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_consistent_inputs() {
        assert!(validate_inputs((4, 3), (2, 4), &[0, 2], 0.0).is_ok());
    }

    #[test]
    fn rejects_feature_mismatch() {
        let err = validate_inputs((4, 3), (2, 5), &[0, 1], 0.1).unwrap_err();
        assert!(matches!(err, LossError::ShapeMismatch { expected: 4, got: 5, .. }));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let err = validate_inputs((4, 3), (2, 4), &[0], 0.1).unwrap_err();
        assert!(matches!(err, LossError::ShapeMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn rejects_empty_batch() {
        let err = validate_inputs((4, 3), (0, 4), &[], 0.1).unwrap_err();
        assert!(matches!(err, LossError::EmptyBatch));
    }

    #[test]
    fn rejects_out_of_range_label() {
        let err = validate_inputs((4, 3), (3, 4), &[0, 3, 1], 0.1).unwrap_err();
        assert!(matches!(err, LossError::LabelOutOfRange { index: 1, label: 3, num_classes: 3 }));
    }

    #[test]
    fn rejects_bad_regularization() {
        assert!(matches!(
            validate_inputs((4, 3), (1, 4), &[0], -1.0),
            Err(LossError::InvalidRegularization(_))
        ));
        assert!(validate_inputs((4, 3), (1, 4), &[0], f64::NAN).is_err());
    }
}
