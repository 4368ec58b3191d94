//! Boundary to the external digit classifier
//!
//! The model itself lives outside this crate; anything that can score a
//! [`Tensor`] implements [`Classifier`].

use std::fmt;

use crate::tensor::Tensor;

/// Classifier output for one tensor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Probability of `label`, in [0, 1]
    pub confidence: f32,
    /// Predicted digit
    pub label: u32,
}

impl Prediction {
    /// Confidence as a percentage with at most one decimal
    pub fn percent(&self) -> String {
        let text = format!("{:.1}", self.confidence * 100.0);
        match text.strip_suffix(".0") {
            Some(whole) => whole.to_string(),
            None => text,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "With a probability of {}% this is the number {}",
            self.percent(),
            self.label
        )
    }
}

/// A model that scores input tensors
pub trait Classifier {
    fn forward(&self, tensor: &Tensor) -> Prediction;
}

impl<F> Classifier for F
where
    F: Fn(&Tensor) -> Prediction,
{
    fn forward(&self, tensor: &Tensor) -> Prediction {
        self(tensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_message() {
        let p = Prediction {
            confidence: 0.975,
            label: 7,
        };
        assert_eq!(
            p.to_string(),
            "With a probability of 97.5% this is the number 7"
        );
    }

    #[test]
    fn test_percent_drops_trailing_zero() {
        let whole = Prediction {
            confidence: 1.0,
            label: 1,
        };
        assert_eq!(whole.percent(), "100");
        let tiny = Prediction {
            confidence: 0.0,
            label: 0,
        };
        assert_eq!(tiny.percent(), "0");
    }

    #[test]
    fn test_closure_classifier() {
        let count_values = |t: &Tensor| Prediction {
            confidence: 0.5,
            label: t.values().len() as u32,
        };
        let tensor = Tensor {
            width: 2,
            height: 1,
            values: vec![0.01, 1.0],
        };
        assert_eq!(count_values.forward(&tensor).label, 2);
    }
}
