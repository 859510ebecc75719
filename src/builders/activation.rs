use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activations::{Coefficient, Coefficients, ParametricActivation};
use crate::error::{Result, SafsError};
use crate::layers::meta_acon::{MetaAcon, DEFAULT_REDUCTION};

/// Builder for ParametricActivation
pub struct ParametricActivationBuilder {
    acon_size: Option<usize>,
    reduction: usize,
    seed: Option<u64>,
    values: [f32; 5],
    trainable: bool,
}

impl ParametricActivationBuilder {
    /// Create a new builder: no meta-ACON gate, every coefficient fixed at 1
    pub fn new() -> Self {
        ParametricActivationBuilder {
            acon_size: None,
            reduction: DEFAULT_REDUCTION,
            seed: None,
            values: [1.0; 5],
            trainable: false,
        }
    }

    /// Enable the meta-ACON gate for `width` channels
    pub fn acon_size(mut self, width: usize) -> Self {
        self.acon_size = Some(width);
        self
    }

    /// Set the gate's channel reduction ratio
    pub fn reduction(mut self, reduction: usize) -> Self {
        self.reduction = reduction;
        self
    }

    /// Seed the gate initialization
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn p1(mut self, value: f32) -> Self {
        self.values[0] = value;
        self
    }

    pub fn p2(mut self, value: f32) -> Self {
        self.values[1] = value;
        self
    }

    pub fn p3(mut self, value: f32) -> Self {
        self.values[2] = value;
        self
    }

    pub fn p4(mut self, value: f32) -> Self {
        self.values[3] = value;
        self
    }

    pub fn p5(mut self, value: f32) -> Self {
        self.values[4] = value;
        self
    }

    /// Flag the coefficients as trainable for the host training loop
    pub fn trainable(mut self, trainable: bool) -> Self {
        self.trainable = trainable;
        self
    }

    /// Build the dispatcher
    pub fn build(self) -> Result<ParametricActivation> {
        if self.reduction == 0 {
            return Err(SafsError::InvalidParameter {
                name: "reduction".to_string(),
                reason: "Reduction ratio must be greater than 0".to_string(),
            });
        }

        let meta_acon = match self.acon_size {
            Some(0) => {
                return Err(SafsError::InvalidParameter {
                    name: "acon_size".to_string(),
                    reason: "Channel width must be greater than 0".to_string(),
                });
            }
            Some(width) => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Some(MetaAcon::new(width, self.reduction, &mut rng)?)
            }
            None => None,
        };

        let [p1, p2, p3, p4, p5] = self.values.map(|value| Coefficient {
            value,
            trainable: self.trainable,
        });
        let coefficients = Coefficients { p1, p2, p3, p4, p5 };

        Ok(ParametricActivation::from_parts(coefficients, meta_acon))
    }
}

impl Default for ParametricActivationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
