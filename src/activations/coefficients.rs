use serde::{Deserialize, Serialize};

/// A single scalar coefficient of a parametric activation.
///
/// The `trainable` flag is carried for the host training loop; nothing in
/// this crate updates coefficient values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub value: f32,
    pub trainable: bool,
}

impl Coefficient {
    pub fn fixed(value: f32) -> Self {
        Coefficient { value, trainable: false }
    }

    pub fn trainable(value: f32) -> Self {
        Coefficient { value, trainable: true }
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::fixed(1.0)
    }
}

impl From<f32> for Coefficient {
    fn from(value: f32) -> Self {
        Coefficient::fixed(value)
    }
}

/// The five coefficients `p1..p5` owned by a [`ParametricActivation`].
///
/// [`ParametricActivation`]: crate::activations::ParametricActivation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefficients {
    pub p1: Coefficient,
    pub p2: Coefficient,
    pub p3: Coefficient,
    pub p4: Coefficient,
    pub p5: Coefficient,
}

impl Coefficients {
    pub fn new(p1: f32, p2: f32, p3: f32, p4: f32, p5: f32) -> Self {
        Coefficients {
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
            p4: p4.into(),
            p5: p5.into(),
        }
    }

    /// Mark every coefficient as trainable (or fixed).
    pub fn with_trainable(mut self, trainable: bool) -> Self {
        for c in self.iter_mut() {
            c.trainable = trainable;
        }
        self
    }

    /// Plain values used by the formulas.
    pub fn values(&self) -> Params {
        Params {
            p1: self.p1.value,
            p2: self.p2.value,
            p3: self.p3.value,
            p4: self.p4.value,
            p5: self.p5.value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coefficient> {
        [&self.p1, &self.p2, &self.p3, &self.p4, &self.p5].into_iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Coefficient> {
        [&mut self.p1, &mut self.p2, &mut self.p3, &mut self.p4, &mut self.p5].into_iter()
    }

    /// Number of coefficients flagged trainable.
    pub fn num_trainable(&self) -> usize {
        self.iter().filter(|c| c.trainable).count()
    }
}

/// Snapshot of coefficient values passed to the elementwise formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub p1: f32,
    pub p2: f32,
    pub p3: f32,
    pub p4: f32,
    pub p5: f32,
}

impl Default for Params {
    fn default() -> Self {
        Coefficients::default().values()
    }
}
