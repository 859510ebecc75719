use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coefficients::Params;
use super::composite::{falu, SRelu};
use super::gelu::Gelu;
use super::primitives::{
    elu, hard_sigmoid, hardswish, hardtanh, log_sigmoid, mish, relu, relu6, selu, sigmoid, sign,
    softplus,
};
use crate::error::SafsError;

/// An enumeration of the activation functions a [`ParametricActivation`] can
/// dispatch to.
///
/// Variants serialize to the activation names used for dispatch, so
/// `Activation::TanhSoft1` is written as `"TanhSoft-1"`.
///
/// [`ParametricActivation`]: crate::activations::ParametricActivation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Activation {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "FALU")]
    Falu,
    #[serde(rename = "symlog")]
    Symlog,
    #[serde(rename = "symexp")]
    Symexp,
    #[serde(rename = "SRelu")]
    SRelu,
    #[serde(rename = "meta_acon")]
    MetaAcon,
    #[serde(rename = "acon")]
    Acon,
    #[serde(rename = "TanhSoft-1")]
    TanhSoft1,
    #[serde(rename = "TanhSoft-2")]
    TanhSoft2,
    #[serde(rename = "ash")]
    Ash,
    #[serde(rename = "srs")]
    Srs,
    #[serde(rename = "mish")]
    Mish,
    #[serde(rename = "relu6")]
    Relu6,
    #[serde(rename = "hardswish")]
    Hardswish,
    #[serde(rename = "elu")]
    Elu,
    #[default]
    #[serde(rename = "relu")]
    Relu,
    #[serde(rename = "selu")]
    Selu,
    #[serde(rename = "tanh")]
    Tanh,
    #[serde(rename = "sigmoid")]
    Sigmoid,
    #[serde(rename = "logsigmiod", alias = "logsigmoid")]
    LogSigmoid,
    #[serde(rename = "hardtan")]
    Hardtan,
    #[serde(rename = "softplus")]
    Softplus,
    #[serde(rename = "swish")]
    Swish,
    #[serde(rename = "sin")]
    Sin,
    #[serde(rename = "cos")]
    Cos,
    #[serde(rename = "gelu")]
    Gelu,
    #[serde(rename = "elish")]
    Elish,
    #[serde(rename = "hard_elish")]
    HardElish,
}

/// Elementwise formula evaluated with the coefficient values.
pub type Formula = fn(&Params, f32) -> f32;

/// How the dispatcher evaluates an activation.
#[derive(Clone, Copy)]
pub enum Route {
    /// Pure per-element formula.
    Elementwise(Formula),
    /// Per-sample percentile thresholding.
    PercentileThreshold,
    /// Gated by the meta-ACON sub-network.
    MetaAcon,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Elementwise(_) => f.write_str("Elementwise"),
            Route::PercentileThreshold => f.write_str("PercentileThreshold"),
            Route::MetaAcon => f.write_str("MetaAcon"),
        }
    }
}

impl Activation {
    /// Every activation in the catalogue.
    pub const ALL: [Activation; 28] = [
        Activation::Linear,
        Activation::Falu,
        Activation::Symlog,
        Activation::Symexp,
        Activation::SRelu,
        Activation::MetaAcon,
        Activation::Acon,
        Activation::TanhSoft1,
        Activation::TanhSoft2,
        Activation::Ash,
        Activation::Srs,
        Activation::Mish,
        Activation::Relu6,
        Activation::Hardswish,
        Activation::Elu,
        Activation::Relu,
        Activation::Selu,
        Activation::Tanh,
        Activation::Sigmoid,
        Activation::LogSigmoid,
        Activation::Hardtan,
        Activation::Softplus,
        Activation::Swish,
        Activation::Sin,
        Activation::Cos,
        Activation::Gelu,
        Activation::Elish,
        Activation::HardElish,
    ];

    /// The dispatch name of this activation.
    pub fn name(self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Falu => "FALU",
            Activation::Symlog => "symlog",
            Activation::Symexp => "symexp",
            Activation::SRelu => "SRelu",
            Activation::MetaAcon => "meta_acon",
            Activation::Acon => "acon",
            Activation::TanhSoft1 => "TanhSoft-1",
            Activation::TanhSoft2 => "TanhSoft-2",
            Activation::Ash => "ash",
            Activation::Srs => "srs",
            Activation::Mish => "mish",
            Activation::Relu6 => "relu6",
            Activation::Hardswish => "hardswish",
            Activation::Elu => "elu",
            Activation::Relu => "relu",
            Activation::Selu => "selu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
            Activation::LogSigmoid => "logsigmiod",
            Activation::Hardtan => "hardtan",
            Activation::Softplus => "softplus",
            Activation::Swish => "swish",
            Activation::Sin => "sin",
            Activation::Cos => "cos",
            Activation::Gelu => "gelu",
            Activation::Elish => "elish",
            Activation::HardElish => "hard_elish",
        }
    }

    /// Resolve a name, falling back to [`Activation::Relu`] with a warning
    /// when the name is not in the catalogue.
    pub fn resolve(name: &str) -> Activation {
        name.parse().unwrap_or_else(|err: SafsError| {
            log::warn!("{}, falling back to relu", err);
            Activation::Relu
        })
    }

    /// Whether the output at each position depends only on the input at that
    /// position.
    pub fn is_elementwise(self) -> bool {
        matches!(self.route(), Route::Elementwise(_))
    }

    /// How this activation is evaluated.
    pub fn route(self) -> Route {
        match self {
            Activation::Linear => Route::Elementwise(linear),
            Activation::Falu => Route::Elementwise(falu_formula),
            Activation::Symlog => Route::Elementwise(symlog),
            Activation::Symexp => Route::Elementwise(symexp),
            Activation::SRelu => Route::Elementwise(srelu),
            Activation::MetaAcon => Route::MetaAcon,
            Activation::Acon => Route::Elementwise(acon),
            Activation::TanhSoft1 => Route::Elementwise(tanh_soft_1),
            Activation::TanhSoft2 => Route::Elementwise(tanh_soft_2),
            Activation::Ash => Route::PercentileThreshold,
            Activation::Srs => Route::Elementwise(srs),
            Activation::Mish => Route::Elementwise(|p, x| p.p1 * mish(p.p2 * x)),
            Activation::Relu6 => Route::Elementwise(|p, x| p.p1 * relu6(p.p2 * x)),
            Activation::Hardswish => Route::Elementwise(|p, x| p.p1 * hardswish(p.p2 * x)),
            Activation::Elu => Route::Elementwise(|p, x| p.p1 * elu(p.p2 * x)),
            Activation::Relu => Route::Elementwise(|p, x| p.p1 * relu(p.p2 * x)),
            Activation::Selu => Route::Elementwise(|p, x| p.p1 * selu(p.p2 * x)),
            Activation::Tanh => Route::Elementwise(|p, x| p.p1 * (p.p2 * x).tanh()),
            Activation::Sigmoid => Route::Elementwise(|p, x| p.p1 * sigmoid(p.p2 * x)),
            Activation::LogSigmoid => Route::Elementwise(|p, x| p.p1 * log_sigmoid(p.p2 * x)),
            Activation::Hardtan => Route::Elementwise(|p, x| p.p1 * hardtanh(p.p2 * x)),
            Activation::Softplus => Route::Elementwise(|p, x| p.p1 * softplus(p.p2 * x)),
            Activation::Swish => Route::Elementwise(|p, x| p.p1 * sigmoid(p.p2 * x) * x),
            Activation::Sin => Route::Elementwise(|p, x| p.p1 * (p.p2 * x).sin()),
            Activation::Cos => Route::Elementwise(|p, x| p.p1 * (p.p2 * x).cos()),
            Activation::Gelu => Route::Elementwise(|p, x| p.p1 * Gelu::exact(p.p2 * x)),
            Activation::Elish => Route::Elementwise(elish),
            Activation::HardElish => Route::Elementwise(hard_elish),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = SafsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "logsigmoid" {
            return Ok(Activation::LogSigmoid);
        }
        Activation::ALL
            .iter()
            .copied()
            .find(|act| act.name() == name)
            .ok_or_else(|| SafsError::UnknownActivation(name.to_string()))
    }
}

fn linear(p: &Params, x: f32) -> f32 {
    p.p1 * x
}

fn falu_formula(p: &Params, x: f32) -> f32 {
    falu(p.p2 * x, p.p1)
}

fn symlog(p: &Params, x: f32) -> f32 {
    let t = p.p2 * x;
    p.p1 * sign(t) * t.abs().ln_1p()
}

fn symexp(p: &Params, x: f32) -> f32 {
    let t = p.p2 * x;
    p.p1 * sign(t) * t.abs().exp_m1()
}

fn srelu(p: &Params, x: f32) -> f32 {
    SRelu {
        t_left: p.p1,
        t_right: p.p2,
        a_left: p.p3,
        a_right: p.p4,
    }
    .eval(x)
}

fn acon(p: &Params, x: f32) -> f32 {
    let d = p.p1 * x - p.p2 * x;
    d * sigmoid(p.p3 * d) + p.p2 * x
}

fn tanh_soft_1(p: &Params, x: f32) -> f32 {
    (p.p1 * x).tanh() * softplus(x)
}

fn tanh_soft_2(p: &Params, x: f32) -> f32 {
    x * (p.p1 * (p.p2 * x).exp()).tanh()
}

fn srs(p: &Params, x: f32) -> f32 {
    super::composite::srs_scalar(x, p.p1, p.p2)
}

// The branch tests the unscaled input while both arms use p2 * x.
fn elish(p: &Params, x: f32) -> f32 {
    let t = p.p2 * x;
    if x < 0.0 {
        p.p1 * elu(t) * sigmoid(t)
    } else {
        p.p1 * sigmoid(t) * x
    }
}

fn hard_elish(p: &Params, x: f32) -> f32 {
    let t = p.p2 * x;
    if x < 0.0 {
        p.p1 * elu(t) * hard_sigmoid(t)
    } else {
        p.p1 * hard_sigmoid(t) * x
    }
}
