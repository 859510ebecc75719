pub mod conv;
pub mod initialization;
pub mod instance_norm;
pub mod meta_acon;

pub use conv::PointwiseConv;
pub use initialization::WeightInit;
pub use instance_norm::InstanceNorm;
pub use meta_acon::{MetaAcon, DEFAULT_REDUCTION};
