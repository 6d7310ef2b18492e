// scoring/src/lib.rs
//
// The two computation units behind the prediction and explanation
// endpoints. Both are pure, synchronous, total functions over value types:
// no state, no I/O, no failure paths. Missing input fields take the
// documented clinical defaults, so arbitrary (even empty) input maps are
// accepted.

pub mod importance;
pub mod reference;
pub mod risk;

pub use importance::{rank_features, summarize, ExplanationSummary};
pub use risk::assess;
