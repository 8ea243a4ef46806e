pub mod exact;
pub mod predicates;

/// 2D point type used by the floating-point predicates.
pub type Point2 = nalgebra::Point2<f64>;

pub use exact::ExactPoint;
pub use predicates::{lex_cmp, orient2d, Orientation};
