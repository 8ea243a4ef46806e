mod is_convex;
mod is_simple;
mod point_location;
mod signed_area;
mod winding;

pub use is_convex::IsConvex;
pub use is_simple::IsSimple;
pub use point_location::{ContainsPoint, OrientedSide, PointLocation};
pub use signed_area::SignedArea;
pub use winding::{Winding, WindingDirection};
