//! Algebra over edge stores: products, kernel rescaling and transforms.
//!
//! Every operation here returns a fresh `Graph` and leaves its inputs intact.
pub mod field;
pub mod multiply;
pub mod scale;
pub mod transform;

pub use field::NodeField;
pub use multiply::multiply;
pub use scale::scale_by_kernel;
pub use transform::Transform;
