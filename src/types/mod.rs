pub mod bounds;
pub mod mesh;

pub use bounds::{compute_bounding_box, BoundingBox};
pub use mesh::MeshBuffers;
