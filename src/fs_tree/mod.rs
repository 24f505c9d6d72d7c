pub mod build;
pub mod node;
pub mod render;

pub use build::build_tree;
pub use node::Node;
pub use render::render;
