pub mod section;
pub mod view_model;

pub use section::AbdmSection;
