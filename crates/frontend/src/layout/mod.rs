pub mod features;
pub mod hero;
pub mod navbar;

pub use features::Features;
pub use hero::Hero;
pub use navbar::Navbar;
