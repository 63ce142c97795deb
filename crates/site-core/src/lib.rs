pub mod animation;
pub mod config;
pub mod constants;
pub mod content;
pub mod doodle;
pub mod error;
pub mod markup;
pub mod paint;
pub mod particles;
pub mod surface;

pub use animation::*;
pub use config::*;
pub use error::*;
pub use paint::*;
pub use surface::*;
