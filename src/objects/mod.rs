pub mod body;
pub mod descriptor;

pub use body::Body;
pub use descriptor::{load_bodies, BodyDesc};
