pub mod config;
pub mod constants;
pub mod controller;
pub mod damp;
pub mod error;
pub mod gizmo;
pub mod idle;
pub mod projection;
pub mod regime;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use damp::*;
pub use error::*;
pub use gizmo::*;
pub use idle::*;
pub use projection::*;
pub use regime::*;
