pub mod doctor;
pub mod identity;

pub use doctor::*;
pub use identity::*;
