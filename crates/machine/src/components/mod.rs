//! # Component Kinds
//!
//! The concrete machine parts. Each implements the capability subset it
//! needs from [`crate::component::Component`] and defaults the rest.

mod banner;
mod basket;
mod body;
mod conveyor;
mod curtain;
mod goal;
mod motor;
mod pulley;

pub use banner::Banner;
pub use basket::Basket;
pub use body::Body;
pub use conveyor::Conveyor;
pub use curtain::Curtain;
pub use goal::Goal;
pub use motor::Motor;
pub use pulley::Pulley;
