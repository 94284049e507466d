use super::*;

mod button;

pub use button::Button;
