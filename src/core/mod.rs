pub mod contact;
pub mod motion;
pub mod palette;
pub mod parallax;
pub mod scroll;
pub mod tilt;
