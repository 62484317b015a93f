//! Value types and the text command protocol shared by the controller and its displays.

pub mod domain;
pub mod error;
pub mod protocol;
