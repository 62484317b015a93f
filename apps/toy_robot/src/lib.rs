//! Console front end for the toy robot: settings and the line-oriented display.

pub mod config;
pub mod console;
