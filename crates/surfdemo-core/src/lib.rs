pub mod cloud;
pub mod consts;
pub mod demo;
pub mod detect;
pub mod error;
pub mod io;
pub mod surface;
