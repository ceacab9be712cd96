//! JSON data transfer objects shared by the HTTP surface.
//!
//! These types describe exactly what goes over the wire. Server-side domain models live
//! in `server::model` and are converted to and from these DTOs at the controller boundary.

pub mod api;
pub mod contact;
pub mod dashboard;
pub mod manage;
pub mod user;
