//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs into domain parameters, call a service and turn
//! the result back into a DTO. They hold no logic of their own.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod manage;

#[cfg(test)]
mod test;
