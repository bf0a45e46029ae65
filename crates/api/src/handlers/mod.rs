//! HTTP handlers, one module per entity group.
//!
//! Every handler follows the same shape: extract parameters, validate at
//! the boundary, issue the repository call, map the outcome to a status
//! code and JSON body.

pub mod comments;
pub mod items;
pub mod searches;
pub mod users;
