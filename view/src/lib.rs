//! View models for project pages. Every rendering decision (navigation
//! targets, badges, which links exist) is taken here so the front end only
//! lays out what it receives.

pub mod card;
pub mod detail;
pub mod route;
pub mod social;
pub mod status;

#[cfg(test)]
mod fixture;
