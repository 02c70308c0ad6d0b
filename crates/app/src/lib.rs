//! Storefront application services: the vendor client, catalog, cart and
//! order services, and the per-view state they feed.

pub mod config;
pub mod context;
pub mod domain;
pub mod notifications;
pub mod vendor;

#[cfg(test)]
mod test;
