pub mod dom;
#[cfg(feature = "hydrate")]
pub mod timer;
