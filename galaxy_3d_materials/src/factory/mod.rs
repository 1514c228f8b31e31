/// Factory module - script loading and material lifecycle

pub mod factory;

pub use factory::*;
