pub(crate) mod chain;
pub(crate) mod config;
pub(crate) mod decoders;
pub(crate) mod driver;
