pub(crate) mod config;
pub(crate) mod extensions;
pub(crate) mod generate;
