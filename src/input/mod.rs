pub(crate) mod base64;
pub(crate) mod data_uri;
pub(crate) mod metadata;
pub(crate) mod path;
pub(crate) mod sniff;
