pub(crate) mod anchor;
pub(crate) mod size;
