pub(crate) mod analyzer;
pub(crate) mod primitives;
