pub(crate) mod ease;
pub(crate) mod schedule;
pub(crate) mod table;
