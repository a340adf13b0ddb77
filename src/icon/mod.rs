pub(crate) mod catalog;
pub(crate) mod cursor;
pub(crate) mod graphic;
