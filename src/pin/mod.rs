pub(crate) mod controller;
pub(crate) mod region;
pub(crate) mod schedule;
pub(crate) mod section;
