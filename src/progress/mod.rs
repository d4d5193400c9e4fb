pub(crate) mod distributor;
pub(crate) mod segments;
