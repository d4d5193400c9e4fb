pub(crate) mod scrubber;
