pub(crate) mod seed;
