pub(crate) mod cutout;
