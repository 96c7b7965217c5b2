pub(crate) mod letterbox;
