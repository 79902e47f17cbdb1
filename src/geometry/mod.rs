pub(crate) mod ellipse;
