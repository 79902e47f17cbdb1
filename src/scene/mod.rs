pub(crate) mod composition;
pub(crate) mod fingerprint;
pub(crate) mod ids;
pub(crate) mod logo;
pub(crate) mod model;
pub(crate) mod svg;
