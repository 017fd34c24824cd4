pub(crate) mod clock;
pub(crate) mod post_repository;
pub(crate) mod view_projector;
