//! Movie catalogue: three-layer split (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::SeaOrmMovieRepository;
pub use service::MovieService;
