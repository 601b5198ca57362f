//! User accounts: three-layer split (domain, repository, service) plus
//! argon2 password hashing.

pub mod domain;
pub mod password;
pub mod repository;
pub mod service;

pub use repository::SeaOrmUserRepository;
pub use service::UserService;
