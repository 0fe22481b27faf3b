pub mod catalog;
pub mod memory;
pub mod user;

pub use catalog::PostgresCatalogRepository;
pub use memory::InMemoryCatalogRepository;
pub use memory::InMemoryUserRepository;
pub use user::PostgresUserRepository;
