pub mod health;
pub use self::health::health;

pub mod routes;
pub use self::routes::routes;
