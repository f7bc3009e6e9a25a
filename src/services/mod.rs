// Aurora services
// Services provide side-effect-free or cross-cutting functionality: the
// query engine, the login rate limiter, and the auth session holder.

pub mod auth;
pub mod query_engine;
pub mod rate_limiter;
