/*
 * Responsibility
 * - Authentication gate: one authenticated/unauthenticated branch point per request
 * - Capabilities the gate is built from (SubjectResolver, UnauthenticatedHandler)
 * - Shipped policies and resolvers, plus a factory that wires them from Config
 */
pub mod error;
pub mod exchange;
pub mod factory;
pub mod gate;
pub mod handler;
pub mod policies;
pub mod resolvers;
pub mod subject;

pub use error::AuthcError;
pub use exchange::Exchange;
pub use factory::build_gate;
pub use gate::{AuthenticationGate, MappedValue, Verdict};
pub use handler::UnauthenticatedHandler;
pub use policies::Policy;
pub use subject::{Subject, SubjectResolver};
