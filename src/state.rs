/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone is cheap (the gate is two Arcs)
 */
use crate::services::authc::AuthenticationGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: AuthenticationGate,
}

impl AppState {
    pub fn new(gate: AuthenticationGate) -> Self {
        Self { gate }
    }
}
