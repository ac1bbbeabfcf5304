/*
 * Responsibility
 * - Router-level middleware: authentication gate, CORS, security headers, HTTP plumbing
 */
pub mod authc;
pub mod cors;
pub mod http;
pub mod security_headers;
