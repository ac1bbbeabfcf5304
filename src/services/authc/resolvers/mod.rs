pub mod extension;
pub mod static_token;

pub use extension::ExtensionResolver;
pub use static_token::StaticTokenResolver;
