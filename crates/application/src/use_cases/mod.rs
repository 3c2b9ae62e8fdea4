pub mod dns;

pub use dns::ResolveHostnameUseCase;
