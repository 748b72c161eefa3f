mod client;

pub use client::{ApiClient, AuthFailureHook, ClientResult};
