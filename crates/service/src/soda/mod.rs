//! Soda catalog: domain types, repository abstraction and the stock service.

pub mod domain;
pub mod mapper;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::SodaService;
