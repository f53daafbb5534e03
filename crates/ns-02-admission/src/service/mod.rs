//! Service layer wiring the ledger to its ports.

mod admission_service;

pub use admission_service::AdmissionService;
