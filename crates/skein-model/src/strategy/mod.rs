mod admission;
pub use admission::AdmissionStrategy;
