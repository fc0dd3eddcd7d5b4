//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod generic;
pub mod report;
pub mod unit_of_work;

pub use generic::GenericRepository;
pub use report::ReportRepository;
pub use unit_of_work::UnitOfWork;
