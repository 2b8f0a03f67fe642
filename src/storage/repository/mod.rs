pub mod load_repo;
pub mod report_repo;

pub use load_repo::LoadRepository;
pub use report_repo::ReportRepository;
