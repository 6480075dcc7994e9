pub mod cust_error;
pub mod relation;
pub mod lp_report;
pub mod hs_instance;
pub mod heuristics;
pub mod restarts;
