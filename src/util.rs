pub mod date;
pub mod decimal;
pub mod rc;
pub mod rw;
pub mod sys;
