pub mod book;
pub mod responses;
pub mod storage;
