pub mod request_context;
pub mod storage;
