pub mod flash;
pub mod response;
pub mod result;
