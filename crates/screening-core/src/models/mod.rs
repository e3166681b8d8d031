pub mod instrument;
pub mod response;
pub mod result;
pub mod session;
