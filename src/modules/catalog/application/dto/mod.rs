pub mod browse_request;
pub mod browse_response;
pub mod search_request;
pub mod search_response;

pub use browse_request::*;
pub use browse_response::*;
pub use search_request::*;
pub use search_response::*;
