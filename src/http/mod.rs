pub mod accept;
pub mod headers;
pub mod request;
pub mod response;

pub use accept::{parse_quality_list, BrowserLanguages, HttpCharsets};
pub use headers::Headers;
pub use request::Request;
pub use response::{Response, NOT_MODIFIED, OK};
