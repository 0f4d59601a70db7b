pub mod errors;
pub mod html;

pub use errors::{error_to_response, ResultResp};
pub use html::{css_response, html_response, redirect};
