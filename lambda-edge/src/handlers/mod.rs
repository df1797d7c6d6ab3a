pub mod viewer_request;

pub use viewer_request::handle_viewer_request;
