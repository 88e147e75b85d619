pub mod generate;
pub mod inference;
pub mod video_request;
