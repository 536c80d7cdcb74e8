pub mod activities;

pub use activities::{Activity, ErrorBody, MessageResponse, SignupParams};
