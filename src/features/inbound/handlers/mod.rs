pub mod inbound_email_handler;

pub use inbound_email_handler::{__path_process_inbound_email, process_inbound_email};
