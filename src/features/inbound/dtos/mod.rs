mod inbound_email_dto;

pub use inbound_email_dto::{InboundEmail, InboundEmailForm};
