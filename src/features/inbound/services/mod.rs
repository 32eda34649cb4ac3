mod inbound_email_service;

pub use inbound_email_service::InboundEmailService;
