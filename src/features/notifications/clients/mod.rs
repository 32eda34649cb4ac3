mod twilio_client;

pub use twilio_client::TwilioClient;
