pub mod note_handler;

pub use note_handler::{__path_download_note, download_note};
