mod note_service;

pub use note_service::NoteService;
