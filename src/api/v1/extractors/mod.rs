mod subject;

pub use subject::CurrentSubject;
