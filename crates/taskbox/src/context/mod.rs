mod extractor;

pub use extractor::CurrentOwner;
