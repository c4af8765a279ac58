mod scale;
mod translate;

pub use scale::Scale;
pub use translate::Translate;
