use crate::*;
pub use list::*;

mod list;

/// Supplies secret words, one per game.
///
/// Implementations should pick uniformly at random from their corpus. Where the corpus lives is up to
/// the implementation, the engine only ever sees validated [`SecretWord`]s.
pub trait WordSource {
    fn next_word(&mut self) -> Result<SecretWord>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn next_word(&mut self) -> Result<SecretWord> {
        (**self).next_word()
    }
}

impl<S: WordSource + ?Sized> WordSource for alloc::boxed::Box<S> {
    fn next_word(&mut self) -> Result<SecretWord> {
        (**self).next_word()
    }
}
