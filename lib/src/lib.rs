#![cfg_attr(feature = "unstable", feature(test))]

//! Narrows a Wordle word list to the words that are consistent with the green, yellow and gray
//! clues given so far.
//!
//! Clues are recorded on a [`ClueFilter`], which folds all of them into a set of
//! [`WordRestrictions`] whenever it is asked for the remaining words. The result never depends on
//! the order in which the clues were added.

mod clues;
mod data;
mod engine;
mod restrictions;
mod results;

pub use clues::*;
pub use data::LocatedLetter;
pub use data::WordBank;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;
