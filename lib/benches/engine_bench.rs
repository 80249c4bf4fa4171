#![feature(test)]

extern crate test;

use wordle_clue_filter::*;

use std::result::Result;
use test::Bencher;

/// Every five-letter word over a small alphabet, in lexicographic order.
fn create_filter() -> Result<ClueFilter, WordleError> {
    let letters = ['a', 'e', 'l', 'n', 'r', 's', 't'];
    let mut words = Vec::new();
    for a in letters {
        for b in letters {
            for c in letters {
                for d in letters {
                    for e in letters {
                        words.push([a, b, c, d, e].iter().collect::<String>());
                    }
                }
            }
        }
    }
    let answers = WordBank::from_iterator(&words[..words.len() / 2])?;
    let allowed = WordBank::from_iterator(&words)?;
    Ok(ClueFilter::new(answers, allowed))
}

#[bench]
fn bench_possible_solutions_no_clues(b: &mut Bencher) -> Result<(), WordleError> {
    let filter = create_filter()?;

    b.iter(|| filter.possible_solutions());

    Ok(())
}

#[bench]
fn bench_possible_solutions_mixed_clues(b: &mut Bencher) -> Result<(), WordleError> {
    let mut filter = create_filter()?;
    filter.add_gray("_r__s")?;
    filter.add_yellow("a____")?;
    filter.add_green("____e")?;
    filter.add_gray("__n__")?;

    b.iter(|| filter.possible_solutions());

    Ok(())
}

#[bench]
fn bench_possible_guesses_mixed_clues(b: &mut Bencher) -> Result<(), WordleError> {
    let mut filter = create_filter()?;
    filter.add_yellow("_t___")?;
    filter.add_gray("l____")?;

    b.iter(|| filter.possible_guesses());

    Ok(())
}
