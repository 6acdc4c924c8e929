// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains everything that is necessary to acquire a knapsack
//! instance: a parser for the csv format used by the benchmark data files,
//! and a seeded synthetic generator for the larger sweep sizes. Chances are
//! high that this module will be of little to no interest to you if you only
//! care about the solvers.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use derive_builder::Builder;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{Instance, Item};

// ----------------------------------------------------------------------------
// --- PARSING ----------------------------------------------------------------
// ----------------------------------------------------------------------------

/// This enumeration simply groups the kind of errors that might occur when
/// parsing an instance from file. There can be io errors (file unreadable),
/// format errors (an int or float cannot be parsed, or a record does not have
/// enough fields). Every error is fatal to the caller: there is no such thing
/// as a partially loaded instance.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected an integer but got something else
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The parser expected a real number but got something else
    #[error("parse float {0}")]
    ParseFloat(#[from] ParseFloatError),
    /// The record at the given (1-based) line does not have enough fields
    #[error("ill formed record at line {0}")]
    Format(usize),
}

/// This function is used to read a knapsack instance from file. It returns
/// either the instance if everything went on well, or an error describing
/// the problem that occurred.
///
/// The expected format is the one of the benchmark data files: a header line
/// (skipped), then one record per line with at least three comma separated
/// fields `index, weight, value`. Any field past the third one is ignored,
/// as are blank lines.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// The parsing core behind `read_instance`: it consumes any buffered reader,
/// which makes it usable on in-memory data as well as on files.
pub fn parse_instance<B: BufRead>(buf: B) -> Result<Instance, Error> {
    let mut items = vec![];
    for (lc, line) in buf.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        // the first line is the header
        if lc == 0 || line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let index = next_field(&mut fields, lc)?.parse::<usize>()?;
        let weight = next_field(&mut fields, lc)?.parse::<usize>()?;
        let value = next_field(&mut fields, lc)?.parse::<f64>()?;

        items.push(Item { weight, value, index });
    }
    Ok(Instance::new(items))
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    lc: usize,
) -> Result<&'a str, Error> {
    fields.next().map(str::trim).ok_or(Error::Format(lc + 1))
}

// ----------------------------------------------------------------------------
// --- GENERATION -------------------------------------------------------------
// ----------------------------------------------------------------------------

/// The synthetic generator producing the instances of the larger sweep sizes.
/// The generator is explicitly seeded so that benchmark runs are
/// reproducible: the same configuration always produces the same instance.
///
/// Weights are drawn uniformly from `1..=max_weight` and values are a uniform
/// integer part in `min_value..=max_value` plus two uniform decimal digits,
/// which matches the distribution of the benchmark data files. Items are
/// identified by their 1-based position in generation order.
///
/// # Example
/// ```
/// # use knapbench::instance::GeneratorBuilder;
/// let generator = GeneratorBuilder::default().seed(42).build().unwrap();
/// let a = generator.generate(100);
/// let b = generator.generate(100);
/// assert_eq!(a.items(), b.items());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Generator {
    /// The seed of the random number generator
    seed: u64,
    /// The largest weight an item can be given
    #[builder(default = "100")]
    max_weight: usize,
    /// The smallest integer part a value can be given
    #[builder(default = "100")]
    min_value: usize,
    /// The largest integer part a value can be given
    #[builder(default = "1000")]
    max_value: usize,
}
impl Generator {
    /// Produces an instance comprising `nb_items` items. The rng is reseeded
    /// on every call, so two calls with the same `nb_items` yield the same
    /// instance.
    pub fn generate(&self, nb_items: usize) -> Instance {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let items = (1..=nb_items)
            .map(|index| Item {
                weight: rng.gen_range(1..=self.max_weight),
                value: rng.gen_range(self.min_value..=self.max_value) as f64
                    + rng.gen_range(0..100) as f64 / 100.0,
                index,
            })
            .collect();
        Instance::new(items)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_parsing {
    use std::io::Cursor;

    use crate::instance::{parse_instance, Error};

    #[test]
    fn it_skips_the_header_and_reads_one_item_per_record() {
        let data = "index,weight,value\n1,2,3.5\n2,3,4.25\n";
        let instance = parse_instance(Cursor::new(data)).unwrap();
        assert_eq!(2, instance.len());
        assert_eq!(2, instance.item(0).weight);
        assert_eq!(3.5, instance.item(0).value);
        assert_eq!(1, instance.item(0).index);
        assert_eq!(2, instance.item(1).index);
    }
    #[test]
    fn blank_lines_are_ignored() {
        let data = "index,weight,value\n\n1,2,3.5\n\n";
        let instance = parse_instance(Cursor::new(data)).unwrap();
        assert_eq!(1, instance.len());
    }
    #[test]
    fn fields_past_the_third_one_are_ignored() {
        let data = "index,weight,value,comment\n1,2,3.5,whatever\n";
        let instance = parse_instance(Cursor::new(data)).unwrap();
        assert_eq!(1, instance.len());
        assert_eq!(3.5, instance.item(0).value);
    }
    #[test]
    fn a_non_numeric_weight_is_a_parse_error() {
        let data = "index,weight,value\n1,heavy,3.5\n";
        let outcome = parse_instance(Cursor::new(data));
        assert!(matches!(outcome, Err(Error::ParseInt(_))));
    }
    #[test]
    fn a_non_numeric_value_is_a_parse_error() {
        let data = "index,weight,value\n1,2,priceless\n";
        let outcome = parse_instance(Cursor::new(data));
        assert!(matches!(outcome, Err(Error::ParseFloat(_))));
    }
    #[test]
    fn a_record_with_missing_fields_is_a_format_error() {
        let data = "index,weight,value\n1,2\n";
        let outcome = parse_instance(Cursor::new(data));
        assert!(matches!(outcome, Err(Error::Format(2))));
    }
    #[test]
    fn a_header_only_input_is_an_empty_instance() {
        let instance = parse_instance(Cursor::new("index,weight,value\n")).unwrap();
        assert!(instance.is_empty());
    }
}

#[cfg(test)]
mod test_generation {
    use crate::instance::GeneratorBuilder;

    #[test]
    fn the_same_seed_reproduces_the_same_instance() {
        let a = GeneratorBuilder::default().seed(42).build().unwrap();
        let b = GeneratorBuilder::default().seed(42).build().unwrap();
        assert_eq!(a.generate(500).items(), b.generate(500).items());
    }
    #[test]
    fn different_seeds_produce_different_instances() {
        let a = GeneratorBuilder::default().seed(42).build().unwrap();
        let b = GeneratorBuilder::default().seed(43).build().unwrap();
        assert_ne!(a.generate(500).items(), b.generate(500).items());
    }
    #[test]
    fn generated_items_stay_within_the_configured_bounds() {
        let generator = GeneratorBuilder::default()
            .seed(7)
            .max_weight(10)
            .min_value(5)
            .max_value(6)
            .build()
            .unwrap();
        for item in generator.generate(1000).items() {
            assert!((1..=10).contains(&item.weight));
            assert!(item.value >= 5.0 && item.value <= 6.99);
        }
    }
    #[test]
    fn generated_items_are_indexed_by_generation_order() {
        let generator = GeneratorBuilder::default().seed(7).build().unwrap();
        for (position, item) in generator.generate(50).items().iter().enumerate() {
            assert_eq!(position + 1, item.index);
        }
    }
}
