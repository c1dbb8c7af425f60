//! Line-oriented input reading and validation.
//!
//! The first line and each parcel line are re-requested until they parse. A bad
//! fleet line is returned to the caller as a hard error.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{InputError, LineKind};
use crate::model::{Batch, BatchHeader, Fleet, Parcel};
use crate::problem::Problem;

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn expect_tokens<'l>(line: &'l str, kind: LineKind, expected: usize) -> Result<Vec<&'l str>, InputError> {
    let tokens = tokens(line);
    if tokens.len() != expected {
        return Err(InputError::TokenCount {
            kind,
            expected,
            actual: tokens.len(),
        });
    }
    Ok(tokens)
}

fn parse_number<T: std::str::FromStr>(value: &str, kind: LineKind, field: &'static str) -> Result<T, InputError> {
    value.parse::<T>().map_err(|_| InputError::NotAnInteger {
        kind,
        field,
        value: value.to_string(),
    })
}

/// Parses `baseCost numberOfPackages`.
pub fn parse_batch_header(line: &str) -> Result<BatchHeader, InputError> {
    let kind = LineKind::Header;
    let tokens = expect_tokens(line, kind, 2)?;

    Ok(BatchHeader {
        base_cost: parse_number(tokens[0], kind, "base cost")?,
        parcel_count: parse_number(tokens[1], kind, "number of packages")?,
    })
}

/// Parses `id weight distance offerCodes`, with comma-separated offer codes.
pub fn parse_parcel(line: &str, index: usize) -> Result<Parcel, InputError> {
    let kind = LineKind::Parcel;
    let tokens = expect_tokens(line, kind, 4)?;

    let offer_codes = tokens[3]
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Parcel {
        id: tokens[0].to_string(),
        weight: parse_number(tokens[1], kind, "weight")?,
        distance: parse_number(tokens[2], kind, "distance")?,
        index,
        offer_codes,
    })
}

/// Parses `numberOfVehicles maxSpeed maxCarriableWeight`.
pub fn parse_fleet(line: &str) -> Result<Fleet, InputError> {
    let kind = LineKind::Fleet;
    let tokens = expect_tokens(line, kind, 3)?;

    Ok(Fleet {
        vehicles: parse_number(tokens[0], kind, "number of vehicles")?,
        max_speed: parse_number(tokens[1], kind, "max speed")?,
        capacity: parse_number(tokens[2], kind, "max carriable weight")?,
    })
}

/// Reads a batch from `reader`, writing prompts and line errors to `prompt`.
pub struct InputReader<R, W> {
    reader: R,
    prompt: W,
    buffer: String,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            buffer: String::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt)
    }

    fn next_line(&mut self) -> Result<&str, InputError> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        Ok(self.buffer.trim())
    }

    /// Reads lines until one parses. Retries are unbounded; only I/O errors
    /// and end of input stop the loop.
    fn read_until_valid<T>(&mut self, parse: impl Fn(&str) -> Result<T, InputError>) -> Result<T, InputError> {
        loop {
            let line = self.next_line()?;
            match parse(line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    warn!("rejected input line: {}", err);
                    writeln!(self.prompt, "{}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Shows the problem menu until a known key is entered.
    pub fn pick_problem(&mut self) -> Result<Problem, InputError> {
        loop {
            self.show_menu()?;
            let line = self.next_line()?;
            match Problem::from_key(line) {
                Ok(problem) => {
                    writeln!(self.prompt, "<----------- Selected problem: {} ----------->", problem.title())?;
                    return Ok(problem);
                }
                Err(err) => {
                    warn!("rejected problem selection: {}", err);
                    writeln!(self.prompt, "{}", err)?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), InputError> {
        writeln!(self.prompt, "<----------- What do you want me to calculate? ----------->")?;
        for problem in Problem::ALL {
            writeln!(self.prompt, "{}. {}", problem.key(), problem.title())?;
        }
        writeln!(self.prompt, "<----------- Enter your choice number and press Enter ----------->")?;
        Ok(())
    }

    pub fn read_header(&mut self) -> Result<BatchHeader, InputError> {
        self.read_until_valid(parse_batch_header)
    }

    pub fn read_parcel(&mut self, index: usize) -> Result<Parcel, InputError> {
        self.read_until_valid(|line| parse_parcel(line, index))
    }

    /// Reads the fleet line once; errors are not retried.
    pub fn read_fleet(&mut self) -> Result<Fleet, InputError> {
        let line = self.next_line()?;
        parse_fleet(line)
    }

    /// Reads the header, the parcel lines and, if the problem needs it, the
    /// fleet line.
    pub fn read_batch(&mut self, problem: Problem) -> Result<Batch, InputError> {
        writeln!(self.prompt, "<----------- Enter base cost and number of packages ----------->")?;
        let header = self.read_header()?;

        writeln!(
            self.prompt,
            "<----------- Enter {} package details{} ----------->",
            header.parcel_count,
            if problem.needs_fleet() { " and fleet details" } else { "" }
        )?;

        let mut parcels = Vec::new();
        while parcels.len() < header.parcel_count {
            let parcel = self.read_parcel(parcels.len())?;
            parcels.push(parcel);
        }

        let fleet = if problem.needs_fleet() {
            Some(self.read_fleet()?)
        } else {
            None
        };

        Ok(Batch {
            base_cost: header.base_cost,
            parcels,
            fleet,
        })
    }
}
