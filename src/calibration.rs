use log::debug;

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Which characters of a line count as digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scan {
    /// ASCII numerals only.
    #[default]
    Numerals,
    /// ASCII numerals plus the words `one` through `nine`, matched at every
    /// position so overlapping words each count.
    Spelled,
}

/// The digits of one line in the order they appear, duplicates kept.
#[derive(Debug, PartialEq, Eq)]
pub struct Digits {
    values: Vec<u32>,
}

impl Digits {
    pub fn scan(line: &str, scan: Scan) -> Digits {
        let values = line
            .char_indices()
            .filter_map(|(i, c)| match c {
                '0'..='9' => c.to_digit(10),
                _ if scan == Scan::Spelled => spelled_digit(&line[i..]),
                _ => None,
            })
            .collect();
        Digits { values }
    }

    pub fn first(&self) -> Option<u32> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.values.last().copied()
    }

    /// First digit in the tens place, last in the ones place. `None` when
    /// the line had no digits.
    pub fn calibration_value(&self) -> Option<u32> {
        Some(self.first()? * 10 + self.last()?)
    }
}

fn spelled_digit(rest: &str) -> Option<u32> {
    SPELLED
        .iter()
        .find(|(word, _)| rest.starts_with(*word))
        .map(|&(_, digit)| digit)
}

pub fn line_value(line: &str, scan: Scan) -> Option<u32> {
    Digits::scan(line, scan).calibration_value()
}

/// Sums the calibration values of all lines. Lines without digits add nothing.
pub fn total<I, S>(lines: I, scan: Scan) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sum = 0;
    for line in lines {
        let line = line.as_ref();
        match line_value(line, scan) {
            Some(value) => {
                debug!("{:?} -> {}", line, value);
                sum += u64::from(value);
            }
            None => debug!("{:?} -> no digits", line),
        }
    }
    sum
}
