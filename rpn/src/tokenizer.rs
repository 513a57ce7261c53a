#![deny(warnings)]

#[derive(Clone, PartialEq, Debug)]
pub enum RpnToken {
    Operand(i64),
    BOp(char),
}

/// Splits an RPN expression into tokens. Every token is a single
/// character: a decimal digit becomes an operand with its numeric value
/// (no multi-digit accumulation, "12" is two operands), the four
/// arithmetic operators become `BOp`s, everything else is discarded.
pub struct RpnTokenizer<I: Iterator<Item = char>> {
    src: std::iter::Enumerate<I>,
}

impl<I: Iterator<Item = char>> RpnTokenizer<I> {
    pub fn new(source: I) -> Self {
        RpnTokenizer { src: source.enumerate() }
    }
}

impl<I: Iterator<Item = char>> Iterator for RpnTokenizer<I> {
    // tokens are tagged with their char offset for error reporting
    type Item = (usize, RpnToken);
    fn next(&mut self) -> Option<Self::Item> {
        for (pos, c) in self.src.by_ref() {
            match c {
                '0'..='9' => {
                    let num = c.to_digit(10).unwrap() as i64;
                    return Some((pos, RpnToken::Operand(num)));
                }
                '+' | '-' | '*' | '/' => return Some((pos, RpnToken::BOp(c))),
                _ => continue,
            }
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////
