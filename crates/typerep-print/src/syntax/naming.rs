//! Fresh type-variable names.

/// Generator for `'a`, `'b`, … `'z`, `'aa`, `'ab`, …
///
/// One generator per top-level rendering call; names are never reused within it.
#[derive(Clone, Debug, Default)]
pub struct FreshVars {
    next: usize,
}

impl FreshVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("'{}", letters(self.next));
        self.next += 1;
        name
    }
}

/// Bijective base-26 spelling of `n`: 0 is `a`, 25 is `z`, 26 is `aa`.
pub fn letters(mut n: usize) -> String {
    let mut rev = Vec::new();
    loop {
        rev.push(char::from(b'a' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    rev.iter().rev().collect()
}
