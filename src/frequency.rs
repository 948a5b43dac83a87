use std::fmt;

/// Per-byte occurrence counts for one input.
#[derive(Clone, PartialEq, Eq)]
pub struct Frequencies {
    counts: [u64; 256],
}

impl Frequencies {
    pub fn of(bytes: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }
        Frequencies { counts }
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Observed symbols only, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    pub fn distinct(&self) -> usize {
        self.iter().count()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// only the observed symbols, a 256-entry dump is unreadable
impl fmt::Debug for Frequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_input_length() {
        let data = b"mississippi";
        let freqs = Frequencies::of(data);
        assert_eq!(freqs.total(), data.len() as u64);
        assert_eq!(freqs.get(b's'), 4);
        assert_eq!(freqs.get(b'i'), 4);
        assert_eq!(freqs.get(b'p'), 2);
        assert_eq!(freqs.get(b'm'), 1);
        assert_eq!(freqs.distinct(), 4);
    }

    #[test]
    fn iter_skips_unseen_symbols_in_order() {
        let freqs = Frequencies::of(&[3, 1, 3, 255, 0]);
        let seen: Vec<_> = freqs.iter().collect();
        assert_eq!(seen, vec![(0, 1), (1, 1), (3, 2), (255, 1)]);
    }

    #[test]
    fn empty_input_has_no_entries() {
        let freqs = Frequencies::of(&[]);
        assert!(freqs.is_empty());
        assert_eq!(freqs.iter().count(), 0);
    }
}
