//! Element symbols indexed by atomic number

/// Lowercase element symbols, where index 0 is the free neutron
const SYMBOLS: [&str; 119] = [
    "n", "h", "he", "li", "be", "b", "c", "n", "o", "f", "ne", // 0-10
    "na", "mg", "al", "si", "p", "s", "cl", "ar", "k", "ca", // 11-20
    "sc", "ti", "v", "cr", "mn", "fe", "co", "ni", "cu", "zn", // 21-30
    "ga", "ge", "as", "se", "br", "kr", "rb", "sr", "y", "zr", // 31-40
    "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd", "in", "sn", // 41-50
    "sb", "te", "i", "xe", "cs", "ba", "la", "ce", "pr", "nd", // 51-60
    "pm", "sm", "eu", "gd", "tb", "dy", "ho", "er", "tm", "yb", // 61-70
    "lu", "hf", "ta", "w", "re", "os", "ir", "pt", "au", "hg", // 71-80
    "tl", "pb", "bi", "po", "at", "rn", "fr", "ra", "ac", "th", // 81-90
    "pa", "u", "np", "pu", "am", "cm", "bk", "cf", "es", "fm", // 91-100
    "md", "no", "lr", "rf", "db", "sg", "bh", "hs", "mt", "ds", // 101-110
    "rg", "cn", "nh", "fl", "mc", "lv", "ts", "og", // 111-118
];

/// Find the lowercase element symbol for an atomic number
///
/// ```rust
/// # use nrates_nuclide::element_symbol;
/// assert_eq!(element_symbol(92), Some("u"));
/// assert_eq!(element_symbol(0), Some("n"));
/// assert_eq!(element_symbol(200), None);
/// ```
pub fn element_symbol(z: u32) -> Option<&'static str> {
    SYMBOLS.get(z as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries() {
        assert_eq!(element_symbol(1), Some("h"));
        assert_eq!(element_symbol(26), Some("fe"));
        assert_eq!(element_symbol(118), Some("og"));
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn symbols_are_unique_elements() {
        let mut symbols = SYMBOLS[1..].to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 118);
    }
}
