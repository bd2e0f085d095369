/// Literal the vendor export uses instead of a count when an item is sold out.
const OUT_OF_STOCK_SENTINEL: &str = "Out of Stock";

/// Outcome of normalizing the raw stock cell.
///
/// The legacy pipeline silently defaulted anything unparseable to zero; the
/// same values are emitted here, but the three paths are kept distinct so the
/// policy is visible and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Raw value was exactly the out-of-stock sentinel.
    SoldOut,
    /// Raw value parsed as a non-negative unit count.
    Counted(u32),
    /// Raw value was neither the sentinel nor an integer; defaulted to zero.
    Unparseable,
}

impl StockLevel {
    /// Unit count to emit for this outcome.
    pub fn units(self) -> u32 {
        match self {
            StockLevel::Counted(n) => n,
            StockLevel::SoldOut | StockLevel::Unparseable => 0,
        }
    }

    /// Derived availability flag: only a positive count is available.
    pub fn available(self) -> bool {
        self.units() > 0
    }
}

/// Normalize the raw stock field. Sentinel match is exact (no trimming);
/// numeric parse tolerates surrounding whitespace.
pub fn parse_stock(raw: &str) -> StockLevel {
    if raw == OUT_OF_STOCK_SENTINEL {
        return StockLevel::SoldOut;
    }
    match raw.trim().parse::<u32>() {
        Ok(units) => StockLevel::Counted(units),
        Err(_) => StockLevel::Unparseable,
    }
}
