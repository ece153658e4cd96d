//! Read-only market data supplied to condition executors.
//!
//! Price and liquidity come through an injected provider rather than being
//! baked into the executors, so tests can control the observed market and
//! a real feed can be wired in later without touching traversal logic.

/// A read-only view of the market at execution time.
///
/// Implementations must be safe to share across concurrent executions.
pub trait MarketData: Send + Sync {
    fn current_price(&self) -> f64;
    fn current_liquidity(&self) -> f64;
}

/// Fixed-value provider, standing in for a live feed.
#[derive(Debug, Clone, Copy)]
pub struct StaticMarket {
    pub price: f64,
    pub liquidity: f64,
}

impl Default for StaticMarket {
    fn default() -> Self {
        Self {
            price: 0.60,
            liquidity: 100_000.0,
        }
    }
}

impl MarketData for StaticMarket {
    fn current_price(&self) -> f64 {
        self.price
    }

    fn current_liquidity(&self) -> f64 {
        self.liquidity
    }
}
