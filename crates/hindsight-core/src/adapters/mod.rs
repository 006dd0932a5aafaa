mod alphavantage;

pub use alphavantage::AlphaVantageSource;
