//! # Foresight Types
//!
//! Domain records for both client boundaries — the remote market-listing
//! service and the prediction-market ledger contract — together with the
//! schema catalog that guards them. Records are plain serde types with
//! the services' camelCase wire names; every shape in [`market`] and
//! [`contract`] has a matching declaration in [`schemas`].

pub mod contract;
pub mod market;
pub mod schemas;

pub use contract::{
    AddLiquidityParams, Address, BigNumberish, BuyParams, CalcBuyAmountParams,
    CalcSellAmountParams, ClaimParams, ClaimVoidedParams, CreateMarketDescription, MarketAction,
    MarketAltData, MarketData, MarketOutcomeData, MarketPricesData, MarketSharesData, MarketState,
    Portfolio, PortfolioMarket, RemoveLiquidityParams, SellParams, TransactionReceipt,
    UserClaimStatus, UserMarketShares,
};
pub use market::{
    ApiEnvelope, ApiError, Market, MarketCategory, MarketFilters, MarketLiquidity, MarketOutcome,
    MarketStatus, MarketTag, MarketVolume, Network, PageMeta, Paginated, SortDirection, SortField,
};
