pub use super::stocks::Entity as Stocks;
