//! Account module models.
//!
//! This module contains data structures for account functionality.

use derive_more::Display;
use serde::{Deserialize, Serialize};


#[derive(Deserialize, Serialize, Display, Debug, Clone, PartialEq, Eq)]
#[display("{} {}", type_, amount)]


/// One balance line, e.g. `Current` or `Available`.
///
pub struct Balance {
    pub amount: String,
    #[serde(rename = "type")]
    pub type_: String,
}


#[derive(Deserialize, Serialize, Display, Debug, Clone, PartialEq, Eq)]
#[display("AccountBalance {{ currency: {}, balances: {:?} }}", currency, balances)]


/// Response model for the account balance endpoint.
///
pub struct AccountBalanceResponse {
    pub currency: String,
    pub balances: Vec<Balance>,
}
