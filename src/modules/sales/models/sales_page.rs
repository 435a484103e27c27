use serde::{Deserialize, Serialize};

use super::RawSaleRecord;
use crate::core::amount::deserialize_list;

fn first_page() -> u32 {
    1
}

/// One page of the sales listing (`{data, page, lastPage}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesPage {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub data: Vec<RawSaleRecord>,

    #[serde(default = "first_page")]
    pub page: u32,

    #[serde(rename = "lastPage", default = "first_page")]
    pub last_page: u32,
}

impl SalesPage {
    pub fn new(data: Vec<RawSaleRecord>, page: u32, last_page: u32) -> Self {
        Self {
            data,
            page,
            last_page,
        }
    }

    /// Whether the upstream reports more pages after this one
    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }
}
