//! 規劃與計價配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{DeliveryError, Result};

/// 預設每單位距離費率
pub const DEFAULT_DISTANCE_RATE: u32 = 5;

/// 預設每單位重量費率
pub const DEFAULT_WEIGHT_RATE: u32 = 10;

/// 預設窮舉搜尋的包裹數上限
pub const DEFAULT_EXHAUSTIVE_SEARCH_LIMIT: usize = 24;

/// 預設批次ID分隔符
pub const DEFAULT_DELIVERY_ID_SEPARATOR: &str = "&";

/// 配送規劃配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 每單位距離費率
    pub distance_rate: Decimal,

    /// 每單位重量費率
    pub weight_rate: Decimal,

    /// 窮舉搜尋的包裹數上限
    /// - 剩餘包裹數不超過此值：完整窮舉，取最大總重子集
    /// - 超過此值：改用由重到輕的貪婪選取（近似解）
    pub exhaustive_search_limit: usize,

    /// 批次ID分隔符
    pub delivery_id_separator: String,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            distance_rate: Decimal::from(DEFAULT_DISTANCE_RATE),
            weight_rate: Decimal::from(DEFAULT_WEIGHT_RATE),
            exhaustive_search_limit: DEFAULT_EXHAUSTIVE_SEARCH_LIMIT,
            delivery_id_separator: DEFAULT_DELIVERY_ID_SEPARATOR.to_string(),
        }
    }
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 讀取配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DeliveryError::Validation(format!("配置格式錯誤: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置距離費率
    pub fn with_distance_rate(mut self, rate: Decimal) -> Self {
        self.distance_rate = rate;
        self
    }

    /// 建構器模式：設置重量費率
    pub fn with_weight_rate(mut self, rate: Decimal) -> Self {
        self.weight_rate = rate;
        self
    }

    /// 建構器模式：設置窮舉搜尋上限
    pub fn with_exhaustive_search_limit(mut self, limit: usize) -> Self {
        self.exhaustive_search_limit = limit;
        self
    }

    /// 建構器模式：設置批次ID分隔符
    pub fn with_delivery_id_separator(mut self, separator: &str) -> Self {
        self.delivery_id_separator = separator.to_string();
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.distance_rate < Decimal::ZERO || self.weight_rate < Decimal::ZERO {
            return Err(DeliveryError::Validation("費率不可為負數".to_string()));
        }
        if self.delivery_id_separator.is_empty() {
            return Err(DeliveryError::Validation("批次ID分隔符不可為空".to_string()));
        }
        Ok(())
    }
}
