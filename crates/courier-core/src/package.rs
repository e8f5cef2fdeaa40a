//! 包裹模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 不套用折扣的折扣碼
pub const NO_DISCOUNT_CODE: &str = "NA";

/// 包裹（輸入資料，建立後不再變更）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// 包裹名稱（唯一）
    pub name: String,

    /// 重量
    pub weight: Decimal,

    /// 配送距離
    pub distance: Decimal,

    /// 折扣碼（"NA" 表示無折扣）
    pub discount_code: String,
}

impl Package {
    /// 創建新的包裹
    pub fn new(name: String, weight: Decimal, distance: Decimal, discount_code: String) -> Self {
        Self {
            name,
            weight,
            distance,
            discount_code,
        }
    }

    /// 建構器模式：不套用折扣
    pub fn without_discount(name: String, weight: Decimal, distance: Decimal) -> Self {
        Self::new(name, weight, distance, NO_DISCOUNT_CODE.to_string())
    }
}

/// 單一包裹的排程與計價結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResult {
    /// 包裹名稱
    pub name: String,

    /// 所屬配送批次
    pub delivery_id: String,

    /// 指派車輛
    pub vehicle_id: usize,

    /// 折扣後費用（整數）
    pub cost: Decimal,

    /// 折扣金額（整數）
    pub discount: Decimal,

    /// 單程時間（未取整）
    pub trip_time: Decimal,

    /// 預計送達時間（取兩位小數）
    pub delivery_time: Decimal,
}

impl fmt::Display for PackageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.discount.normalize(),
            self.cost.normalize(),
            self.delivery_time.normalize()
        )
    }
}

/// 只計價、不排程的結果（總費用模式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub name: String,
    pub discount: Decimal,
    pub cost: Decimal,
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.name,
            self.discount.normalize(),
            self.cost.normalize()
        )
    }
}
