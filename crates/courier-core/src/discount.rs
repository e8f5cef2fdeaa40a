//! 折扣碼模型

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::str::FromStr;

use crate::{DeliveryError, Result};

/// 折扣值上限
const MAX_DISCOUNT_VALUE: u32 = 100;

/// 折扣類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// 百分比（以配送費用計）
    Percentage,
    /// 固定金額
    Fixed,
    /// 不適用
    #[serde(rename = "NA")]
    NotApplicable,
}

/// 折扣值（數值或 "NA"）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountValue {
    Amount(Decimal),
    NotApplicable,
}

impl DiscountValue {
    /// 取得數值，"NA" 時回傳 None
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(value) => Some(*value),
            Self::NotApplicable => None,
        }
    }
}

impl Serialize for DiscountValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Amount(value) => Serialize::serialize(value, serializer),
            Self::NotApplicable => serializer.serialize_str("NA"),
        }
    }
}

impl<'de> Deserialize<'de> for DiscountValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(Decimal),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) if text == "NA" => Ok(Self::NotApplicable),
            Raw::Text(text) => Decimal::from_str(&text)
                .map(Self::Amount)
                .map_err(|_| D::Error::custom(format!("無效的折扣值: {text}"))),
            Raw::Number(value) => Ok(Self::Amount(value)),
        }
    }
}

/// 折扣條款
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTerms {
    pub value: DiscountValue,

    #[serde(rename = "type")]
    pub discount_type: DiscountType,
}

/// 閉區間 [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// 檢查數值是否落在區間內（含邊界）
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }

    fn validate(&self, code: &str, label: &str) -> Result<()> {
        if self.min < Decimal::ZERO {
            return Err(DeliveryError::Validation(format!(
                "折扣碼 {code} 的{label}下限不可小於 0"
            )));
        }
        if self.min >= self.max {
            return Err(DeliveryError::Validation(format!(
                "折扣碼 {code} 的{label}下限必須小於上限"
            )));
        }
        Ok(())
    }
}

/// 折扣碼記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRecord {
    /// 折扣碼（目錄內唯一）
    pub code: String,

    /// 折扣條款
    #[serde(rename = "discount")]
    pub terms: DiscountTerms,

    /// 適用距離區間
    #[serde(rename = "distance")]
    pub distance_range: ValueRange,

    /// 適用重量區間
    #[serde(rename = "weight")]
    pub weight_range: ValueRange,
}

impl DiscountRecord {
    /// 創建百分比折扣
    pub fn percentage(
        code: String,
        percent: Decimal,
        distance_range: ValueRange,
        weight_range: ValueRange,
    ) -> Self {
        Self::new(
            code,
            DiscountValue::Amount(percent),
            DiscountType::Percentage,
            distance_range,
            weight_range,
        )
    }

    /// 創建固定金額折扣
    pub fn fixed(
        code: String,
        amount: Decimal,
        distance_range: ValueRange,
        weight_range: ValueRange,
    ) -> Self {
        Self::new(
            code,
            DiscountValue::Amount(amount),
            DiscountType::Fixed,
            distance_range,
            weight_range,
        )
    }

    pub fn new(
        code: String,
        value: DiscountValue,
        discount_type: DiscountType,
        distance_range: ValueRange,
        weight_range: ValueRange,
    ) -> Self {
        Self {
            code,
            terms: DiscountTerms {
                value,
                discount_type,
            },
            distance_range,
            weight_range,
        }
    }

    /// 檢查距離與重量是否同時符合折扣條件
    pub fn applies_to(&self, distance: Decimal, weight: Decimal) -> bool {
        self.distance_range.contains(distance) && self.weight_range.contains(weight)
    }

    /// 驗證單筆記錄
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(DeliveryError::Validation("折扣碼不可為空".to_string()));
        }

        if let DiscountValue::Amount(value) = self.terms.value {
            if value < Decimal::ZERO || value > Decimal::from(MAX_DISCOUNT_VALUE) {
                return Err(DeliveryError::Validation(format!(
                    "折扣碼 {} 的折扣值必須介於 0 與 {MAX_DISCOUNT_VALUE} 之間",
                    self.code
                )));
            }
        }

        self.distance_range.validate(&self.code, "距離")?;
        self.weight_range.validate(&self.code, "重量")?;
        Ok(())
    }
}

/// 折扣碼目錄（已驗證：非空、折扣碼唯一）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountRecord>", into = "Vec<DiscountRecord>")]
pub struct DiscountCatalog {
    records: Vec<DiscountRecord>,
}

impl DiscountCatalog {
    /// 創建並驗證折扣碼目錄
    pub fn new(records: Vec<DiscountRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DeliveryError::Validation("折扣碼目錄不可為空".to_string()));
        }

        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.code.as_str()) {
                return Err(DeliveryError::Validation(format!(
                    "折扣碼重複: {}",
                    record.code
                )));
            }
        }

        Ok(Self { records })
    }

    /// 依折扣碼查找
    pub fn find(&self, code: &str) -> Option<&DiscountRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    pub fn records(&self) -> &[DiscountRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<Vec<DiscountRecord>> for DiscountCatalog {
    type Error = DeliveryError;

    fn try_from(records: Vec<DiscountRecord>) -> Result<Self> {
        Self::new(records)
    }
}

impl From<DiscountCatalog> for Vec<DiscountRecord> {
    fn from(catalog: DiscountCatalog) -> Self {
        catalog.records
    }
}
